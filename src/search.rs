use log::{debug, trace};

use crate::chess_move::Move;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::evaluation::Evaluator;
use crate::movegen::MoveGenerator;
use crate::ordering::MoveOrderer;
use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub evaluation: i32,
    pub nodes_searched: u64,
}

impl SearchResult {
    /// Coordinate notation of the best move, if there is one.
    pub fn best_move_string(&self) -> Option<String> {
        self.best_move.map(|mv| mv.to_uci())
    }
}

pub struct Search {
    config: SearchConfig,
    evaluator: Evaluator,
    move_generator: MoveGenerator,
    nodes_searched: u64,
    // Best root move of the previous search and the position it was found in
    previous_root: Option<(Position, Move)>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(),
            move_generator: MoveGenerator::new(),
            nodes_searched: 0,
            previous_root: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    pub fn set_max_depth(&mut self, depth: u32) {
        self.config.set_max_depth(depth);
    }

    pub fn get_nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Forgets the remembered root move.
    pub fn reset(&mut self) {
        self.previous_root = None;
        self.nodes_searched = 0;
    }

    pub fn get_best_move(&mut self, fen: &str, orderer: &mut MoveOrderer) -> Result<SearchResult> {
        let position = Position::from_fen(fen)?;
        Ok(self.search(&position, orderer))
    }

    pub fn search(&mut self, position: &Position, orderer: &mut MoveOrderer) -> SearchResult {
        self.nodes_searched = 0;
        orderer.age_history();

        let hash_move = self
            .previous_root
            .as_ref()
            .filter(|(previous, _)| previous.same_position(position))
            .map(|&(_, mv)| mv);

        let mut root = position.clone();
        let depth = self.config.depth();
        let (best_move, evaluation) =
            self.negamax(&mut root, depth, -i32::MAX, i32::MAX, 0, hash_move, orderer);
        debug_assert_eq!(&root, position);

        self.previous_root = best_move.map(|mv| (position.clone(), mv));

        debug!(
            "searched depth {}: best {} score {} nodes {}",
            depth,
            best_move.map_or_else(|| "(none)".to_string(), |mv| mv.to_uci()),
            evaluation,
            self.nodes_searched
        );

        SearchResult {
            best_move,
            evaluation,
            nodes_searched: self.nodes_searched,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        position: &mut Position,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        hash_move: Option<Move>,
        orderer: &mut MoveOrderer,
    ) -> (Option<Move>, i32) {
        if depth == 0 {
            self.nodes_searched += 1;
            return (None, self.evaluator.evaluate(position));
        }

        let mut moves = self.move_generator.generate_moves(position);
        if moves.is_empty() {
            // Mate and stalemate both score as a draw
            return (None, 0);
        }

        if self.config.use_move_ordering {
            moves = orderer.order_moves(&moves, position, hash_move, ply);
        }

        let mut best_move = None;
        for mv in moves {
            let quiet = !position.is_capture(mv) && !mv.is_promotion();

            let undo = position.make_move(mv);
            let (_, score) = self.negamax(position, depth - 1, -beta, -alpha, ply + 1, None, orderer);
            position.unmake_move(mv, undo);
            let score = -score;

            if ply == 0 {
                trace!("root move {} scored {}", mv, score);
            }

            if score > alpha {
                alpha = score;
                best_move = Some(mv);
            }

            if alpha >= beta {
                if quiet {
                    orderer.add_killer(mv, ply);
                    orderer.update_history(mv, position, depth);
                }
                break;
            }
        }

        (best_move, alpha)
    }
}

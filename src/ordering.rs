use crate::chess_move::Move;
use crate::piece::PieceKind;
use crate::position::Position;

pub const MAX_KILLER_MOVE_PLY: usize = 32;

const HASH_MOVE_SCORE: i32 = 100_000_000;
const WINNING_CAPTURE_BIAS: i32 = 8_000_000;
const PROMOTE_BIAS: i32 = 6_000_000;
const KILLER_BIAS: i32 = 4_000_000;
const LOSING_CAPTURE_BIAS: i32 = 2_000_000;

// MVV-LVA values. The king is never captured and attacks for free.
fn capture_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 320,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Two killer slots per ply, most recent first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Killers {
    a: Option<Move>,
    b: Option<Move>,
}

impl Killers {
    fn add(&mut self, mv: Move) {
        if self.a != Some(mv) {
            self.b = self.a;
            self.a = Some(mv);
        }
    }

    fn contains(&self, mv: Move) -> bool {
        self.a == Some(mv) || self.b == Some(mv)
    }
}

/// Killer and history tables shared across searches.
#[derive(Debug, Clone)]
pub struct MoveOrderer {
    killers: [Killers; MAX_KILLER_MOVE_PLY],
    // [side][from][to]
    history: Box<[[[i32; 64]; 64]; 2]>,
}

impl Default for MoveOrderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOrderer {
    pub fn new() -> Self {
        Self {
            killers: [Killers::default(); MAX_KILLER_MOVE_PLY],
            history: Box::new([[[0; 64]; 64]; 2]),
        }
    }

    /// Returns `moves` sorted best first. Ties keep their generation order.
    pub fn order_moves(
        &self,
        moves: &[Move],
        position: &Position,
        hash_move: Option<Move>,
        ply: usize,
    ) -> Vec<Move> {
        let mut scored: Vec<(i32, Move)> = moves
            .iter()
            .map(|&mv| (self.score_move(mv, position, hash_move, ply), mv))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, mv)| mv).collect()
    }

    pub fn score_move(&self, mv: Move, position: &Position, hash_move: Option<Move>, ply: usize) -> i32 {
        if hash_move == Some(mv) {
            return HASH_MOVE_SCORE;
        }

        let Some(moving) = position.piece_at(mv.from) else {
            return 0;
        };

        let mut score = 0;
        let captured = if position.is_capture(mv) {
            // En passant leaves the target square empty
            Some(position.piece_at(mv.to).map_or(PieceKind::Pawn, |piece| piece.kind))
        } else {
            None
        };

        if let Some(captured) = captured {
            let delta = capture_value(captured) - capture_value(moving.kind);
            score += if delta >= 0 {
                WINNING_CAPTURE_BIAS + delta
            } else {
                LOSING_CAPTURE_BIAS + delta
            };
        }

        if mv.is_promotion() {
            return PROMOTE_BIAS;
        }

        if captured.is_none() {
            if self.is_killer(mv, ply) {
                score += KILLER_BIAS;
            }
            score += self.history[moving.color.index()][mv.from as usize][mv.to as usize];
        }

        score
    }

    pub fn add_killer(&mut self, mv: Move, ply: usize) {
        if let Some(slot) = self.killers.get_mut(ply) {
            slot.add(mv);
        }
    }

    pub fn is_killer(&self, mv: Move, ply: usize) -> bool {
        self.killers.get(ply).map_or(false, |slot| slot.contains(mv))
    }

    /// Credits a quiet move that caused a cutoff with `depth²`.
    pub fn update_history(&mut self, mv: Move, position: &Position, depth: u32) {
        if let Some(piece) = position.piece_at(mv.from) {
            let bonus = (depth * depth) as i32;
            let entry = &mut self.history[piece.color.index()][mv.from as usize][mv.to as usize];
            *entry = entry.saturating_add(bonus);
        }
    }

    pub fn history_score(&self, mv: Move, position: &Position) -> i32 {
        position.piece_at(mv.from).map_or(0, |piece| {
            self.history[piece.color.index()][mv.from as usize][mv.to as usize]
        })
    }

    pub fn age_history(&mut self) {
        for side in self.history.iter_mut() {
            for from in side.iter_mut() {
                for entry in from.iter_mut() {
                    *entry /= 2;
                }
            }
        }
    }

    pub fn clear_killers(&mut self) {
        self.killers = [Killers::default(); MAX_KILLER_MOVE_PLY];
    }

    pub fn clear_history(&mut self) {
        *self.history = [[[0; 64]; 64]; 2];
    }

    pub fn clear(&mut self) {
        self.clear_killers();
        self.clear_history();
    }
}

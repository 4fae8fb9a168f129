pub mod chess_move;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod movegen;
pub mod ordering;
pub mod piece;
pub mod position;
pub mod search;
pub mod uci;

pub use chess_move::{Move, MoveFlag};
pub use config::SearchConfig;
pub use error::{ChessError, FenError, Result};
pub use evaluation::{EvaluationData, Evaluator};
pub use movegen::{GameState, MoveGenerator, MoveOutcome};
pub use ordering::MoveOrderer;
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, START_FEN};
pub use search::{Search, SearchResult};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn perft(fen: &str, depth: u32) -> u64 {
        let mut position = Position::from_fen(fen).unwrap();
        MoveGenerator::new().perft(&mut position, depth)
    }

    #[test]
    fn test_initial_position() {
        let position = Position::from_fen(START_FEN).unwrap();
        let generator = MoveGenerator::new();
        assert_eq!(generator.generate_moves(&position).len(), 20);
        assert_eq!(position.to_fen(), START_FEN);
        assert_eq!(Evaluator::new().evaluate(&position), 0);
    }

    #[test]
    fn test_perft() {
        assert_eq!(perft(START_FEN, 3), 8902);
        assert_eq!(perft("8/2p5/3p4/KP5r/1R3k2/8/4P3/8 w - - 0 1", 3), 2812);
    }

    #[test]
    fn test_random_playouts_round_trip() {
        let generator = MoveGenerator::new();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let mut position = Position::new();
            for _ in 0..80 {
                let moves = generator.generate_moves(&position);
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };

                let before = position.to_fen();
                let undo = position.make_move(mv);
                let after = position.to_fen();
                assert_eq!(Position::from_fen(&after).unwrap().to_fen(), after);

                position.unmake_move(mv, undo);
                assert_eq!(position.to_fen(), before);

                position.apply(mv);
                assert_eq!(position.to_fen(), after);
                assert!(!generator.is_king_in_check(&position, position.side_to_move().opposite()));
            }
        }
    }

    #[test]
    fn test_en_passant_file_lifecycle() {
        let generator = MoveGenerator::new();
        let mut position = Position::new();
        position.apply(generator.find_move(&position, "e2e4").unwrap());
        assert_eq!(position.en_passant_file(), 5);
        position.apply(generator.find_move(&position, "g8f6").unwrap());
        assert_eq!(position.en_passant_file(), 0);
    }

    #[test]
    fn test_play_scholars_mate() {
        let generator = MoveGenerator::new();
        let mut position = Position::new();
        let mut history = Vec::new();
        for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
            let mv = generator.find_move(&position, text).unwrap();
            history.push(position.clone());
            position.apply(mv);
        }
        assert_eq!(
            generator.game_state(&position, &history),
            GameState::Checkmate(Color::White)
        );
    }

    #[test]
    fn test_get_best_move_api() {
        let mut search = Search::new();
        let mut orderer = MoveOrderer::new();
        search.set_max_depth(2);

        // Black can take the undefended rook on h1 with the bishop on a8
        let result = search
            .get_best_move("b3k3/8/8/8/8/8/8/4K2R b - - 0 1", &mut orderer)
            .unwrap();
        assert_eq!(result.best_move_string().as_deref(), Some("a8h1"));
        assert!(result.nodes_searched > 0);

        assert!(matches!(
            search.get_best_move("rnbqkbnr/pppppppp w KQkq - 0 1", &mut orderer),
            Err(ChessError::Format(FenError::RankCount(2)))
        ));
    }
}

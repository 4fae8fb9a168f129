use thiserror::Error;

use crate::piece::Color;

/// Defects found while parsing a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 4 to 6 fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files instead of 8")]
    FileCount { rank: u8, files: usize },

    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling field '{0}'")]
    Castling(String),

    #[error("invalid en passant field '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    Counter(String),

    #[error("{color} has {count} kings")]
    KingCount { color: Color, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("malformed FEN: {0}")]
    Format(#[from] FenError),

    #[error("illegal move: {0}")]
    InvalidMove(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: ChessError = FenError::UnknownPiece('x').into();
        assert_eq!(err.to_string(), "malformed FEN: unknown piece letter 'x'");

        let err = ChessError::InvalidMove("e2e5".to_string());
        assert_eq!(err.to_string(), "illegal move: e2e5");

        let err = FenError::KingCount { color: Color::Black, count: 0 };
        assert_eq!(err.to_string(), "black has 0 kings");
    }
}

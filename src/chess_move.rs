use std::fmt;

use crate::piece::{Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    None,
    EnPassant,
    Castle,
    DoublePush,
    PromoteToQueen,
    PromoteToKnight,
    PromoteToRook,
    PromoteToBishop,
}

impl MoveFlag {
    pub fn promotion(kind: PieceKind) -> MoveFlag {
        match kind {
            PieceKind::Knight => MoveFlag::PromoteToKnight,
            PieceKind::Rook => MoveFlag::PromoteToRook,
            PieceKind::Bishop => MoveFlag::PromoteToBishop,
            _ => MoveFlag::PromoteToQueen,
        }
    }
}

/// A move from `from` to `to` (both 0..64, a1 = 0, h8 = 63).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8,
    pub to: u8,
    pub flag: MoveFlag,
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            flag: MoveFlag::None,
        }
    }

    pub fn with_flag(from: u8, to: u8, flag: MoveFlag) -> Self {
        Self { from, to, flag }
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion_kind().is_some()
    }

    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.flag {
            MoveFlag::PromoteToQueen => Some(PieceKind::Queen),
            MoveFlag::PromoteToKnight => Some(PieceKind::Knight),
            MoveFlag::PromoteToRook => Some(PieceKind::Rook),
            MoveFlag::PromoteToBishop => Some(PieceKind::Bishop),
            _ => None,
        }
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> String {
        let mut text = String::with_capacity(5);
        text.push_str(&square_name(self.from));
        text.push_str(&square_name(self.to));
        if let Some(kind) = self.promotion_kind() {
            text.push(kind.letter());
        }
        text
    }

    /// Short algebraic form as shown to players: `Nf3`, `exd6`, `O-O`,
    /// `e8=Q`. Check marks are left to the caller.
    pub fn to_algebraic(&self, piece: Piece, is_capture: bool) -> String {
        if self.flag == MoveFlag::Castle {
            return if file_of(self.to) > file_of(self.from) {
                "O-O".to_string()
            } else {
                "O-O-O".to_string()
            };
        }

        let mut text = String::with_capacity(7);
        if piece.kind != PieceKind::Pawn {
            text.push(piece.kind.letter().to_ascii_uppercase());
        }
        if is_capture {
            if piece.kind == PieceKind::Pawn {
                text.push((b'a' + file_of(self.from)) as char);
            }
            text.push('x');
        }
        text.push_str(&square_name(self.to));
        if let Some(kind) = self.promotion_kind() {
            text.push('=');
            text.push(kind.letter().to_ascii_uppercase());
        }
        text
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

pub fn file_of(square: u8) -> u8 {
    square % 8
}

pub fn rank_of(square: u8) -> u8 {
    square / 8
}

pub fn square_name(square: u8) -> String {
    let file = (b'a' + file_of(square)) as char;
    let rank = (b'1' + rank_of(square)) as char;
    format!("{}{}", file, rank)
}

/// Parses `e4`-style square names. Returns `None` for anything else.
pub fn parse_square(name: &str) -> Option<u8> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a').filter(|&f| f < 8)?;
    let rank = bytes[1].checked_sub(b'1').filter(|&r| r < 8)?;
    Some(rank * 8 + file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Color;

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(12), "e2");
        assert_eq!(square_name(63), "h8");
        assert_eq!(parse_square("e4"), Some(28));
        assert_eq!(parse_square("h8"), Some(63));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("a"), None);
    }

    #[test]
    fn test_move_strings() {
        assert_eq!(Move::new(12, 28).to_uci(), "e2e4");
        let promo = Move::with_flag(52, 60, MoveFlag::PromoteToKnight);
        assert_eq!(promo.to_string(), "e7e8n");
        assert!(promo.is_promotion());
        assert!(!Move::with_flag(4, 6, MoveFlag::Castle).is_promotion());
    }

    #[test]
    fn test_algebraic_notation() {
        let white = |kind| Piece::new(kind, Color::White);
        let black = |kind| Piece::new(kind, Color::Black);

        assert_eq!(Move::new(6, 21).to_algebraic(white(PieceKind::Knight), false), "Nf3");
        assert_eq!(Move::new(21, 36).to_algebraic(white(PieceKind::Knight), true), "Nxe5");
        assert_eq!(Move::new(12, 28).to_algebraic(white(PieceKind::Pawn), false), "e4");
        assert_eq!(
            Move::with_flag(36, 43, MoveFlag::EnPassant).to_algebraic(white(PieceKind::Pawn), true),
            "exd6"
        );
        assert_eq!(
            Move::with_flag(4, 6, MoveFlag::Castle).to_algebraic(white(PieceKind::King), false),
            "O-O"
        );
        assert_eq!(
            Move::with_flag(60, 58, MoveFlag::Castle).to_algebraic(black(PieceKind::King), false),
            "O-O-O"
        );
        assert_eq!(
            Move::with_flag(52, 60, MoveFlag::PromoteToQueen).to_algebraic(white(PieceKind::Pawn), false),
            "e8=Q"
        );
        assert_eq!(
            Move::with_flag(11, 2, MoveFlag::PromoteToKnight).to_algebraic(black(PieceKind::Pawn), true),
            "dxc1=N"
        );
        assert_eq!(Move::new(3, 59).to_algebraic(white(PieceKind::Queen), true), "Qxd8");
    }

    #[test]
    fn test_promotion_flag_mapping() {
        assert_eq!(MoveFlag::promotion(PieceKind::Rook), MoveFlag::PromoteToRook);
        assert_eq!(MoveFlag::promotion(PieceKind::Queen), MoveFlag::PromoteToQueen);
        assert_eq!(
            Move::with_flag(8, 0, MoveFlag::PromoteToBishop).promotion_kind(),
            Some(PieceKind::Bishop)
        );
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 0 for white, 1 for black. Used to index per-side tables.
    pub fn index(&self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Type code in the packed encoding (1..=6).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter used by FEN and promotion suffixes.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece standing on a square. Empty squares are `None` in the
/// position's square array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

const COLOR_BIT: u8 = 0b1000;
const KIND_MASK: u8 = 0b0111;

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Packed form: kind code in the low 3 bits, bit 3 set for black.
    pub fn to_bits(&self) -> u8 {
        let color = match self.color {
            Color::White => 0,
            Color::Black => COLOR_BIT,
        };
        self.kind.code() | color
    }

    /// Inverse of `to_bits`. Zero and unknown kind codes decode to `None`.
    pub fn from_bits(bits: u8) -> Option<Piece> {
        if bits & !(COLOR_BIT | KIND_MASK) != 0 {
            return None;
        }
        let kind = PieceKind::from_code(bits & KIND_MASK)?;
        let color = if bits & COLOR_BIT != 0 {
            Color::Black
        } else {
            Color::White
        };
        Some(Piece::new(kind, color))
    }

    /// FEN character: uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_encoding() {
        let black_queen = Piece::new(PieceKind::Queen, Color::Black);
        assert_eq!(black_queen.to_bits(), 5 | 8);
        assert_eq!(Piece::from_bits(13), Some(black_queen));

        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(white_pawn.to_bits(), 1);

        for kind in PieceKind::ALL {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.to_bits() & 0b0111, kind.code());
                assert_eq!(Piece::from_bits(piece.to_bits()), Some(piece));
            }
        }
    }

    #[test]
    fn test_empty_and_invalid_bits() {
        assert_eq!(Piece::from_bits(0), None);
        assert_eq!(Piece::from_bits(7), None);
        assert_eq!(Piece::from_bits(8), None);
        assert_eq!(Piece::from_bits(0x11), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Piece::from_symbol('N'), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(Piece::from_symbol('k'), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::new(PieceKind::Rook, Color::White).symbol(), 'R');
        assert_eq!(Piece::new(PieceKind::Bishop, Color::Black).to_string(), "b");
    }

    #[test]
    fn test_color_opposite() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::Black.index(), 1);
    }
}

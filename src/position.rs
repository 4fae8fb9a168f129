use std::fmt;

use crate::chess_move::{file_of, parse_square, rank_of, square_name, Move, MoveFlag};
use crate::error::{FenError, Result};
use crate::piece::{Color, Piece, PieceKind};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_KINGSIDE: u8 = 0b0001;
pub const WHITE_QUEENSIDE: u8 = 0b0010;
pub const BLACK_KINGSIDE: u8 = 0b0100;
pub const BLACK_QUEENSIDE: u8 = 0b1000;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Mailbox board state. Square 0 is a1, square 63 is h8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    castling_rights: u8, // 4 bits: KQkq
    en_passant_file: u8, // 0 = none, 1..=8 = a..h
    halfmove_clock: u32,
    fullmove_number: u32,
    king_squares: [u8; 2],
}

/// Everything `unmake_move` needs to put a position back the way it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    moved: Option<Piece>,
    captured: Option<(u8, Piece)>,
    castling_rights: u8,
    en_passant_file: u8,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Undo {
    /// The piece removed by the move and the square it stood on.
    pub fn captured(&self) -> Option<(u8, Piece)> {
        self.captured
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut squares = [None; 64];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            squares[file] = Some(Piece::new(kind, Color::White));
            squares[8 + file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            squares[48 + file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            squares[56 + file] = Some(Piece::new(kind, Color::Black));
        }

        Self {
            squares,
            side_to_move: Color::White,
            castling_rights: 0b1111,
            en_passant_file: 0,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_squares: [4, 60],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(FenError::FieldCount(fields.len()).into());
        }

        let squares = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string()).into()),
        };

        let castling_rights = parse_castling(fields[2])?;
        let en_passant_file = parse_en_passant(fields[3], side_to_move)?;

        let halfmove_clock = match fields.get(4) {
            Some(text) => parse_counter(text)?,
            None => 0,
        };
        let fullmove_number = match fields.get(5) {
            Some(text) => parse_counter(text)?,
            None => 1,
        };

        let mut king_squares = [0u8; 2];
        for color in [Color::White, Color::Black] {
            let kings: Vec<u8> = (0..64u8)
                .filter(|&sq| squares[sq as usize] == Some(Piece::new(PieceKind::King, color)))
                .collect();
            if kings.len() != 1 {
                return Err(FenError::KingCount {
                    color,
                    count: kings.len(),
                }
                .into());
            }
            king_squares[color.index()] = kings[0];
        }

        Ok(Self {
            squares,
            side_to_move,
            castling_rights,
            en_passant_file,
            halfmove_clock,
            fullmove_number,
            king_squares,
        })
    }

    /// Replaces this position with the one described by `fen`. On error the
    /// position is left as it was.
    pub fn load(&mut self, fen: &str) -> Result<()> {
        *self = Position::from_fen(fen)?;
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.squares[(rank * 8 + file) as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push_str(match self.side_to_move {
            Color::White => " w ",
            Color::Black => " b ",
        });

        if self.castling_rights == 0 {
            fen.push('-');
        } else {
            for (bit, symbol) in [
                (WHITE_KINGSIDE, 'K'),
                (WHITE_QUEENSIDE, 'Q'),
                (BLACK_KINGSIDE, 'k'),
                (BLACK_QUEENSIDE, 'q'),
            ] {
                if self.castling_rights & bit != 0 {
                    fen.push(symbol);
                }
            }
        }

        fen.push(' ');
        match self.en_passant_target() {
            Some(square) => fen.push_str(&square_name(square)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    pub fn piece_at(&self, square: u8) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|piece| (square as u8, piece)))
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> u8 {
        self.castling_rights
    }

    pub fn en_passant_file(&self) -> u8 {
        self.en_passant_file
    }

    /// The square a pawn capturing en passant would land on.
    pub fn en_passant_target(&self) -> Option<u8> {
        if self.en_passant_file == 0 {
            return None;
        }
        let rank = match self.side_to_move {
            Color::White => 5,
            Color::Black => 2,
        };
        Some(rank * 8 + self.en_passant_file - 1)
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn king_square(&self, color: Color) -> u8 {
        self.king_squares[color.index()]
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        mv.flag == MoveFlag::EnPassant || self.piece_at(mv.to).is_some()
    }

    /// Same placement, side, castling rights and en passant file. Move
    /// counters are ignored.
    pub fn same_position(&self, other: &Position) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_file == other.en_passant_file
    }

    /// Plays `mv` without keeping undo information.
    pub fn apply(&mut self, mv: Move) {
        self.make_move(mv);
    }

    /// Plays `mv`, which must come from the move generator for this position.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let mover = self.side_to_move;
        let from = mv.from as usize;
        let to = mv.to as usize;
        let moved = self.squares[from];
        debug_assert!(
            moved.map_or(false, |piece| piece.color == mover),
            "no {} piece on {}",
            mover,
            square_name(mv.from)
        );

        let mut undo = Undo {
            moved,
            captured: self.squares[to].map(|piece| (mv.to, piece)),
            castling_rights: self.castling_rights,
            en_passant_file: self.en_passant_file,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        self.squares[to] = moved;
        self.squares[from] = None;

        let moved_kind = moved.map(|piece| piece.kind);
        if moved_kind == Some(PieceKind::King) {
            self.king_squares[mover.index()] = mv.to;
        }

        match mv.flag {
            MoveFlag::EnPassant => {
                if let Some(square) = pawn_behind(mv.to, mover) {
                    undo.captured = self.squares[square as usize].map(|piece| (square, piece));
                    self.squares[square as usize] = None;
                }
            }
            MoveFlag::Castle => {
                if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
                    self.squares[rook_to as usize] = self.squares[rook_from as usize];
                    self.squares[rook_from as usize] = None;
                }
            }
            _ => {
                if mv.is_promotion() {
                    let kind = mv.promotion_kind().unwrap_or(PieceKind::Queen);
                    self.squares[to] = moved.map(|piece| Piece::new(kind, piece.color));
                }
            }
        }

        self.en_passant_file = 0;
        if mv.flag == MoveFlag::DoublePush {
            self.en_passant_file = file_of(mv.from) + 1;
        }

        if moved_kind == Some(PieceKind::King) {
            self.castling_rights &= match mover {
                Color::White => !(WHITE_KINGSIDE | WHITE_QUEENSIDE),
                Color::Black => !(BLACK_KINGSIDE | BLACK_QUEENSIDE),
            };
        }

        if moved_kind == Some(PieceKind::Pawn) || undo.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.side_to_move = mover.opposite();
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        undo
    }

    /// Reverts `mv`, which must be the last move made with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        let mover = self.side_to_move.opposite();
        self.side_to_move = mover;
        self.fullmove_number = undo.fullmove_number;

        self.castling_rights = undo.castling_rights;
        self.en_passant_file = undo.en_passant_file;
        self.halfmove_clock = undo.halfmove_clock;

        if mv.flag == MoveFlag::Castle {
            if let Some((rook_from, rook_to)) = castle_rook_squares(mv.to) {
                self.squares[rook_from as usize] = self.squares[rook_to as usize];
                self.squares[rook_to as usize] = None;
            }
        }

        self.squares[mv.from as usize] = undo.moved;
        self.squares[mv.to as usize] = None;
        if let Some((square, piece)) = undo.captured {
            self.squares[square as usize] = Some(piece);
        }

        if undo.moved.map(|piece| piece.kind) == Some(PieceKind::King) {
            self.king_squares[mover.index()] = mv.from;
        }
    }
}

/// Square of the pawn taken by an en passant capture landing on `target`.
fn pawn_behind(target: u8, mover: Color) -> Option<u8> {
    match mover {
        Color::White => target.checked_sub(8),
        Color::Black => Some(target + 8).filter(|&square| square < 64),
    }
}

/// Rook origin and destination for a castling king landing on `king_to`.
pub(crate) fn castle_rook_squares(king_to: u8) -> Option<(u8, u8)> {
    match king_to {
        6 => Some((7, 5)),
        2 => Some((0, 3)),
        62 => Some((63, 61)),
        58 => Some((56, 59)),
        _ => None,
    }
}

fn parse_placement(placement: &str) -> Result<[Option<Piece>; 64]> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()).into());
    }

    let mut squares = [None; 64];
    for (index, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - index as u8;
        let mut file = 0usize;
        for symbol in rank_text.chars() {
            if let Some(skip) = symbol.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::UnknownPiece(symbol).into());
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_symbol(symbol).ok_or(FenError::UnknownPiece(symbol))?;
                if file < 8 {
                    squares[rank as usize * 8 + file] = Some(piece);
                }
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::FileCount {
                rank: rank + 1,
                files: file,
            }
            .into());
        }
    }
    Ok(squares)
}

fn parse_castling(field: &str) -> Result<u8> {
    if field == "-" {
        return Ok(0);
    }
    let mut rights = 0u8;
    for symbol in field.chars() {
        let bit = match symbol {
            'K' => WHITE_KINGSIDE,
            'Q' => WHITE_QUEENSIDE,
            'k' => BLACK_KINGSIDE,
            'q' => BLACK_QUEENSIDE,
            _ => return Err(FenError::Castling(field.to_string()).into()),
        };
        if rights & bit != 0 {
            return Err(FenError::Castling(field.to_string()).into());
        }
        rights |= bit;
    }
    Ok(rights)
}

/// The target must sit behind a pawn of the side that just moved.
fn parse_en_passant(field: &str, side_to_move: Color) -> Result<u8> {
    if field == "-" {
        return Ok(0);
    }
    let target_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    match parse_square(field) {
        Some(square) if rank_of(square) == target_rank => Ok(file_of(square) + 1),
        _ => Err(FenError::EnPassant(field.to_string()).into()),
    }
}

fn parse_counter(field: &str) -> Result<u32> {
    field
        .parse::<u32>()
        .map_err(|_| FenError::Counter(field.to_string()).into())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = String::new();
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let symbol = self
                    .piece_at(rank * 8 + file)
                    .map_or('.', |piece| piece.symbol());
                result.push(symbol);
                if file < 7 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        write!(f, "{}", result)
    }
}

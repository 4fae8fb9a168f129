use crate::chess_move::{rank_of, Move, MoveFlag};
use crate::error::{ChessError, Result};
use crate::piece::{Color, Piece, PieceKind};
use crate::position::{
    Position, BLACK_KINGSIDE, BLACK_QUEENSIDE, WHITE_KINGSIDE, WHITE_QUEENSIDE,
};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const PROMOTION_FLAGS: [MoveFlag; 4] = [
    MoveFlag::PromoteToQueen,
    MoveFlag::PromoteToKnight,
    MoveFlag::PromoteToRook,
    MoveFlag::PromoteToBishop,
];

/// Square reached by stepping `file_step` files and `rank_step` ranks, if it
/// is still on the board.
fn offset_square(square: u8, file_step: i8, rank_step: i8) -> Option<u8> {
    let file = (square % 8) as i8 + file_step;
    let rank = (square / 8) as i8 + rank_step;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 8 + file) as u8)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Ongoing,
    Checkmate(Color), // Color is the winner
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        *self != GameState::Ongoing
    }
}

/// What a submitted move did and where it left the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub fen: String,
    pub state: GameState,
    pub is_check: bool,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub notation: String,
}

impl MoveOutcome {
    /// The side that delivered mate, if the move ended the game that way.
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::Checkmate(winner) => Some(winner),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// All legal moves for the side to move. An empty list means checkmate or
    /// stalemate; `is_king_in_check` tells them apart.
    pub fn generate_moves(&self, position: &Position) -> Vec<Move> {
        let mover = position.side_to_move();
        let mut scratch = position.clone();

        self.generate_pseudo_legal(position)
            .into_iter()
            .filter(|&mv| {
                let undo = scratch.make_move(mv);
                let legal = !self.is_king_in_check(&scratch, mover);
                scratch.unmake_move(mv, undo);
                legal
            })
            .collect()
    }

    /// Legal moves in coordinate notation.
    pub fn legal_move_strings(&self, position: &Position) -> Vec<String> {
        self.generate_moves(position)
            .iter()
            .map(Move::to_uci)
            .collect()
    }

    /// Resolves a submitted move such as `e2e4` or `a7a8q` to the legal move
    /// it names.
    pub fn find_move(&self, position: &Position, text: &str) -> Result<Move> {
        let text = text.trim();
        self.generate_moves(position)
            .into_iter()
            .find(|mv| mv.to_uci() == text)
            .ok_or_else(|| ChessError::InvalidMove(text.to_string()))
    }

    /// Plays a submitted move on the position described by `fen`.
    pub fn play_move(&self, fen: &str, text: &str) -> Result<MoveOutcome> {
        let mut position = Position::from_fen(fen)?;
        let mv = self.find_move(&position, text)?;
        let moved = position
            .piece_at(mv.from)
            .ok_or_else(|| ChessError::InvalidMove(text.to_string()))?;

        let undo = position.make_move(mv);
        let captured = undo.captured().map(|(_, piece)| piece);
        let state = self.game_state(&position, &[]);
        let is_check = self.is_king_in_check(&position, position.side_to_move());

        Ok(MoveOutcome {
            mv,
            fen: position.to_fen(),
            state,
            is_check,
            moved,
            captured,
            notation: mv.to_algebraic(moved, captured.is_some()),
        })
    }

    fn generate_pseudo_legal(&self, position: &Position) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        let us = position.side_to_move();

        for (from, piece) in position.pieces() {
            if piece.color != us {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(position, from, us, &mut moves),
                PieceKind::Knight => self.step_moves(position, from, us, &KNIGHT_OFFSETS, &mut moves),
                PieceKind::Bishop => {
                    self.slide_moves(position, from, us, &BISHOP_DIRECTIONS, &mut moves)
                }
                PieceKind::Rook => self.slide_moves(position, from, us, &ROOK_DIRECTIONS, &mut moves),
                PieceKind::Queen => {
                    self.slide_moves(position, from, us, &BISHOP_DIRECTIONS, &mut moves);
                    self.slide_moves(position, from, us, &ROOK_DIRECTIONS, &mut moves);
                }
                PieceKind::King => {
                    self.step_moves(position, from, us, &KING_OFFSETS, &mut moves);
                    self.castling_moves(position, from, us, &mut moves);
                }
            }
        }

        moves
    }

    fn pawn_moves(&self, position: &Position, from: u8, us: Color, moves: &mut Vec<Move>) {
        let (forward, start_rank) = match us {
            Color::White => (1i8, 1u8),
            Color::Black => (-1i8, 6u8),
        };

        // Pushes
        if let Some(one) = offset_square(from, 0, forward) {
            if position.piece_at(one).is_none() {
                push_pawn_move(from, one, moves);
                if rank_of(from) == start_rank {
                    if let Some(two) = offset_square(from, 0, 2 * forward) {
                        if position.piece_at(two).is_none() {
                            moves.push(Move::with_flag(from, two, MoveFlag::DoublePush));
                        }
                    }
                }
            }
        }

        // Captures, including en passant
        let en_passant = position.en_passant_target();
        for file_step in [-1, 1] {
            let Some(target) = offset_square(from, file_step, forward) else {
                continue;
            };
            match position.piece_at(target) {
                Some(piece) if piece.color != us => push_pawn_move(from, target, moves),
                None if Some(target) == en_passant => {
                    let victim = offset_square(target, 0, -forward)
                        .and_then(|square| position.piece_at(square));
                    if victim == Some(Piece::new(PieceKind::Pawn, us.opposite())) {
                        moves.push(Move::with_flag(from, target, MoveFlag::EnPassant));
                    }
                }
                _ => {}
            }
        }
    }

    fn step_moves(
        &self,
        position: &Position,
        from: u8,
        us: Color,
        offsets: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(file_step, rank_step) in offsets {
            if let Some(to) = offset_square(from, file_step, rank_step) {
                match position.piece_at(to) {
                    Some(piece) if piece.color == us => {}
                    _ => moves.push(Move::new(from, to)),
                }
            }
        }
    }

    fn slide_moves(
        &self,
        position: &Position,
        from: u8,
        us: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(file_step, rank_step) in directions {
            let mut square = from;
            while let Some(to) = offset_square(square, file_step, rank_step) {
                match position.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(piece) => {
                        if piece.color != us {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                square = to;
            }
        }
    }

    fn castling_moves(&self, position: &Position, from: u8, us: Color, moves: &mut Vec<Move>) {
        let (home, kingside, queenside) = match us {
            Color::White => (4u8, WHITE_KINGSIDE, WHITE_QUEENSIDE),
            Color::Black => (60u8, BLACK_KINGSIDE, BLACK_QUEENSIDE),
        };
        let rights = position.castling_rights();
        if from != home || rights & (kingside | queenside) == 0 {
            return;
        }

        let them = us.opposite();
        if self.is_square_attacked(position, home, them) {
            return;
        }

        let rook = Some(Piece::new(PieceKind::Rook, us));
        let empty = |square: u8| position.piece_at(square).is_none();
        let safe = |square: u8| !self.is_square_attacked(position, square, them);

        if rights & kingside != 0
            && position.piece_at(home + 3) == rook
            && empty(home + 1)
            && empty(home + 2)
            && safe(home + 1)
            && safe(home + 2)
        {
            moves.push(Move::with_flag(home, home + 2, MoveFlag::Castle));
        }

        if rights & queenside != 0
            && position.piece_at(home - 4) == rook
            && empty(home - 1)
            && empty(home - 2)
            && empty(home - 3)
            && safe(home - 1)
            && safe(home - 2)
        {
            moves.push(Move::with_flag(home, home - 2, MoveFlag::Castle));
        }
    }

    pub fn is_square_attacked(&self, position: &Position, square: u8, attacker: Color) -> bool {
        let holds = |sq: Option<u8>, kind: PieceKind| {
            sq.and_then(|sq| position.piece_at(sq)) == Some(Piece::new(kind, attacker))
        };

        // A pawn attacks diagonally forward, so look one rank back from its
        // point of view.
        let pawn_rank_step = match attacker {
            Color::White => -1,
            Color::Black => 1,
        };
        if holds(offset_square(square, -1, pawn_rank_step), PieceKind::Pawn)
            || holds(offset_square(square, 1, pawn_rank_step), PieceKind::Pawn)
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(offset_square(square, df, dr), PieceKind::King))
        {
            return true;
        }

        self.ray_attacked(position, square, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
            || self.ray_attacked(position, square, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
    }

    /// Whether the first piece along any of `directions` is an attacker's
    /// `slider` or queen.
    fn ray_attacked(
        &self,
        position: &Position,
        square: u8,
        attacker: Color,
        directions: &[(i8, i8)],
        slider: PieceKind,
    ) -> bool {
        for &(file_step, rank_step) in directions {
            let mut current = square;
            while let Some(next) = offset_square(current, file_step, rank_step) {
                if let Some(piece) = position.piece_at(next) {
                    if piece.color == attacker
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    pub fn is_king_in_check(&self, position: &Position, color: Color) -> bool {
        self.is_square_attacked(position, position.king_square(color), color.opposite())
    }

    /// `history` holds earlier positions of the same game, oldest first.
    pub fn game_state(&self, position: &Position, history: &[Position]) -> GameState {
        let us = position.side_to_move();

        if self.generate_moves(position).is_empty() {
            return if self.is_king_in_check(position, us) {
                GameState::Checkmate(us.opposite())
            } else {
                GameState::Stalemate
            };
        }

        if self.is_insufficient_material(position) {
            return GameState::InsufficientMaterial;
        }

        if position.halfmove_clock() >= 100 {
            return GameState::FiftyMoveRule;
        }

        let repetitions = history
            .iter()
            .filter(|earlier| earlier.same_position(position))
            .count();
        if repetitions >= 2 {
            return GameState::ThreefoldRepetition;
        }

        GameState::Ongoing
    }

    fn is_insufficient_material(&self, position: &Position) -> bool {
        let mut others: [Vec<(u8, PieceKind)>; 2] = [Vec::new(), Vec::new()];
        for (square, piece) in position.pieces() {
            if piece.kind != PieceKind::King {
                others[piece.color.index()].push((square, piece.kind));
            }
        }
        let [white, black] = &others;

        let is_minor = |kind: PieceKind| kind == PieceKind::Knight || kind == PieceKind::Bishop;

        match (white.as_slice(), black.as_slice()) {
            // King vs king
            ([], []) => true,
            // King and minor piece vs king
            ([(_, kind)], []) | ([], [(_, kind)]) => is_minor(*kind),
            // Bishops on the same square color
            ([(white_sq, PieceKind::Bishop)], [(black_sq, PieceKind::Bishop)]) => {
                square_shade(*white_sq) == square_shade(*black_sq)
            }
            _ => false,
        }
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&self, position: &mut Position, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(position);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let undo = position.make_move(mv);
            nodes += self.perft(position, depth - 1);
            position.unmake_move(mv, undo);
        }
        nodes
    }
}

fn push_pawn_move(from: u8, to: u8, moves: &mut Vec<Move>) {
    let last_rank = rank_of(to) == 0 || rank_of(to) == 7;
    if last_rank {
        for flag in PROMOTION_FLAGS {
            moves.push(Move::with_flag(from, to, flag));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

fn square_shade(square: u8) -> u8 {
    (square / 8 + square % 8) % 2
}

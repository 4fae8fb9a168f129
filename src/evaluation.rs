use crate::chess_move::{file_of, rank_of};
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 320;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

const QUEEN_ENDGAME_WEIGHT: i32 = 45;
const ROOK_ENDGAME_WEIGHT: i32 = 20;
const BISHOP_ENDGAME_WEIGHT: i32 = 10;
const KNIGHT_ENDGAME_WEIGHT: i32 = 10;
const ENDGAME_START_WEIGHT: i32 = 2 * ROOK_ENDGAME_WEIGHT
    + 2 * BISHOP_ENDGAME_WEIGHT
    + 2 * KNIGHT_ENDGAME_WEIGHT
    + QUEEN_ENDGAME_WEIGHT;

const PASSED_PAWN_BONUSES: [i32; 7] = [0, 120, 80, 50, 30, 15, 15];
const ISOLATED_PAWN_PENALTY_BY_COUNT: [i32; 9] = [0, -10, -25, -50, -75, -75, -75, -75, -75];
const KING_PAWN_SHIELD_SCORES: [i32; 6] = [4, 7, 4, 3, 6, 3];

// Piece-square tables are laid out as seen from white's side of a diagram:
// index 0 is a8, index 63 is h1. See `read_square`.

#[rustfmt::skip]
const PAWNS: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  20,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -20, -20,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWNS_END: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    80,  80,  80,  80,  80,  80,  80,  80,
    50,  50,  50,  50,  50,  50,  50,  50,
    30,  30,  30,  30,  30,  30,  30,  30,
    20,  20,  20,  20,  20,  20,  20,  20,
    10,  10,  10,  10,  10,  10,  10,  10,
    10,  10,  10,  10,  10,  10,  10,  10,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHTS: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOPS: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOKS: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEENS: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_START: [i32; 64] = [
    -80, -70, -70, -70, -70, -70, -70, -80,
    -60, -60, -60, -60, -60, -60, -60, -60,
    -40, -50, -50, -60, -60, -50, -50, -40,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,  -5,  -5,  -5,  -5,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

#[rustfmt::skip]
const KING_END: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,  -5,  20,  30,  30,  20,  -5, -10,
    -15, -10,  35,  45,  45,  35, -10, -15,
    -20, -15,  30,  40,  40,  30, -15, -20,
    -25, -20,  20,  25,  25,  20, -20, -25,
    -30, -25,   0,   0,   0,   0, -25, -30,
    -50, -30, -30, -30, -30, -30, -30, -50,
];

/// Piece counts of one side and the values derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialInfo {
    pub num_pawns: i32,
    pub num_knights: i32,
    pub num_bishops: i32,
    pub num_rooks: i32,
    pub num_queens: i32,
    pub material_score: i32,
    /// 0.0 with full non-pawn material on the board, 1.0 once it is gone.
    pub endgame_t: f64,
}

impl MaterialInfo {
    pub fn new(position: &Position, color: Color) -> Self {
        let mut counts = [0i32; 6];
        for (_, piece) in position.pieces() {
            if piece.color == color {
                counts[piece.kind as usize] += 1;
            }
        }

        let num_pawns = counts[PieceKind::Pawn as usize];
        let num_knights = counts[PieceKind::Knight as usize];
        let num_bishops = counts[PieceKind::Bishop as usize];
        let num_rooks = counts[PieceKind::Rook as usize];
        let num_queens = counts[PieceKind::Queen as usize];

        let material_score = num_pawns * PAWN_VALUE
            + num_knights * KNIGHT_VALUE
            + num_bishops * BISHOP_VALUE
            + num_rooks * ROOK_VALUE
            + num_queens * QUEEN_VALUE;

        let endgame_weight_sum = num_queens * QUEEN_ENDGAME_WEIGHT
            + num_rooks * ROOK_ENDGAME_WEIGHT
            + num_bishops * BISHOP_ENDGAME_WEIGHT
            + num_knights * KNIGHT_ENDGAME_WEIGHT;
        let endgame_t =
            1.0 - (endgame_weight_sum as f64 / ENDGAME_START_WEIGHT as f64).min(1.0);

        Self {
            num_pawns,
            num_knights,
            num_bishops,
            num_rooks,
            num_queens,
            material_score,
            endgame_t,
        }
    }
}

/// Per-side evaluation terms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationData {
    pub material_score: i32,
    pub mop_up_score: i32,
    pub piece_square_score: i32,
    pub pawn_score: i32,
    pub pawn_shield_score: i32,
}

impl EvaluationData {
    pub fn sum(&self) -> i32 {
        self.material_score
            + self.mop_up_score
            + self.piece_square_score
            + self.pawn_score
            + self.pawn_shield_score
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Static score in centipawns from the point of view of the side to move.
    pub fn evaluate(&self, position: &Position) -> i32 {
        let (white, black) = self.evaluate_breakdown(position);
        let perspective = match position.side_to_move() {
            Color::White => 1,
            Color::Black => -1,
        };
        (white.sum() - black.sum()) * perspective
    }

    /// The white and black terms behind `evaluate`.
    pub fn evaluate_breakdown(&self, position: &Position) -> (EvaluationData, EvaluationData) {
        let white_material = MaterialInfo::new(position, Color::White);
        let black_material = MaterialInfo::new(position, Color::Black);

        let mut white = EvaluationData {
            material_score: white_material.material_score,
            ..Default::default()
        };
        let mut black = EvaluationData {
            material_score: black_material.material_score,
            ..Default::default()
        };

        // Each side's tables follow the opponent's remaining material.
        white.piece_square_score =
            self.piece_square_score(position, Color::White, black_material.endgame_t);
        black.piece_square_score =
            self.piece_square_score(position, Color::Black, white_material.endgame_t);

        white.mop_up_score = self.mop_up_score(position, Color::White, &white_material, &black_material);
        black.mop_up_score = self.mop_up_score(position, Color::Black, &black_material, &white_material);

        white.pawn_score = self.pawn_score(position, Color::White);
        black.pawn_score = self.pawn_score(position, Color::Black);

        white.pawn_shield_score = self.king_pawn_shield(
            position,
            Color::White,
            &black_material,
            black.piece_square_score,
        );
        black.pawn_shield_score = self.king_pawn_shield(
            position,
            Color::Black,
            &white_material,
            white.piece_square_score,
        );

        (white, black)
    }

    fn piece_square_score(&self, position: &Position, color: Color, endgame_t: f64) -> i32 {
        let mut value = 0;
        for (square, piece) in position.pieces() {
            if piece.color != color {
                continue;
            }
            let index = read_square(square, color);
            value += match piece.kind {
                PieceKind::Pawn => interpolate(PAWNS[index], PAWNS_END[index], endgame_t),
                PieceKind::Knight => KNIGHTS[index],
                PieceKind::Bishop => BISHOPS[index],
                PieceKind::Rook => ROOKS[index],
                PieceKind::Queen => QUEENS[index],
                PieceKind::King => interpolate(KING_START[index], KING_END[index], endgame_t),
            };
        }
        value
    }

    /// Drives the winning king towards the losing one and the losing king
    /// towards the edge.
    fn mop_up_score(
        &self,
        position: &Position,
        color: Color,
        own: &MaterialInfo,
        enemy: &MaterialInfo,
    ) -> i32 {
        if own.material_score <= enemy.material_score + PAWN_VALUE * 2 || enemy.endgame_t <= 0.0 {
            return 0;
        }

        let friendly_king = position.king_square(color);
        let opponent_king = position.king_square(color.opposite());

        let friendly_file = file_of(friendly_king) as i32;
        let friendly_rank = rank_of(friendly_king) as i32;
        let opponent_file = file_of(opponent_king) as i32;
        let opponent_rank = rank_of(opponent_king) as i32;

        let orthogonal_distance =
            (friendly_file - opponent_file).abs() + (friendly_rank - opponent_rank).abs();
        let mut score = (14 - orthogonal_distance) * 4;

        let center_distance = (opponent_file as f64 - 3.5)
            .abs()
            .max((opponent_rank as f64 - 3.5).abs());
        score += (center_distance * 10.0) as i32;

        (score as f64 * enemy.endgame_t) as i32
    }

    fn pawn_score(&self, position: &Position, color: Color) -> i32 {
        let mut pawns = Vec::with_capacity(8);
        let mut opponent_pawns = Vec::with_capacity(8);
        for (square, piece) in position.pieces() {
            if piece.kind == PieceKind::Pawn {
                if piece.color == color {
                    pawns.push(square);
                } else {
                    opponent_pawns.push(square);
                }
            }
        }

        let mut bonus = 0;
        let mut num_isolated_pawns = 0;

        for &square in &pawns {
            let file = file_of(square) as i32;
            let rank = rank_of(square) as i32;

            let is_passed = opponent_pawns.iter().all(|&other| {
                let other_file = file_of(other) as i32;
                let other_rank = rank_of(other) as i32;
                let ahead = match color {
                    Color::White => other_rank > rank,
                    Color::Black => other_rank < rank,
                };
                (file - other_file).abs() > 1 || !ahead
            });
            if is_passed {
                let squares_from_promotion = match color {
                    Color::White => 7 - rank,
                    Color::Black => rank,
                };
                bonus += PASSED_PAWN_BONUSES
                    .get(squares_from_promotion as usize)
                    .copied()
                    .unwrap_or(0);
            }

            let is_isolated = pawns
                .iter()
                .all(|&friend| (file - file_of(friend) as i32).abs() != 1);
            if is_isolated {
                num_isolated_pawns += 1;
            }
        }

        bonus + ISOLATED_PAWN_PENALTY_BY_COUNT[num_isolated_pawns.min(8)]
    }

    fn king_pawn_shield(
        &self,
        position: &Position,
        color: Color,
        enemy: &MaterialInfo,
        enemy_piece_square_score: i32,
    ) -> i32 {
        if enemy.endgame_t >= 1.0 {
            return 0;
        }

        let king_square = position.king_square(color);
        let king_file = file_of(king_square) as i32;
        let friendly_pawn = Some(Piece::new(PieceKind::Pawn, color));

        let mut penalty = 0;
        let mut uncastled_king_penalty = 0;

        if king_file <= 2 || king_file >= 5 {
            let (near, far) = pawn_shield_squares(king_square, color);
            if let Some(near) = near {
                for (i, &square) in near.iter().enumerate() {
                    if position.piece_at(square) == friendly_pawn {
                        continue;
                    }
                    let pawn_one_further =
                        far.map_or(false, |far| position.piece_at(far[i]) == friendly_pawn);
                    penalty += if pawn_one_further {
                        KING_PAWN_SHIELD_SCORES[i + 3]
                    } else {
                        KING_PAWN_SHIELD_SCORES[i]
                    };
                }
            }
            penalty *= penalty;
        } else {
            uncastled_king_penalty = uncastled_king_penalty_for(enemy_piece_square_score);
        }

        let mut open_file_penalty = 0;
        if enemy.num_rooks > 1 || (enemy.num_rooks > 0 && enemy.num_queens > 0) {
            let clamped_king_file = king_file.clamp(1, 6);
            for attack_file in clamped_king_file..=clamped_king_file + 1 {
                let is_king_file = attack_file == king_file;
                let (friendly_pawn_on_file, enemy_pawn_on_file) =
                    pawns_on_file(position, attack_file as u8, color);
                if !enemy_pawn_on_file {
                    open_file_penalty += if is_king_file { 25 } else { 15 };
                    if !friendly_pawn_on_file {
                        open_file_penalty += if is_king_file { 15 } else { 10 };
                    }
                }
            }
        }

        let mut pawn_shield_weight = 1.0 - enemy.endgame_t;
        if enemy.num_queens == 0 {
            pawn_shield_weight *= 0.6;
        }

        ((-penalty - uncastled_king_penalty - open_file_penalty) as f64 * pawn_shield_weight) as i32
    }
}

/// Table index for `square` seen from `color`'s side of the board.
fn read_square(square: u8, color: Color) -> usize {
    match color {
        Color::White => ((7 - rank_of(square)) * 8 + file_of(square)) as usize,
        Color::Black => square as usize,
    }
}

/// Blends opening and endgame table values; each half truncates toward zero.
fn interpolate(early: i32, late: i32, endgame_t: f64) -> i32 {
    (early as f64 * (1.0 - endgame_t)) as i32 + (late as f64 * endgame_t) as i32
}

/// Penalty for a king left in the center, growing with enemy development.
fn uncastled_king_penalty_for(enemy_piece_square_score: i32) -> i32 {
    let enemy_development = ((enemy_piece_square_score + 10) as f64 / 130.0).clamp(0.0, 1.0);
    (50.0 * enemy_development) as i32
}

/// Squares one and two ranks in front of the king, three files wide.
fn pawn_shield_squares(king_square: u8, color: Color) -> (Option<[u8; 3]>, Option<[u8; 3]>) {
    let clamped_file = (file_of(king_square) as i32).clamp(1, 6);
    let rank = rank_of(king_square) as i32;
    let direction = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    let row = |distance: i32| {
        let shield_rank = rank + direction * distance;
        if !(0..8).contains(&shield_rank) {
            return None;
        }
        let base = shield_rank * 8 + clamped_file;
        Some([(base - 1) as u8, base as u8, (base + 1) as u8])
    };

    (row(1), row(2))
}

/// Whether `file` holds a pawn of `color` and whether it holds an enemy pawn.
fn pawns_on_file(position: &Position, file: u8, color: Color) -> (bool, bool) {
    let mut friendly = false;
    let mut enemy = false;
    for rank in 0..8u8 {
        if let Some(piece) = position.piece_at(rank * 8 + file) {
            if piece.kind == PieceKind::Pawn {
                if piece.color == color {
                    friendly = true;
                } else {
                    enemy = true;
                }
            }
        }
    }
    (friendly, enemy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::START_FEN;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    #[test]
    fn test_start_position_is_balanced() {
        let evaluator = Evaluator::new();
        let start = position(START_FEN);
        assert_eq!(evaluator.evaluate(&start), 0);

        let (white, black) = evaluator.evaluate_breakdown(&start);
        assert_eq!(white, black);
        assert_eq!(white.material_score, 8 * 100 + 2 * 300 + 2 * 320 + 2 * 500 + 900);
    }

    #[test]
    fn test_score_follows_side_to_move() {
        let evaluator = Evaluator::new();
        let white_to_move = position("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let black_to_move = position("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        let mirrored = position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR b KQkq - 0 1");

        let score = evaluator.evaluate(&white_to_move);
        assert!(score > 0);
        assert_eq!(evaluator.evaluate(&black_to_move), -score);
        assert_eq!(evaluator.evaluate(&mirrored), score);
    }

    #[test]
    fn test_material_info() {
        let start = MaterialInfo::new(&position(START_FEN), Color::White);
        assert_eq!(start.num_pawns, 8);
        assert_eq!(start.num_rooks, 2);
        assert_eq!(start.endgame_t, 0.0);

        let bare = MaterialInfo::new(&position("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1"), Color::Black);
        assert_eq!(bare.material_score, 0);
        assert_eq!(bare.endgame_t, 1.0);

        let queen_only = MaterialInfo::new(&position("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1"), Color::White);
        assert_eq!(queen_only.material_score, QUEEN_VALUE);
        assert!((queen_only.endgame_t - (1.0 - 45.0 / 125.0)).abs() < 1e-9);

        // Extra material never pushes the factor below zero
        let heavy = MaterialInfo::new(&position("4k3/8/8/8/8/8/8/QQQQK3 w - - 0 1"), Color::White);
        assert_eq!(heavy.endgame_t, 0.0);
    }

    #[test]
    fn test_read_square_mirrors_for_white() {
        // a2 for white and a7 for black read the same table entry
        assert_eq!(read_square(8, Color::White), 48);
        assert_eq!(read_square(48, Color::Black), 48);
        assert_eq!(read_square(4, Color::White), 60);
        assert_eq!(read_square(60, Color::Black), 60);
    }

    #[test]
    fn test_interpolation_truncates_each_half() {
        assert_eq!(interpolate(-5, 10, 0.5), 3);
        assert_eq!(interpolate(20, -50, 0.0), 20);
        assert_eq!(interpolate(20, -50, 1.0), -50);
        assert_eq!(interpolate(7, 7, 0.3), 6);
    }

    #[test]
    fn test_passed_pawns() {
        let evaluator = Evaluator::new();
        // Lone pawn on e2: passed (15) and isolated (-10)
        let lone = position("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&lone, Color::White), 5);

        let advanced = position("4k3/8/4P3/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&advanced, Color::White), 80 - 10);

        let black = position("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&black, Color::Black), 15 - 10);

        // An enemy pawn ahead on an adjacent file stops it being passed
        let blocked = position("4k3/8/3p4/8/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&blocked, Color::White), -10);

        // Level with it does not
        let level = position("4k3/8/8/8/3pP3/8/8/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&level, Color::White), 30 - 10);
    }

    #[test]
    fn test_isolated_pawn_count() {
        let evaluator = Evaluator::new();
        // Three isolated pawns, all blocked by the black pawns in front
        let isolated = position("4k3/p1p1p3/8/8/8/8/P1P1P3/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&isolated, Color::White), -50);

        // Connected pawns on adjacent files are not isolated
        let connected = position("4k3/ppp5/8/8/8/8/PPP5/4K3 w - - 0 1");
        assert_eq!(evaluator.pawn_score(&connected, Color::White), 0);
    }

    #[test]
    fn test_pawn_shield() {
        let evaluator = Evaluator::new();
        let shield = |fen: &str| {
            let position = position(fen);
            let enemy = MaterialInfo::new(&position, Color::Black);
            evaluator.king_pawn_shield(&position, Color::White, &enemy, 0)
        };

        // Full shield, no open files
        assert_eq!(shield("3qr1k1/5ppp/8/8/8/8/5PPP/3QR1K1 w - - 0 1"), 0);
        // g2 missing: 7 squared, weighted by 1 - 0.48
        assert_eq!(shield("3qr1k1/5ppp/8/8/8/8/5P1P/3QR1K1 w - - 0 1"), -25);
        // g-pawn pushed to g3: 6 squared
        assert_eq!(shield("3qr1k1/5ppp/8/8/8/6P1/5P1P/3QR1K1 w - - 0 1"), -18);
        // g-file fully open as well: 49 + 25 + 15
        assert_eq!(shield("3qr1k1/5p1p/8/8/8/8/5P1P/3QR1K1 w - - 0 1"), -46);
    }

    #[test]
    fn test_pawn_shield_skipped_in_endgame() {
        let evaluator = Evaluator::new();
        let bare = position("6k1/8/8/8/8/8/8/6K1 w - - 0 1");
        let enemy = MaterialInfo::new(&bare, Color::Black);
        assert_eq!(evaluator.king_pawn_shield(&bare, Color::White, &enemy, 500), 0);
    }

    #[test]
    fn test_uncastled_king_penalty() {
        assert_eq!(uncastled_king_penalty_for(-95), 0);
        assert_eq!(uncastled_king_penalty_for(55), 25);
        assert_eq!(uncastled_king_penalty_for(120), 50);
        assert_eq!(uncastled_king_penalty_for(400), 50);
    }

    #[test]
    fn test_mop_up() {
        let evaluator = Evaluator::new();
        let winning = position("8/8/8/4k3/8/8/8/QK6 w - - 0 1");
        let white = MaterialInfo::new(&winning, Color::White);
        let black = MaterialInfo::new(&winning, Color::Black);
        // (14 - 7) * 4 + trunc(0.5 * 10)
        assert_eq!(evaluator.mop_up_score(&winning, Color::White, &white, &black), 33);
        assert_eq!(evaluator.mop_up_score(&winning, Color::Black, &black, &white), 0);

        // Two pawns up is not enough
        let close = position("8/8/8/4k3/8/8/PP6/1K6 w - - 0 1");
        let white = MaterialInfo::new(&close, Color::White);
        let black = MaterialInfo::new(&close, Color::Black);
        assert_eq!(evaluator.mop_up_score(&close, Color::White, &white, &black), 0);
    }
}

//! Pluggable board evaluation.
//!
//! Scores are centipawns from White's perspective: positive favours White.
//! The search multiplies by the mover's turn multiplier at the leaves.

use crate::game_state::draw_rules::is_endgame;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_directions::{sliding_directions, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::tables::piece_square_tables::square_bonus;

/// Score of a mated side. Constant so that cached scores do not depend on
/// the ply at which a position was reached.
pub const CHECKMATE_SCORE: i32 = 100_000;
pub const DRAW_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Centipawns from White's perspective. Terminal flags on `game_state`
    /// must be fresh (set by `legal_moves` for this position).
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material value in centipawns; the king is not counted.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight | PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
fn signed_value(code: PieceCode) -> i32 {
    match (piece_kind(code), piece_color(code)) {
        (Some(kind), Some(color)) => i32::from(color.sign()) * piece_value(kind),
        _ => 0,
    }
}

/// Forced score for checkmate and declared draws.
pub fn terminal_score(game_state: &GameState) -> Option<i32> {
    if game_state.checkmate {
        // The side to move is the one that was mated.
        Some(-game_state.side_to_move.turn_multiplier() * CHECKMATE_SCORE)
    } else if game_state.draw {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }
        game_state
            .board
            .iter()
            .flatten()
            .map(|code| signed_value(*code))
            .sum()
    }
}

/// Material, piece-square tables, square control and attacked enemy
/// material, each positional term scaled down by its weight divisor. A
/// weight of zero switches its term off.
#[derive(Debug, Clone, Copy)]
pub struct PositionalScorer {
    pub position_weight: i32,
    pub control_weight: i32,
    pub attack_weight: i32,
}

impl Default for PositionalScorer {
    fn default() -> Self {
        Self {
            position_weight: 8,
            control_weight: 6,
            attack_weight: 10,
        }
    }
}

type ControlMap = [[bool; 8]; 8];

impl PositionalScorer {
    fn control_maps(board: &Board) -> [ControlMap; 2] {
        let mut maps = [[[false; 8]; 8]; 2];
        for row in 0..8i8 {
            for col in 0..8i8 {
                let code = board[row as usize][col as usize];
                let (Some(kind), Some(color)) = (piece_kind(code), piece_color(code)) else {
                    continue;
                };
                mark_controlled(board, Square::new(row, col), kind, color, &mut maps[color.index()]);
            }
        }
        maps
    }
}

fn mark_controlled(board: &Board, from: Square, kind: PieceKind, color: Color, map: &mut ControlMap) {
    let mut mark = |square: Square| map[square.row as usize][square.col as usize] = true;
    match kind {
        PieceKind::Pawn => {
            for d_col in [-1, 1] {
                if let Some(square) = from.offset(color.pawn_direction(), d_col) {
                    mark(square);
                }
            }
        }
        PieceKind::Knight | PieceKind::King => {
            let offsets = if kind == PieceKind::Knight {
                &KNIGHT_OFFSETS
            } else {
                &KING_OFFSETS
            };
            for offset in offsets {
                if let Some(square) = from.offset(offset.0, offset.1) {
                    mark(square);
                }
            }
        }
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            for direction in sliding_directions(kind) {
                let mut square = from;
                while let Some(next) = square.offset(direction.0, direction.1) {
                    square = next;
                    mark(square);
                    if board[square.row as usize][square.col as usize] != EMPTY {
                        break;
                    }
                }
            }
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if let Some(score) = terminal_score(game_state) {
            return score;
        }

        let board = &game_state.board;
        let endgame = is_endgame(board);
        let mut material = 0i32;
        let mut position = 0i32;

        for row in 0..8i8 {
            for col in 0..8i8 {
                let code = board[row as usize][col as usize];
                let Some(color) = piece_color(code) else {
                    continue;
                };
                let sign = i32::from(color.sign());
                material += signed_value(code);
                position += sign * square_bonus(code, Square::new(row, col), endgame);
            }
        }

        let maps = Self::control_maps(board);
        let mut controlled = [0i32; 2];
        let mut attacked = [0i32; 2];
        for color in [Color::Light, Color::Dark] {
            let map = &maps[color.index()];
            for row in 0..8 {
                for col in 0..8 {
                    if !map[row][col] {
                        continue;
                    }
                    controlled[color.index()] += 1;
                    let target = board[row][col];
                    if is_color(target, color.opposite()) {
                        attacked[color.index()] += signed_value(target).abs();
                    }
                }
            }
        }

        material
            + scaled(position * 100, self.position_weight)
            + scaled((controlled[0] - controlled[1]) * 100, self.control_weight)
            + scaled(attacked[0] - attacked[1], self.attack_weight)
    }
}

#[inline]
fn scaled(term: i32, weight: i32) -> i32 {
    term.checked_div(weight).unwrap_or(0)
}

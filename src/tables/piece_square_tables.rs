//! Positional bonus tables indexed `[row][col]` (row 0 = eighth rank).
//!
//! Values are small integers; the positional scorer divides them by its
//! position weight before adding them to material.

use crate::game_state::chess_types::*;

pub type PieceSquareTable = [[i32; 8]; 8];

#[rustfmt::skip]
pub const KNIGHT_TABLE: PieceSquareTable = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Rewards the castled corners while material is on the board.
#[rustfmt::skip]
pub const OPENING_KING_TABLE: PieceSquareTable = [
    [2, 3, 3, 1, 1, 1, 3, 2],
    [2, 1, 1, 1, 1, 1, 1, 2],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [2, 1, 1, 1, 1, 1, 1, 2],
    [2, 3, 3, 1, 1, 1, 3, 2],
];

/// Centralises the king once the endgame classifier fires.
#[rustfmt::skip]
pub const ENDGAME_KING_TABLE: PieceSquareTable = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 2, 2, 1, 1, 1],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [1, 1, 2, 2, 2, 2, 1, 1],
    [1, 1, 1, 2, 2, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

#[rustfmt::skip]
pub const QUEEN_TABLE: PieceSquareTable = [
    [2, 1, 1, 1, 1, 1, 1, 2],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [2, 1, 1, 1, 1, 1, 1, 2],
];

/// Long diagonals score high, which favours fianchettoes.
#[rustfmt::skip]
pub const BISHOP_TABLE: PieceSquareTable = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

#[rustfmt::skip]
pub const ROOK_TABLE: PieceSquareTable = [
    [2, 1, 1, 3, 3, 2, 1, 2],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [2, 1, 1, 3, 3, 2, 1, 2],
];

#[rustfmt::skip]
pub const LIGHT_PAWN_TABLE: PieceSquareTable = [
    [9, 9, 9, 9, 9, 9, 9, 9],
    [4, 5, 6, 7, 7, 6, 5, 4],
    [3, 4, 5, 6, 6, 5, 4, 3],
    [2, 3, 4, 5, 5, 4, 3, 2],
    [2, 2, 3, 4, 4, 3, 2, 2],
    [2, 2, 2, 3, 3, 2, 2, 2],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

#[rustfmt::skip]
pub const DARK_PAWN_TABLE: PieceSquareTable = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [2, 2, 2, 3, 3, 2, 2, 2],
    [2, 2, 3, 4, 4, 3, 2, 2],
    [2, 3, 4, 5, 5, 4, 3, 2],
    [3, 4, 5, 6, 6, 5, 4, 3],
    [4, 5, 6, 7, 7, 6, 5, 4],
    [9, 9, 9, 9, 9, 9, 9, 9],
];

/// Table for a piece code; only pawns have color-specific tables.
pub fn table_for(code: PieceCode, endgame: bool) -> Option<&'static PieceSquareTable> {
    let table = match piece_kind(code)? {
        PieceKind::Pawn => match piece_color(code)? {
            Color::Light => &LIGHT_PAWN_TABLE,
            Color::Dark => &DARK_PAWN_TABLE,
        },
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King if endgame => &ENDGAME_KING_TABLE,
        PieceKind::King => &OPENING_KING_TABLE,
    };
    Some(table)
}

/// Raw table value for `code` on `square`; zero for an empty square.
#[inline]
pub fn square_bonus(code: PieceCode, square: Square, endgame: bool) -> i32 {
    table_for(code, endgame).map_or(0, |table| table[square.row as usize][square.col as usize])
}

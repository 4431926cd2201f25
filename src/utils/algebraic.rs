//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and grid squares.
//! Row 0 is the eighth rank.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a grid square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Square::new((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Convert an on-board square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'8' - square.row as u8);
    format!("{file_char}{rank_char}")
}

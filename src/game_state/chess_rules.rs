//! Canonical chess-rule constants.
//!
//! Starting layout, draw-rule thresholds and the endgame classifier cut-off.

use crate::game_state::chess_types::Board;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Standard starting grid, row 0 = eighth rank.
#[rustfmt::skip]
pub const STARTING_BOARD: Board = [
    [-2, -3, -4, -5, -6, -4, -3, -2],
    [-1, -1, -1, -1, -1, -1, -1, -1],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 1,  1,  1,  1,  1,  1,  1,  1],
    [ 2,  3,  4,  5,  6,  4,  3,  2],
];

/// Plies without a capture or pawn move that end the game in a draw.
pub const FIFTY_MOVE_RULE_PLIES: usize = 100;

/// Occurrences of one board state that end the game in a draw.
pub const REPETITION_LIMIT: usize = 3;

/// At or below this many non-pawn, non-king pieces the game is an endgame.
pub const ENDGAME_PIECE_THRESHOLD: usize = 4;

/// Column of both kings at game start; castling requires it.
pub const KING_START_COL: i8 = 4;

//! Coordinate move notation (`e2e4`, `e7e8q`) used by the console and the
//! opening book tooling.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

/// Resolve coordinate notation against the legal moves of `game_state`.
/// Also refreshes the state's check and terminal caches.
pub fn long_algebraic_to_move(game_state: &mut GameState, long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            char_to_promotion(ch)
                .ok_or_else(|| ChessError::InvalidAlgebraic(long_algebraic.to_owned()))?,
        ),
    };

    legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match PieceKind::from_letter(ch)? {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => Some(kind),
        _ => None,
    }
}

//! Move ordering: forcing moves first so alpha-beta cuts early.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::move_gives_check;
use crate::moves::chess_move::Move;

/// Captures and checks, then the remaining non-pawn moves, then quiet pawn
/// moves (optionally shuffled). Generator order is kept within the first
/// two groups.
pub fn order_moves<R: Rng + ?Sized>(
    game_state: &mut GameState,
    moves: Vec<Move>,
    shuffle_quiet: bool,
    rng: &mut R,
) -> Vec<Move> {
    let mut forcing = Vec::with_capacity(moves.len());
    let mut pieces = Vec::new();
    let mut quiet = Vec::new();

    for mv in moves {
        if mv.is_capture() || move_gives_check(game_state, mv) {
            forcing.push(mv);
        } else if !mv.is_pawn_move() {
            pieces.push(mv);
        } else {
            quiet.push(mv);
        }
    }

    if shuffle_quiet {
        quiet.shuffle(rng);
    }

    forcing.extend(pieces);
    forcing.extend(quiet);
    forcing
}

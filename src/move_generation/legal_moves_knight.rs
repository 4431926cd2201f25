use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::pin_direction;
use crate::moves::chess_move::Move;
use crate::moves::piece_directions::KNIGHT_OFFSETS;

/// A pinned knight can never stay on its pin line, so it has no moves.
pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    if pin_direction(&info.pins, from).is_some() {
        return;
    }

    let side = game_state.side_to_move;
    for offset in KNIGHT_OFFSETS {
        let Some(target) = from.offset(offset.0, offset.1) else {
            continue;
        };
        if !is_color(game_state.piece_at(target), side) {
            out.push(Move::new(from, target, &game_state.board));
        }
    }
}

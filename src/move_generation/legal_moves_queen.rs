use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::piece_directions::ALL_RAYS;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    generate_sliding_moves(game_state, from, &ALL_RAYS, info, out);
}

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;
use crate::moves::piece_directions::ORTHOGONAL;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    generate_sliding_moves(game_state, from, &ORTHOGONAL, info, out);
}

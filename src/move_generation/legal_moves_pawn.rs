//! Pawn move generation: pushes, double pushes, captures, en passant and
//! all four promotion choices.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, CheckInfo};
use crate::move_generation::legal_move_shared::{allowed_by_pin, is_enemy, pin_direction};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    let forward = side.pawn_direction();
    let pin = pin_direction(&info.pins, from);

    if let Some(one_step) = from.offset(forward, 0) {
        if game_state.piece_at(one_step) == EMPTY && allowed_by_pin(pin, (forward, 0)) {
            push_with_promotions(Move::new(from, one_step, &game_state.board), side, out);

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if game_state.piece_at(two_step) == EMPTY {
                        out.push(Move::new(from, two_step, &game_state.board));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };
        if !allowed_by_pin(pin, (forward, d_col)) {
            continue;
        }

        if is_enemy(game_state, target) {
            push_with_promotions(Move::new(from, target, &game_state.board), side, out);
        } else if game_state.en_passant_square == Some(target)
            && game_state.piece_at(target) == EMPTY
        {
            let mv = Move::en_passant(from, target, &game_state.board);
            if !en_passant_exposes_king(game_state, &mv) {
                out.push(mv);
            }
        }
    }
}

fn push_with_promotions(mv: Move, side: Color, out: &mut Vec<Move>) {
    if mv.to.row == side.promotion_row() {
        for kind in PieceKind::PROMOTIONS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

/// En passant clears two squares on one rank, which the pin scan cannot see,
/// so it is checked on a scratch board.
fn en_passant_exposes_king(game_state: &GameState, mv: &Move) -> bool {
    let side = game_state.side_to_move;
    let mut board = game_state.board;
    let victim = mv.en_passant_victim();
    board[mv.from.row as usize][mv.from.col as usize] = EMPTY;
    board[victim.row as usize][victim.col as usize] = EMPTY;
    board[mv.to.row as usize][mv.to.col as usize] = mv.piece_moved;
    is_square_attacked(&board, game_state.king_square(side), side.opposite())
}

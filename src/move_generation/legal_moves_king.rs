use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, pins_and_checks, CheckInfo};
use crate::moves::chess_move::Move;
use crate::moves::piece_directions::KING_OFFSETS;

/// King steps are validated by re-running check detection with the king
/// relocated to the destination.
pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    for offset in KING_OFFSETS {
        let Some(target) = from.offset(offset.0, offset.1) else {
            continue;
        };
        if is_color(game_state.piece_at(target), side) {
            continue;
        }
        if !pins_and_checks(&game_state.board, target, side).in_check {
            out.push(Move::new(from, target, &game_state.board));
        }
    }

    if !info.in_check {
        generate_castling_moves(game_state, from, out);
    }
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let row = side.home_row();
    if king_from != Square::new(row, KING_START_COL) {
        return;
    }

    let board = &game_state.board;
    let rook = piece_code(side, PieceKind::Rook);
    let empty = |col: i8| board[row as usize][col as usize] == EMPTY;
    let safe = |col: i8| !is_square_attacked(board, Square::new(row, col), enemy);

    if game_state.castle_rights.kingside(side)
        && empty(5)
        && empty(6)
        && board[row as usize][7] == rook
        && safe(5)
        && safe(6)
    {
        out.push(Move::castle(king_from, Square::new(row, 6), board));
    }

    if game_state.castle_rights.queenside(side)
        && empty(1)
        && empty(2)
        && empty(3)
        && board[row as usize][0] == rook
        && safe(3)
        && safe(2)
    {
        out.push(Move::castle(king_from, Square::new(row, 2), board));
    }
}

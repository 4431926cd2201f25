//! In-place make/undo.
//!
//! `make_move` trusts its input; `play_move` is the checked entry point for
//! moves that come from outside the generator. Each make pushes one entry to
//! the move log and to every history; each undo pops exactly one of each.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Apply a move produced by the legal generator for this position.
pub fn make_move(game_state: &mut GameState, mv: Move) {
    let side = game_state.side_to_move;

    game_state.set_piece(mv.from, EMPTY);
    game_state.set_piece(mv.to, mv.placed_piece());

    if mv.is_en_passant {
        game_state.set_piece(mv.en_passant_victim(), EMPTY);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, EMPTY);
        game_state.set_piece(rook_to, rook);
    }

    if mv.is_king_move() {
        game_state.king_squares[side.index()] = mv.to;
    }

    game_state.en_passant_square =
        if mv.is_pawn_move() && (mv.to.row - mv.from.row).abs() == 2 {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };
    game_state.castle_rights = updated_castle_rights(game_state.castle_rights, &mv);
    game_state.side_to_move = side.opposite();

    game_state.move_log.push(mv);
    game_state.castle_rights_log.push(game_state.castle_rights);
    game_state.en_passant_log.push(game_state.en_passant_square);
    let snapshot = game_state.board_state();
    game_state.board_state_log.push(snapshot);

    debug_assert!(game_state.histories_in_lock_step());
}

/// Revert the last move. Returns `None` (and changes nothing) when the log
/// is empty.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let mv = game_state.move_log.pop()?;
    game_state.castle_rights_log.pop();
    game_state.en_passant_log.pop();
    game_state.board_state_log.pop();

    let side = game_state.side_to_move.opposite();
    game_state.side_to_move = side;

    game_state.set_piece(mv.from, mv.piece_moved);
    if mv.is_en_passant {
        game_state.set_piece(mv.to, EMPTY);
        game_state.set_piece(mv.en_passant_victim(), mv.piece_captured);
    } else {
        game_state.set_piece(mv.to, mv.piece_captured);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, EMPTY);
        game_state.set_piece(rook_from, rook);
    }

    if mv.is_king_move() {
        game_state.king_squares[side.index()] = mv.from;
    }

    if let Some(&rights) = game_state.castle_rights_log.last() {
        game_state.castle_rights = rights;
    }
    if let Some(&en_passant) = game_state.en_passant_log.last() {
        game_state.en_passant_square = en_passant;
    }
    game_state.clear_status();

    debug_assert!(game_state.histories_in_lock_step());
    Some(mv)
}

/// Checked mutator: applies `mv` only if it is legal here. The stored move is
/// the generator's copy, so piece snapshots always match the board.
pub fn play_move(game_state: &mut GameState, mv: Move) -> ChessResult<()> {
    let Some(legal) = legal_moves(game_state).into_iter().find(|m| *m == mv) else {
        return Err(ChessError::IllegalMove(move_to_long_algebraic(&mv)));
    };
    make_move(game_state, legal);
    Ok(())
}

/// Whether `mv` leaves the opponent in check.
pub fn move_gives_check(game_state: &mut GameState, mv: Move) -> bool {
    make_move(game_state, mv);
    let gives_check = is_king_in_check(game_state, game_state.side_to_move);
    undo_move(game_state);
    gives_check
}

fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from.row;
    if mv.to.col > mv.from.col {
        (Square::new(row, 7), Square::new(row, 5))
    } else {
        (Square::new(row, 0), Square::new(row, 3))
    }
}

fn updated_castle_rights(mut rights: CastleRights, mv: &Move) -> CastleRights {
    match (mv.moved_kind(), mv.mover()) {
        (Some(PieceKind::King), Some(color)) => rights.revoke_all(color),
        (Some(PieceKind::Rook), _) => revoke_for_corner(&mut rights, mv.from),
        _ => {}
    }
    if piece_kind(mv.piece_captured) == Some(PieceKind::Rook) {
        revoke_for_corner(&mut rights, mv.to);
    }
    rights
}

/// A rook leaving or captured on an original corner ends castling on that side.
fn revoke_for_corner(rights: &mut CastleRights, square: Square) {
    for color in [Color::Light, Color::Dark] {
        if square.row != color.home_row() {
            continue;
        }
        match square.col {
            0 => rights.revoke_queenside(color),
            7 => rights.revoke_kingside(color),
            _ => {}
        }
    }
}

//! Terminal-state classification: checkmate, stalemate and automatic draws.

use crate::game_state::chess_rules::{ENDGAME_PIECE_THRESHOLD, FIFTY_MOVE_RULE_PLIES, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{DrawReason, GameState};

/// Refresh the terminal flags after legal moves have been generated.
pub fn update_game_status(game_state: &mut GameState, no_legal_moves: bool) {
    game_state.clear_status();

    if no_legal_moves {
        if game_state.in_check {
            game_state.checkmate = true;
        } else {
            game_state.stalemate = true;
            mark_draw(game_state, DrawReason::Stalemate);
        }
        return;
    }

    if has_insufficient_material(&game_state.board) {
        mark_draw(game_state, DrawReason::InsufficientMaterial);
    } else if fifty_move_rule_reached(game_state) {
        mark_draw(game_state, DrawReason::FiftyMoveRule);
    } else if is_threefold_repetition(game_state) {
        mark_draw(game_state, DrawReason::ThreefoldRepetition);
    }
}

fn mark_draw(game_state: &mut GameState, reason: DrawReason) {
    game_state.draw = true;
    game_state.draw_reason = Some(reason);
}

/// No pawns, rooks or queens, and at most one minor piece on the board.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut minors = 0;
    for code in board.iter().flatten() {
        match piece_kind(*code) {
            Some(PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen) => return false,
            Some(PieceKind::Knight | PieceKind::Bishop) => minors += 1,
            Some(PieceKind::King) | None => {}
        }
    }
    minors <= 1
}

/// Plies since the last capture or pawn move, including the clock the
/// game was set up with when no such move has been played yet.
pub fn halfmove_clock(game_state: &GameState) -> usize {
    let mut plies = 0;
    for mv in game_state.move_log.iter().rev() {
        if mv.is_pawn_move() || mv.is_capture() {
            return plies;
        }
        plies += 1;
    }
    plies + usize::from(game_state.initial_halfmove_clock)
}

#[inline]
pub fn fifty_move_rule_reached(game_state: &GameState) -> bool {
    halfmove_clock(game_state) >= FIFTY_MOVE_RULE_PLIES
}

/// Occurrences of the current board state among positions with the same
/// side to move, the current one included.
pub fn repetition_count(game_state: &GameState) -> usize {
    let Some(current) = game_state.board_state_log.last() else {
        return 0;
    };
    game_state
        .board_state_log
        .iter()
        .rev()
        .step_by(2)
        .filter(|state| *state == current)
        .count()
}

#[inline]
pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    repetition_count(game_state) >= REPETITION_LIMIT
}

/// Few enough non-pawn, non-king pieces remain that the search deepens.
pub fn is_endgame(board: &Board) -> bool {
    let pieces = board
        .iter()
        .flatten()
        .filter(|code| {
            !matches!(piece_kind(**code), None | Some(PieceKind::Pawn | PieceKind::King))
        })
        .count();
    pieces <= ENDGAME_PIECE_THRESHOLD
}

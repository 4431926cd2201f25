//! Legal move generation.
//!
//! Each square holding a piece of the side to move is dispatched through a
//! table of per-kind generators. The generators already honour pins, so the
//! only filtering left is check resolution: with one checker a move must
//! capture or block it (or move the king), with two only the king may move.

use crate::game_state::draw_rules::update_game_status;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{blocking_squares, pins_and_checks, CheckInfo};
use crate::move_generation::legal_move_shared::PieceGenerator;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Indexed by `PieceKind::index()`.
const PIECE_GENERATORS: [PieceGenerator; 6] = [
    generate_pawn_moves,
    generate_rook_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_queen_moves,
    generate_king_moves,
];

/// Pin-aware moves for the side to move, before check filtering.
pub fn pseudo_legal_moves(game_state: &GameState, info: &CheckInfo) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut out = Vec::with_capacity(64);
    for row in 0..8i8 {
        for col in 0..8i8 {
            let code = game_state.board[row as usize][col as usize];
            if !is_color(code, side) {
                continue;
            }
            if let Some(kind) = piece_kind(code) {
                PIECE_GENERATORS[kind.index()](game_state, Square::new(row, col), info, &mut out);
            }
        }
    }
    out
}

/// All legal moves for the side to move.
///
/// Also refreshes the check/pin caches and the terminal flags on
/// `game_state`: checkmate, stalemate and the automatic draws.
pub fn legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let king = game_state.king_square(side);
    let info = pins_and_checks(&game_state.board, king, side);

    let moves = match info.checks.as_slice() {
        [] => pseudo_legal_moves(game_state, &info),
        [check] => {
            let blocks = blocking_squares(&game_state.board, king, *check);
            pseudo_legal_moves(game_state, &info)
                .into_iter()
                .filter(|mv| mv.is_king_move() || mv.is_en_passant || blocks.contains(&mv.to))
                .collect()
        }
        _ => {
            let mut out = Vec::with_capacity(8);
            generate_king_moves(game_state, king, &info, &mut out);
            out
        }
    };

    game_state.in_check = info.in_check;
    game_state.pins = info.pins;
    game_state.checks = info.checks;
    update_game_status(game_state, moves.is_empty());

    moves
}

//! Core mailbox game state.
//!
//! `GameState` owns the board grid, the move log and the per-ply histories
//! (castle rights, en-passant target, board states) that make/undo push and
//! pop in lock-step. The check/pin caches and terminal flags are refreshed by
//! `legal_moves` and are only meaningful right after that call.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_BOARD;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{Check, Pin};
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Why a game ended without a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
    InsufficientMaterial,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // [Light, Dark]
    pub king_squares: [Square; 2],

    pub castle_rights: CastleRights,
    pub en_passant_square: Option<Square>,

    // --- Make/undo stacks (histories hold an initial entry plus one per ply) ---
    pub move_log: Vec<Move>,
    pub castle_rights_log: Vec<CastleRights>,
    pub en_passant_log: Vec<Option<Square>>,
    pub board_state_log: Vec<BoardState>,

    // --- Caches written by `legal_moves` ---
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
    pub checkmate: bool,
    pub stalemate: bool,
    pub draw: bool,
    pub draw_reason: Option<DrawReason>,

    /// Halfmove clock of the position the log starts from (non-zero only for FEN setups).
    pub initial_halfmove_clock: u16,
    pub initial_fullmove_number: u16,
}

impl GameState {
    /// Standard starting position, light to move, full castle rights.
    pub fn new_game() -> Self {
        Self::from_parts(
            STARTING_BOARD,
            Color::Light,
            CastleRights::ALL,
            None,
            0,
            1,
        )
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Builds a state around an arbitrary grid. King squares are located by
    /// scanning; a missing king is reported by the FEN parser, not here.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant_square: Option<Square>,
        initial_halfmove_clock: u16,
        initial_fullmove_number: u16,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            castle_rights,
            en_passant_square,
            move_log: Vec::new(),
            castle_rights_log: vec![castle_rights],
            en_passant_log: vec![en_passant_square],
            board_state_log: Vec::new(),
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
            draw: false,
            draw_reason: None,
            initial_halfmove_clock,
            initial_fullmove_number,
        };

        for row in 0..8i8 {
            for col in 0..8i8 {
                let code = board[row as usize][col as usize];
                if piece_kind(code) == Some(PieceKind::King) {
                    if let Some(color) = piece_color(code) {
                        state.king_squares[color.index()] = Square::new(row, col);
                    }
                }
            }
        }

        let initial = state.board_state();
        state.board_state_log.push(initial);
        state
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::Light
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, code: PieceCode) {
        self.board[square.row as usize][square.col as usize] = code;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Snapshot of the (board, castle rights, en passant, side to move) tuple.
    pub fn board_state(&self) -> BoardState {
        BoardState {
            board: self.board,
            castle_rights_id: self.castle_rights.id(),
            en_passant_square: self.en_passant_square,
            light_to_move: self.white_to_move(),
        }
    }

    /// Number of plies played since the log started.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    pub fn fullmove_number(&self) -> u16 {
        let plies = self.move_log.len() as u16 + u16::from(!self.started_with_light());
        self.initial_fullmove_number + plies / 2
    }

    fn started_with_light(&self) -> bool {
        let light_now = self.white_to_move();
        if self.move_log.len() % 2 == 0 {
            light_now
        } else {
            !light_now
        }
    }

    /// True when the make/undo histories are in lock-step with the move log.
    pub fn histories_in_lock_step(&self) -> bool {
        let expected = self.move_log.len() + 1;
        self.castle_rights_log.len() == expected
            && self.en_passant_log.len() == expected
            && self.board_state_log.len() == expected
    }

    pub(crate) fn clear_status(&mut self) {
        self.checkmate = false;
        self.stalemate = false;
        self.draw = false;
        self.draw_reason = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

//! Engine abstraction used by the console driver.
//!
//! Different move-selection strategies sit behind one trait so the driver can
//! swap them at runtime.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::negamax::SearchStats;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub stats: Option<SearchStats>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Choose a move for the side to move. `best_move` is `None` only when
    /// the game is over.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}

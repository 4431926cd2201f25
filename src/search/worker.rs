//! Search on a worker thread with a one-shot result channel.
//!
//! The worker owns a clone of the caller's `GameState`, so the caller's board
//! is never touched while the search runs. There is no cancellation: the
//! search runs to its configured depth.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::search::negamax::{find_best_move, SearchConfig, SearchStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` only when the position had no legal moves.
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

pub struct SearchHandle {
    receiver: Receiver<SearchOutcome>,
    thread: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Non-blocking poll: `Ok(None)` while the search is still running.
    pub fn try_result(&mut self) -> ChessResult<Option<SearchOutcome>> {
        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.join();
                Ok(Some(outcome))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.join();
                Err(ChessError::WorkerDisconnected)
            }
        }
    }

    /// Block until the worker reports.
    pub fn wait(mut self) -> ChessResult<SearchOutcome> {
        let outcome = self
            .receiver
            .recv()
            .map_err(|_| ChessError::WorkerDisconnected);
        self.join();
        outcome
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Start a search on a copy of `game_state`.
pub fn spawn_search(game_state: &GameState, config: SearchConfig) -> SearchHandle {
    let mut position = game_state.clone();
    let (sender, receiver) = mpsc::channel();

    let thread = thread::spawn(move || {
        debug!(ply = position.ply(), "search worker started");
        let legal = legal_moves(&mut position);
        let outcome = if legal.is_empty() {
            SearchOutcome {
                best_move: None,
                stats: SearchStats::default(),
            }
        } else {
            let (best_move, stats) = find_best_move(&mut position, &legal, &config);
            SearchOutcome { best_move, stats }
        };
        debug!(nodes = outcome.stats.nodes, "search worker finished");
        // The caller may have dropped its handle.
        let _ = sender.send(outcome);
    });

    SearchHandle {
        receiver,
        thread: Some(thread),
    }
}

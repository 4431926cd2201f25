//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by parsing helpers, the
//! checked move mutator, the opening book loader, the search worker and the
//! console driver.
//! Terminal game outcomes (checkmate, stalemate, draws) are not errors; they
//! are reported as flags on `GameState`.

use thiserror::Error;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A FEN string was malformed or described an unusable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in algebraic/coordinate notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The move is not in the legal-move list of the current position.
    ///
    /// Payload: the move in algebraic notation.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A console command had a malformed argument.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// An opening book table could not be parsed or replayed.
    #[error("opening book error: {0}")]
    OpeningBook(String),

    /// The search worker hung up before sending its result.
    #[error("search worker terminated before reporting a result")]
    WorkerDisconnected,
}

pub type ChessResult<T> = Result<T, ChessError>;

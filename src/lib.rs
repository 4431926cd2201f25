//! Crate root module declarations for the mailbox chess engine.
//!
//! Exposes the rules engine (game state, move generation, make/undo), the
//! negamax search with its tables, the engines built on it and the text
//! helpers, so the console binary, benches and tests share stable paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod draw_rules;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod piece_directions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod negamax;
    pub mod transposition_table;
    pub mod worker;
}

pub mod tables {
    pub mod opening_book;
    pub mod piece_square_tables;
}

pub mod engines {
    pub mod engine_negamax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

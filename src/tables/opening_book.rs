//! Opening book keyed by the notation history of the game.
//!
//! Lines are read from a tab-separated table with a `moves` column (space
//! separated algebraic notation as produced by `Move::notation`) and an
//! optional `weight` column. Every line is replayed from the starting position
//! when loaded, so each stored continuation is known to be legal.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, warn};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_BOARD;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMove {
    pub notation: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_history: HashMap<String, Vec<BookMove>>,
}

impl OpeningBook {
    /// The embedded table; an empty book if it somehow fails to load.
    pub fn load_default() -> Self {
        match Self::from_tsv_str(include_str!("data/opening_book.tsv")) {
            Ok(book) => book,
            Err(error) => {
                warn!(%error, "embedded opening book rejected");
                Self::default()
            }
        }
    }

    pub fn from_tsv_str(tsv: &str) -> ChessResult<Self> {
        let mut lines = tsv.lines().filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .ok_or_else(|| ChessError::OpeningBook("opening table is empty".to_owned()))?;

        let mut moves_idx = None;
        let mut weight_idx = None;
        for (i, name) in header.split('\t').enumerate() {
            match name.trim().to_ascii_lowercase().as_str() {
                "moves" => moves_idx = Some(i),
                "weight" | "count" => weight_idx = Some(i),
                _ => {}
            }
        }
        let moves_idx = moves_idx.ok_or_else(|| {
            ChessError::OpeningBook("opening table needs a 'moves' column".to_owned())
        })?;

        let mut weights: HashMap<String, HashMap<String, u32>> = HashMap::new();
        let mut line_count = 0usize;

        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            let sequence = fields
                .get(moves_idx)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ChessError::OpeningBook(format!("missing moves in row '{line}'")))?;
            let row_weight = weight_idx
                .and_then(|idx| fields.get(idx))
                .and_then(|w| w.trim().parse::<u32>().ok())
                .unwrap_or(1)
                .max(1);

            let mut state = GameState::new_game();
            for token in sequence.split_whitespace() {
                let history = history_key(&state);
                let mv = find_by_notation(&mut state, token).ok_or_else(|| {
                    ChessError::OpeningBook(format!("'{token}' is not legal in row '{line}'"))
                })?;

                let entry = weights.entry(history).or_default().entry(token.to_owned()).or_insert(0);
                *entry = entry.saturating_add(row_weight);
                make_move(&mut state, mv);
            }
            line_count += 1;
        }

        let by_history = weights
            .into_iter()
            .map(|(history, moves)| {
                let mut row: Vec<BookMove> = moves
                    .into_iter()
                    .map(|(notation, weight)| BookMove { notation, weight })
                    .collect();
                row.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.notation.cmp(&b.notation)));
                (history, row)
            })
            .collect();

        debug!(lines = line_count, "opening book loaded");
        Ok(Self { by_history })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_history.is_empty()
    }

    /// Known continuations after the moves played so far. Games that did not
    /// begin from the standard position are never in book.
    pub fn moves_for(&self, game_state: &GameState) -> Option<&[BookMove]> {
        let from_standard_start = game_state
            .board_state_log
            .first()
            .is_some_and(|start| start.board == STARTING_BOARD && start.light_to_move);
        if !from_standard_start {
            return None;
        }
        self.by_history
            .get(&history_key(game_state))
            .map(|v| v.as_slice())
    }

    /// Weighted pick among the continuations, bound to the first legal move
    /// with the same notation.
    pub fn choose_weighted_move<R: Rng + ?Sized>(
        &self,
        game_state: &mut GameState,
        rng: &mut R,
    ) -> Option<Move> {
        let moves = self.moves_for(game_state)?;
        if moves.is_empty() {
            return None;
        }

        let total_weight: u64 = moves.iter().map(|m| u64::from(m.weight)).sum();
        let mut pick = rng.random_range(0..total_weight.max(1));
        let mut chosen = &moves[0];
        for candidate in moves {
            let w = u64::from(candidate.weight);
            if pick < w {
                chosen = candidate;
                break;
            }
            pick -= w;
        }

        find_by_notation(game_state, &chosen.notation)
    }
}

/// Space-joined notation of every move in the log.
pub fn history_key(game_state: &GameState) -> String {
    game_state
        .move_log
        .iter()
        .map(Move::notation)
        .collect::<Vec<_>>()
        .join(" ")
}

fn find_by_notation(game_state: &mut GameState, notation: &str) -> Option<Move> {
    legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.notation() == notation)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn embedded_book_loads_and_covers_the_start_position() {
        let book = OpeningBook::load_default();
        assert!(!book.is_empty());
        let start = GameState::new_game();
        let first_moves: Vec<&str> = book
            .moves_for(&start)
            .expect("start position should be indexed")
            .iter()
            .map(|m| m.notation.as_str())
            .collect();
        assert_eq!(first_moves, vec!["e4", "d4", "c4"]);
    }

    #[test]
    fn shared_prefixes_accumulate_weight() {
        let tsv = "name\tmoves\tweight\nA\te4 e5 Nf3\t5\nB\te4 c5\t3\nC\td4 d5\t1\n";
        let book = OpeningBook::from_tsv_str(tsv).expect("book should parse");
        let start = GameState::new_game();
        let row = book.moves_for(&start).expect("start should be indexed");
        assert_eq!(
            row,
            &[
                BookMove { notation: "e4".to_owned(), weight: 8 },
                BookMove { notation: "d4".to_owned(), weight: 1 },
            ]
        );
    }

    #[test]
    fn weighted_choice_binds_to_a_legal_move() {
        let book = OpeningBook::from_tsv_str("moves\tweight\ne4 e5\t4\nd4 d5\t1\n").expect("book should parse");
        let mut game = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = book
                .choose_weighted_move(&mut game, &mut rng)
                .expect("book should choose");
            assert!(mv.notation() == "e4" || mv.notation() == "d4");
            assert!(mv.is_pawn_move());
        }
    }

    #[test]
    fn book_follows_the_played_history() {
        let book = OpeningBook::load_default();
        let mut game = GameState::new_game();
        for notation in ["e4", "c5", "Nf3"] {
            let mv = find_by_notation(&mut game, notation).expect("move should be legal");
            make_move(&mut game, mv);
        }
        let replies: Vec<&str> = book
            .moves_for(&game)
            .expect("Sicilian should be indexed")
            .iter()
            .map(|m| m.notation.as_str())
            .collect();
        assert_eq!(replies, vec!["d6", "Nc6"]);

        let unknown = {
            let mut off_book = GameState::new_game();
            let mv = find_by_notation(&mut off_book, "h4").expect("h4 is legal");
            make_move(&mut off_book, mv);
            book.moves_for(&off_book).is_none()
        };
        assert!(unknown);
    }

    #[test]
    fn games_set_up_from_fen_are_out_of_book() {
        let book = OpeningBook::load_default();
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(book.moves_for(&game).is_none());
        assert!(book.choose_weighted_move(&mut game, &mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn illegal_lines_are_rejected() {
        let result = OpeningBook::from_tsv_str("moves\ne4 e4\n");
        assert!(matches!(result, Err(ChessError::OpeningBook(_))));
        assert!(OpeningBook::from_tsv_str("name\nonly\n").is_err());
        assert!(OpeningBook::from_tsv_str("").is_err());
    }
}

//! Fixed-depth negamax with alpha-beta pruning, move ordering, a
//! transposition table and opening-book lookup.
//!
//! All mutable search state lives in a `SearchContext` owned by one top-level
//! call, so concurrent searches on separate `GameState` copies share nothing.
//! The position is searched in place with make/undo.

use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::game_state::draw_rules::is_endgame;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, PositionalScorer, CHECKMATE_SCORE};
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};
use crate::tables::opening_book::OpeningBook;

/// Wider than any reachable score.
const INFINITY: i32 = CHECKMATE_SCORE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub middlegame_depth: u8,
    pub endgame_depth: u8,
    /// Book moves are only considered while fewer plies than this are played.
    pub book_max_plies: usize,
    pub use_opening_book: bool,
    pub use_transposition_table: bool,
    pub use_alpha_beta: bool,
    pub order_moves: bool,
    pub shuffle_quiet_moves: bool,
    /// Fixed seed for the shuffle and book choice; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            middlegame_depth: 3,
            endgame_depth: 5,
            book_max_plies: 10,
            use_opening_book: true,
            use_transposition_table: true,
            use_alpha_beta: true,
            order_moves: true,
            shuffle_quiet_moves: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Defaults overlaid with `MAILBOX_MIDDLEGAME_DEPTH`,
    /// `MAILBOX_ENDGAME_DEPTH` and `MAILBOX_SEED`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(depth) = env_setting::<u8>("MAILBOX_MIDDLEGAME_DEPTH") {
            config.middlegame_depth = depth.max(1);
        }
        if let Some(depth) = env_setting::<u8>("MAILBOX_ENDGAME_DEPTH") {
            config.endgame_depth = depth.max(1);
        }
        if let Some(seed) = env_setting::<u64>("MAILBOX_SEED") {
            config.seed = Some(seed);
        }
        config
    }

    #[inline]
    pub fn depth_for(&self, game_state: &GameState) -> u8 {
        if is_endgame(&game_state.board) {
            self.endgame_depth
        } else {
            self.middlegame_depth
        }
    }
}

fn env_setting<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions searched (transposition hits excluded).
    pub nodes: u64,
    pub transposition_hits: u64,
    pub depth: u8,
    /// Root score from the mover's point of view.
    pub score: i32,
    pub from_book: bool,
}

pub struct SearchContext<S: BoardScorer> {
    config: SearchConfig,
    scorer: S,
    book: Option<Arc<OpeningBook>>,
    table: TranspositionTable,
    rng: StdRng,
    stats: SearchStats,
    root_depth: u8,
    /// Plies in the log when the current search started.
    root_ply: usize,
    best_move: Option<Move>,
}

impl<S: BoardScorer> SearchContext<S> {
    pub fn new(config: SearchConfig, scorer: S, book: Option<Arc<OpeningBook>>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            config,
            scorer,
            book,
            table: TranspositionTable::new(),
            rng,
            stats: SearchStats::default(),
            root_depth: 0,
            root_ply: 0,
            best_move: None,
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    fn reset(&mut self, game_state: &GameState, depth: u8) {
        self.table.clear();
        self.stats = SearchStats {
            depth,
            ..SearchStats::default()
        };
        self.root_depth = depth;
        self.root_ply = game_state.ply();
        self.best_move = None;
    }

    /// Pick a move among `legal`, the freshly generated moves of `game_state`.
    /// The state is restored before returning and its status caches refreshed.
    pub fn find_best_move(&mut self, game_state: &mut GameState, legal: &[Move]) -> Option<Move> {
        debug_assert!(!legal.is_empty(), "search called on a finished game");
        self.reset(game_state, 0);
        match legal {
            [] => return None,
            [only] => {
                debug!(mv = %only.notation(), "single legal move");
                return Some(*only);
            }
            _ => {}
        }

        if let Some(mv) = self.book_move(game_state, legal) {
            info!(mv = %mv.notation(), ply = game_state.ply(), "book move");
            self.stats.from_book = true;
            legal_moves(game_state);
            return Some(mv);
        }

        let depth = self.config.depth_for(game_state);
        self.reset(game_state, depth);
        self.stats.nodes += 1;
        let score = self.search_moves(game_state, legal.to_vec(), depth, -INFINITY, INFINITY);
        self.stats.score = score;
        legal_moves(game_state);

        let chosen = self.best_move.or_else(|| legal.first().copied());
        info!(
            mv = %chosen.map(|m| m.notation()).unwrap_or_default(),
            score,
            depth,
            nodes = self.stats.nodes,
            transposition_hits = self.stats.transposition_hits,
            "search finished"
        );
        chosen
    }

    /// Negamax score of `game_state` for the side to move, searched `depth`
    /// plies with a fresh table.
    pub fn evaluate_position(&mut self, game_state: &mut GameState, depth: u8) -> i32 {
        self.reset(game_state, depth);
        let score = self.negamax(game_state, depth, -INFINITY, INFINITY);
        self.stats.score = score;
        legal_moves(game_state);
        score
    }

    fn book_move(&mut self, game_state: &mut GameState, legal: &[Move]) -> Option<Move> {
        if !self.config.use_opening_book || game_state.ply() >= self.config.book_max_plies {
            return None;
        }
        let book = self.book.as_ref()?;
        book.choose_weighted_move(game_state, &mut self.rng)
            .filter(|mv| legal.contains(mv))
    }

    fn negamax(&mut self, game_state: &mut GameState, depth: u8, alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        let moves = legal_moves(game_state);
        if depth == 0 || moves.is_empty() || game_state.draw {
            return game_state.side_to_move.turn_multiplier() * self.scorer.score(game_state);
        }
        self.search_moves(game_state, moves, depth, alpha, beta)
    }

    fn search_moves(
        &mut self,
        game_state: &mut GameState,
        moves: Vec<Move>,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        debug_assert_eq!(game_state.ply(), self.expected_ply(depth), "unbalanced make/undo");
        let moves = if self.config.order_moves {
            order_moves(game_state, moves, self.config.shuffle_quiet_moves, &mut self.rng)
        } else {
            moves
        };

        let mut best = -INFINITY;
        for mv in moves {
            make_move(game_state, mv);
            let score = -self.child_score(game_state, depth - 1, -beta, -alpha);
            undo_move(game_state);
            debug_assert_eq!(game_state.ply(), self.expected_ply(depth), "unbalanced make/undo");

            if score > best {
                best = score;
                if depth == self.root_depth {
                    debug!(mv = %mv.notation(), score, "new best root move");
                    self.best_move = Some(mv);
                }
            }
            if self.config.use_alpha_beta {
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }

    /// Log length a node `depth` plies above the horizon must see.
    #[inline]
    fn expected_ply(&self, depth: u8) -> usize {
        self.root_ply + usize::from(self.root_depth.saturating_sub(depth))
    }

    fn child_score(&mut self, game_state: &mut GameState, depth: u8, alpha: i32, beta: i32) -> i32 {
        if !self.config.use_transposition_table {
            return self.negamax(game_state, depth, alpha, beta);
        }

        let key = game_state.board_state();
        if let Some(score) = self.table.probe(&key, depth, alpha, beta) {
            self.stats.transposition_hits += 1;
            return score;
        }

        let score = self.negamax(game_state, depth, alpha, beta);
        self.table.store(
            key,
            TTEntry {
                depth,
                score,
                bound: Bound::classify(score, alpha, beta),
            },
        );
        score
    }
}

/// The embedded opening book, parsed once per process.
pub fn default_book() -> Arc<OpeningBook> {
    static BOOK: OnceLock<Arc<OpeningBook>> = OnceLock::new();
    Arc::clone(BOOK.get_or_init(|| Arc::new(OpeningBook::load_default())))
}

/// One-shot search with the positional scorer and the embedded book.
pub fn find_best_move(
    game_state: &mut GameState,
    legal: &[Move],
    config: &SearchConfig,
) -> (Option<Move>, SearchStats) {
    let book = config.use_opening_book.then(default_book);
    let mut context = SearchContext::new(*config, PositionalScorer::default(), book);
    let best = context.find_best_move(game_state, legal);
    (best, context.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::search::board_scoring::MaterialScorer;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn fixed(alpha_beta: bool, table: bool) -> SearchConfig {
        SearchConfig {
            use_opening_book: false,
            use_transposition_table: table,
            use_alpha_beta: alpha_beta,
            shuffle_quiet_moves: false,
            seed: Some(3),
            ..SearchConfig::default()
        }
    }

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = long_algebraic_to_move(game, text).expect("move should be legal");
            make_move(game, mv);
        }
    }

    #[test]
    fn pruning_does_not_change_the_score() {
        let cases = [
            ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
            ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
        ];
        for (fen, depth) in cases {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let mut pruned = SearchContext::new(fixed(true, false), PositionalScorer::default(), None);
            let mut full = SearchContext::new(fixed(false, false), PositionalScorer::default(), None);
            let pruned_score = pruned.evaluate_position(&mut game, depth);
            let full_score = full.evaluate_position(&mut game, depth);
            assert_eq!(pruned_score, full_score, "{fen}");
            assert!(pruned.stats().nodes < full.stats().nodes, "{fen}");
            assert!(game.move_log.is_empty());
        }
    }

    #[test]
    fn transposed_positions_hit_the_table_with_fresh_scores() {
        let scorer = PositionalScorer::default();
        let mut game = GameState::new_game();
        let mut cached = SearchContext::new(fixed(false, true), scorer, None);
        let mut fresh = SearchContext::new(fixed(false, false), scorer, None);

        let cached_score = cached.evaluate_position(&mut game, 3);
        assert!(cached.stats().transposition_hits > 0);
        let fresh_score = fresh.evaluate_position(&mut game, 3);
        assert_eq!(cached_score, fresh_score);
        assert!(cached.stats().nodes < fresh.stats().nodes);

        // Nf3 Nc6 Nc3 and Nc3 Nc6 Nf3 reach the same leaf.
        let mut one_order = GameState::new_game();
        play(&mut one_order, &["g1f3", "b8c6", "b1c3"]);
        let mut other_order = GameState::new_game();
        play(&mut other_order, &["b1c3", "b8c6", "g1f3"]);
        assert_eq!(one_order.board_state(), other_order.board_state());

        let entry = cached
            .table()
            .peek(&other_order.board_state())
            .copied()
            .expect("leaf should be cached");
        legal_moves(&mut one_order);
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.bound, Bound::Exact);
        assert_eq!(entry.score, Color::Dark.turn_multiplier() * scorer.score(&one_order));
    }

    #[test]
    fn searching_from_a_later_ply_tracks_the_new_root() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);
        let mut context = SearchContext::new(fixed(true, true), PositionalScorer::default(), None);
        context.evaluate_position(&mut game, 2);
        assert_eq!(game.ply(), 3);
        assert!(game.histories_in_lock_step());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unbalanced make/undo")]
    fn a_missing_undo_trips_the_ply_check() {
        let mut game = GameState::new_game();
        let mut context = SearchContext::new(fixed(true, false), PositionalScorer::default(), None);
        context.reset(&game, 2);
        // One ply played but never taken back: the logs still agree with
        // each other, only the depth bookkeeping notices.
        play(&mut game, &["e2e4"]);
        assert!(game.histories_in_lock_step());
        let moves = legal_moves(&mut game);
        context.search_moves(&mut game, moves, 2, -INFINITY, INFINITY);
    }

    #[test]
    fn finds_back_rank_mate() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let config = SearchConfig {
            middlegame_depth: 2,
            endgame_depth: 2,
            ..fixed(true, true)
        };
        let legal = legal_moves(&mut game);
        let (best, stats) = find_best_move(&mut game, &legal, &config);
        let best = best.expect("a move should be found");
        assert_eq!(best.notation(), "Ra8");
        assert_eq!(stats.score, CHECKMATE_SCORE);
        assert_eq!(stats.depth, 2);
        assert!(game.move_log.is_empty());
    }

    #[test]
    fn material_scorer_takes_a_free_queen() {
        let mut game = GameState::from_fen("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        let legal = legal_moves(&mut game);
        let mut context = SearchContext::new(
            SearchConfig {
                endgame_depth: 2,
                ..fixed(true, true)
            },
            MaterialScorer,
            None,
        );
        let best = context.find_best_move(&mut game, &legal).expect("a move should be found");
        assert_eq!(best.notation(), "Rxd5");
        assert_eq!(context.stats().score, 500);
    }

    #[test]
    fn single_legal_move_skips_the_search() {
        let mut game = GameState::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1").expect("FEN should parse");
        let legal = legal_moves(&mut game);
        assert_eq!(legal.len(), 1);
        let (best, stats) = find_best_move(&mut game, &legal, &fixed(true, true));
        assert_eq!(best, Some(legal[0]));
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn opening_moves_come_from_the_book() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);
        let config = SearchConfig {
            seed: Some(11),
            ..SearchConfig::default()
        };
        let (best, stats) = find_best_move(&mut game, &legal, &config);
        let best = best.expect("book should answer");
        assert!(stats.from_book);
        assert_eq!(stats.nodes, 0);
        assert!(["e4", "d4", "c4"].contains(&best.notation().as_str()));
    }

    #[test]
    fn book_is_skipped_past_the_ply_limit() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "c7c5"]);
        let legal = legal_moves(&mut game);
        let config = SearchConfig {
            book_max_plies: 2,
            middlegame_depth: 1,
            seed: Some(5),
            ..SearchConfig::default()
        };
        let (best, stats) = find_best_move(&mut game, &legal, &config);
        assert!(best.is_some());
        assert!(!stats.from_book);
        assert_eq!(stats.depth, 1);
    }
}

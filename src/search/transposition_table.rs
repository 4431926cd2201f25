//! Transposition table keyed by the full board state.
//!
//! Entries record the remaining depth they were searched to and how the score
//! relates to the window it was searched with. An entry is only reused at the
//! same remaining depth, so a hit always equals what fresh recursion with the
//! same window would produce.

use std::collections::HashMap;

use crate::game_state::chess_types::BoardState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Search failed high: the true score is at least `score`.
    Lower,
    /// Search failed low: the true score is at most `score`.
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    #[inline]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
}

impl TTEntry {
    /// Score usable inside the `(alpha, beta)` window at `depth`, if any.
    #[inline]
    pub fn usable_score(&self, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth != depth {
            return None;
        }
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<BoardState, TTEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw lookup, ignoring depth and bound.
    #[inline]
    pub fn peek(&self, key: &BoardState) -> Option<&TTEntry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn probe(&self, key: &BoardState, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        self.entries
            .get(key)
            .and_then(|entry| entry.usable_score(depth, alpha, beta))
    }

    /// Deeper results replace shallower ones; at equal depth an exact score
    /// replaces a bound.
    pub fn store(&mut self, key: BoardState, entry: TTEntry) {
        match self.entries.get(&key) {
            Some(existing)
                if existing.depth > entry.depth
                    || (existing.depth == entry.depth
                        && existing.bound == Bound::Exact
                        && entry.bound != Bound::Exact) => {}
            _ => {
                self.entries.insert(key, entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;

    fn key() -> BoardState {
        GameState::new_game().board_state()
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::new();
        tt.store(key(), TTEntry { depth: 3, score: 42, bound: Bound::Exact });
        assert_eq!(tt.probe(&key(), 3, -100, 100), Some(42));
        assert_eq!(tt.probe(&key(), 2, -100, 100), None);
        assert_eq!(tt.len(), 1);
        assert_eq!(tt.peek(&key()).map(|e| e.score), Some(42));

        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.probe(&key(), 3, -100, 100), None);
    }

    #[test]
    fn bounds_are_only_used_when_they_decide_the_window() {
        let mut tt = TranspositionTable::new();
        tt.store(key(), TTEntry { depth: 2, score: 50, bound: Bound::Lower });
        assert_eq!(tt.probe(&key(), 2, 0, 40), Some(50));
        assert_eq!(tt.probe(&key(), 2, 0, 60), None);

        tt.clear();
        tt.store(key(), TTEntry { depth: 2, score: -10, bound: Bound::Upper });
        assert_eq!(tt.probe(&key(), 2, 0, 40), Some(-10));
        assert_eq!(tt.probe(&key(), 2, -20, 40), None);
    }

    #[test]
    fn deeper_and_exact_entries_are_preferred() {
        let mut tt = TranspositionTable::new();
        tt.store(key(), TTEntry { depth: 4, score: 1, bound: Bound::Exact });
        tt.store(key(), TTEntry { depth: 2, score: 9, bound: Bound::Exact });
        assert_eq!(tt.probe(&key(), 4, -100, 100), Some(1));

        tt.store(key(), TTEntry { depth: 4, score: 7, bound: Bound::Upper });
        assert_eq!(tt.probe(&key(), 4, -100, 100), Some(1));

        tt.store(key(), TTEntry { depth: 5, score: 3, bound: Bound::Lower });
        assert_eq!(tt.probe(&key(), 5, -100, 0), Some(3));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn classify_matches_fail_soft_window() {
        assert_eq!(Bound::classify(-5, -5, 5), Bound::Upper);
        assert_eq!(Bound::classify(5, -5, 5), Bound::Lower);
        assert_eq!(Bound::classify(0, -5, 5), Bound::Exact);
    }
}

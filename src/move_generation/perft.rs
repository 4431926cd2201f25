//! Perft: exhaustive leaf counting for move generator validation.

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics `depth` plies below `game_state`. The state is restored
/// by make/undo before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(game_state, depth, &mut counts);
    counts
}

/// Node count below each root move.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut divided = Vec::new();
    if depth == 0 {
        return divided;
    }
    for mv in legal_moves(game_state) {
        make_move(game_state, mv);
        let nodes = perft(game_state, depth - 1).nodes;
        undo_move(game_state);
        debug!(mv = %mv, nodes, "perft divide");
        divided.push((mv, nodes));
    }
    divided
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in legal_moves(game_state) {
        make_move(game_state, mv);
        if depth == 1 {
            let mut leaf = PerftCounts::default();
            count_leaf(game_state, &mv, &mut leaf);
            counts.merge(leaf);
        } else {
            perft_recurse(game_state, depth - 1, counts);
        }
        undo_move(game_state);
    }
}

/// `game_state` is the position after `mv`.
fn count_leaf(game_state: &mut GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }
    if is_king_in_check(game_state, game_state.side_to_move) {
        counts.checks += 1;
        if legal_moves(game_state).is_empty() {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn nodes(fen: &str, depth: u8) -> usize {
        let mut game = GameState::from_fen(fen).expect("FEN should parse");
        perft(&mut game, depth).nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut game = GameState::new_game();
        assert_eq!(
            perft(&mut game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_matches_reference_counts() {
        let mut game = GameState::new_game();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);
        let depth_three = perft(&mut game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);

        assert!(game.move_log.is_empty());
        assert_eq!(game.board, GameState::new_game().board);
        assert!(game.histories_in_lock_step());
    }

    #[test]
    fn kiwipete_matches_reference_counts() {
        let mut game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let depth_one = perft(&mut game, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(&mut game, 2);
        assert_eq!(depth_two.nodes, 2039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn en_passant_pin_position_matches_reference_counts() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(nodes(fen, 1), 14);
        assert_eq!(nodes(fen, 2), 191);
        assert_eq!(nodes(fen, 3), 2812);
    }

    #[test]
    fn promotion_heavy_position_matches_reference_counts() {
        let fen = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
        assert_eq!(nodes(fen, 1), 6);
        assert_eq!(nodes(fen, 2), 264);
        assert_eq!(nodes(fen, 3), 9467);
    }

    #[test]
    fn underpromotion_position_matches_reference_counts() {
        let fen = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        assert_eq!(nodes(fen, 1), 44);
        assert_eq!(nodes(fen, 2), 1486);
    }

    #[test]
    fn divide_sums_to_total() {
        let mut game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let divided = perft_divide(&mut game, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 2039);
    }
}

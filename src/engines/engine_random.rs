//! Random-move engine: picks uniformly among the legal moves. Useful for
//! diagnostics and as a sparring partner.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let mut position = game_state.clone();
        let legal = legal_moves(&mut position);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal.len()));
        out.best_move = legal.choose(&mut self.rng).copied();
        Ok(out)
    }
}

//! Negamax engine: runs the fixed-depth search on a worker thread and blocks
//! for the result.

use tracing::info;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::search::negamax::SearchConfig;
use crate::search::worker::spawn_search;

pub struct NegamaxEngine {
    config: SearchConfig,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::from_env())
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Mailbox Negamax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let outcome = spawn_search(game_state, self.config).wait()?;
        let stats = outcome.stats;

        let mut out = EngineOutput {
            best_move: outcome.best_move,
            stats: Some(stats),
            info_lines: Vec::new(),
        };
        if stats.from_book {
            out.info_lines.push("negamax_engine book_move".to_owned());
        } else {
            out.info_lines.push(format!(
                "negamax_engine depth {} score {} nodes {} tt_hits {}",
                stats.depth, stats.score, stats.nodes, stats.transposition_hits
            ));
        }
        info!(engine = self.name(), mv = ?outcome.best_move.map(|m| m.notation()), "move chosen");
        Ok(out)
    }
}

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::errors::{ChessError, ChessResult};
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::legal_move_apply::{make_move, undo_move};
use mailbox_chess::move_generation::legal_move_generator::legal_moves;
use mailbox_chess::move_generation::perft::perft;
use mailbox_chess::moves::chess_move::Move;
use mailbox_chess::search::negamax::SearchConfig;
use mailbox_chess::search::worker::spawn_search;
use mailbox_chess::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use mailbox_chess::utils::render_game_state::render_game_state;

const HELP: &str = "commands: new | fen <fen> | moves | undo | go | random | perft <depth> | show | quit | <move e.g. e2e4>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = SearchConfig::from_env();
    info!(?config, "mailbox chess console");

    let mut console = Console {
        game: GameState::new_game(),
        config,
        random: RandomEngine::new(),
    };
    println!("{HELP}");
    console.show();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match console.handle(command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => println!("error: {error}"),
        }
        io::stdout().flush().ok();
    }
}

struct Console {
    game: GameState,
    config: SearchConfig,
    random: RandomEngine,
}

impl Console {
    /// Returns `Ok(false)` when the session should end.
    fn handle(&mut self, command: &str) -> ChessResult<bool> {
        let (word, rest) = command
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((command, ""));

        match word {
            "quit" | "exit" => return Ok(false),
            "help" => println!("{HELP}"),
            "new" => {
                self.game = GameState::new_game();
                self.show();
            }
            "fen" => {
                self.game = GameState::from_fen(rest)?;
                self.show();
            }
            "show" => self.show(),
            "moves" => {
                let moves = legal_moves(&mut self.game);
                let listed: Vec<String> = moves.iter().map(describe).collect();
                println!("{} legal: {}", moves.len(), listed.join(" "));
            }
            "undo" => match undo_move(&mut self.game) {
                Some(mv) => {
                    println!("undid {}", mv.notation());
                    self.show();
                }
                None => println!("nothing to undo"),
            },
            "go" => self.search()?,
            "random" => {
                let out = self.random.choose_move(&self.game)?;
                self.play_engine_move(out.best_move);
            }
            "perft" => {
                let depth = parse_depth(rest)?;
                let counts = perft(&mut self.game, depth);
                println!("perft {depth}: {counts:?}");
            }
            _ => {
                let mv = long_algebraic_to_move(&mut self.game, command)?;
                make_move(&mut self.game, mv);
                self.show();
            }
        }
        Ok(true)
    }

    fn search(&mut self) -> ChessResult<()> {
        let mut handle = spawn_search(&self.game, self.config);
        print!("thinking");
        let outcome = loop {
            if let Some(outcome) = handle.try_result()? {
                break outcome;
            }
            print!(".");
            io::stdout().flush().ok();
            thread::sleep(Duration::from_millis(100));
        };
        println!();

        let stats = outcome.stats;
        if stats.from_book {
            println!("book move");
        } else {
            println!(
                "depth {} score {} nodes {} tt hits {}",
                stats.depth, stats.score, stats.nodes, stats.transposition_hits
            );
        }
        self.play_engine_move(outcome.best_move);
        Ok(())
    }

    fn play_engine_move(&mut self, mv: Option<Move>) {
        match mv {
            Some(mv) => {
                println!("engine plays {}", describe(&mv));
                make_move(&mut self.game, mv);
                self.show();
            }
            None => warn!("no move available, the game is over"),
        }
    }

    fn show(&mut self) {
        // Refresh the status flags before reporting them.
        legal_moves(&mut self.game);
        println!("{}", render_game_state(&self.game));
        println!("{}", self.game.to_fen());
        if self.game.checkmate {
            println!("checkmate");
        } else if self.game.draw {
            println!("draw: {:?}", self.game.draw_reason);
        } else if self.game.in_check {
            println!("check");
        }
    }
}

fn describe(mv: &Move) -> String {
    format!("{}({})", mv.notation(), move_to_long_algebraic(mv))
}

/// Depth argument of `perft`; defaults to 1 when omitted.
fn parse_depth(text: &str) -> ChessResult<u8> {
    if text.is_empty() {
        return Ok(1);
    }
    text.parse::<u8>()
        .map_err(|error| ChessError::InvalidCommand(format!("perft depth '{text}': {error}")))
}

//! Number-guessing game on stdin/stdout.
//!
//! Running `guess` with no arguments starts one game immediately. Optional
//! flags only affect reproducibility and retry behavior, never the range.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use guess::exit_codes;
use guess::io::config::{GameConfig, load_config};
use guess::io::console::{StdConsole, TooManyInvalidInputsError};
use guess::logging;
use guess::play::play;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "guess", version, about = "Guess a number between 1 and 100")]
struct Cli {
    /// Seed the target RNG for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many consecutive invalid inputs (default: never).
    #[arg(long)]
    max_invalid_inputs: Option<u32>,

    /// TOML config file. Flags override values from the file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(limit) = self.max_invalid_inputs {
            cfg.max_invalid_inputs = Some(limit);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.downcast_ref::<TooManyInvalidInputsError>().is_some() {
                exit_codes::GAVE_UP
            } else {
                exit_codes::INVALID
            }
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let cfg = cli.resolve_config()?;
    debug!(?cfg, "resolved config");
    let mut console = StdConsole::stdio();
    let outcome = match cfg.seed {
        Some(seed) => play(&mut console, &mut StdRng::seed_from_u64(seed), &cfg)?,
        None => play(&mut console, &mut rand::thread_rng(), &cfg)?,
    };
    debug!(attempts = outcome.attempts, "game finished");
    Ok(())
}

//! Game loop for `guess`.

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::core::judge::Verdict;
use crate::core::messages::{WELCOME, verdict_message};
use crate::core::state::GameState;
use crate::core::target::draw_target;
use crate::io::config::GameConfig;
use crate::io::console::{Console, RetryPolicy, display_message, get_validated_integer};

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub target: i64,
    pub attempts: u32,
}

/// Draw a target from `rng` and play one game on `console`.
pub fn play<C, R>(console: &mut C, rng: &mut R, config: &GameConfig) -> Result<PlayOutcome>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    let target = draw_target(rng);
    debug!(target_number = target, "drew target");
    play_round(console, target, config.retry_policy())
}

/// Play one game against a known target until it is guessed.
///
/// Stops early only on I/O errors, closed input, or when a capped
/// `policy` gives up.
#[instrument(skip_all)]
pub fn play_round<C: Console + ?Sized>(
    console: &mut C,
    target: i64,
    policy: RetryPolicy,
) -> Result<PlayOutcome> {
    let mut state = GameState::new(target);
    display_message(console, WELCOME)?;

    loop {
        let guess = get_validated_integer(console, policy)?;
        let verdict = state.record_guess(guess)?;
        debug!(guess, ?verdict, attempts = state.attempts(), "judged guess");
        display_message(console, &verdict_message(verdict, state.attempts()))?;
        if verdict == Verdict::Correct {
            info!(attempts = state.attempts(), "target guessed");
            return Ok(PlayOutcome {
                target: state.target(),
                attempts: state.attempts(),
            });
        }
    }
}

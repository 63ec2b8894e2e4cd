//! Text-based number-guessing game.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (target range, comparison, game state,
//!   message text). No I/O, randomness injected by the caller.
//! - **[`io`]**: Side-effecting operations (console, config file).
//!
//! [`play`] coordinates both into the guess/compare/respond loop.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod play;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

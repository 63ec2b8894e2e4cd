//! Per-game state machine: `Playing` until the target is guessed, then `Won`.

use std::fmt;

use anyhow::Result;

use crate::core::judge::{Verdict, judge};

/// Game phase. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Won,
}

/// Returned when a guess is recorded after the game has been won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverError {
    pub attempts: u32,
}

impl fmt::Display for GameOverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game already won after {} attempts", self.attempts)
    }
}

impl std::error::Error for GameOverError {}

/// State owned by one game session.
///
/// The target is fixed at construction. The attempt counter only moves in
/// [`GameState::record_guess`], once per accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: i64,
    attempts: u32,
    phase: GamePhase,
}

impl GameState {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            attempts: 0,
            phase: GamePhase::Playing,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Count one guess and compare it to the target.
    ///
    /// Moves to [`GamePhase::Won`] on a correct guess. Fails with
    /// [`GameOverError`] if the game is already won.
    pub fn record_guess(&mut self, guess: i64) -> Result<Verdict> {
        if self.phase == GamePhase::Won {
            return Err(GameOverError {
                attempts: self.attempts,
            }
            .into());
        }
        self.attempts = self.attempts.saturating_add(1);
        let verdict = judge(guess, self.target);
        if verdict == Verdict::Correct {
            self.phase = GamePhase::Won;
        }
        Ok(verdict)
    }
}

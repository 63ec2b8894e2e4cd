//! Deterministic, pure game logic.
//!
//! Core modules must be free of I/O side effects. Randomness is injected by
//! the caller so every function here is reproducible in tests.

pub mod judge;
pub mod messages;
pub mod state;
pub mod target;

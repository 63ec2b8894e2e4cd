//! I/O helpers for the game.

pub mod config;
pub mod console;

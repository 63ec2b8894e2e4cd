//! Stable exit codes for the `guess` binary.

/// The target was guessed.
pub const OK: i32 = 0;
/// Invalid config, I/O failure, or input closed before the game ended.
pub const INVALID: i32 = 1;
/// The opt-in invalid-input cap was reached.
pub const GAVE_UP: i32 = 2;

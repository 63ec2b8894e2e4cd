//! Target number range and selection.

use rand::Rng;

/// Smallest target value (inclusive).
pub const MIN_TARGET: i64 = 1;
/// Largest target value (inclusive).
pub const MAX_TARGET: i64 = 100;

/// Draw a target uniformly from `[MIN_TARGET, MAX_TARGET]`.
pub fn draw_target<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(MIN_TARGET..=MAX_TARGET)
}

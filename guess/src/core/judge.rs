//! Guess comparison.

/// Outcome of comparing one guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Guess is strictly below the target.
    TooLow,
    /// Guess is strictly above the target.
    TooHigh,
    Correct,
}

pub fn judge(guess: i64, target: i64) -> Verdict {
    match guess.cmp(&target) {
        std::cmp::Ordering::Less => Verdict::TooLow,
        std::cmp::Ordering::Greater => Verdict::TooHigh,
        std::cmp::Ordering::Equal => Verdict::Correct,
    }
}

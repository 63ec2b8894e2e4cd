//! User-visible game text.
//!
//! These strings are part of the external interface and must stay
//! byte-for-byte stable.

use crate::core::judge::Verdict;

pub const WELCOME: &str = "欢迎来到猜数字游戏！";
pub const PROMPT: &str = "请输入一个1到100之间的数字：";
pub const INVALID_INTEGER: &str = "请输入一个有效的整数。";
pub const TOO_LOW: &str = "太小了！再试一次。";
pub const TOO_HIGH: &str = "太大了！再试一次。";

/// Congratulation line with the total attempt count substituted.
pub fn win_message(attempts: u32) -> String {
    format!("恭喜你，猜对了！你总共猜了 {attempts} 次。")
}

/// Response line for a verdict. `attempts` is only used for `Correct`.
pub fn verdict_message(verdict: Verdict, attempts: u32) -> String {
    match verdict {
        Verdict::TooLow => TOO_LOW.to_string(),
        Verdict::TooHigh => TOO_HIGH.to_string(),
        Verdict::Correct => win_message(attempts),
    }
}

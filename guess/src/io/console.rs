//! Line-oriented console used for prompting and game output.
//!
//! The [`Console`] trait decouples the game loop from the real terminal.
//! Tests use a scripted console that returns predetermined lines and records
//! everything written.

use std::fmt;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};
use std::num::IntErrorKind;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::messages::{INVALID_INTEGER, PROMPT};

/// Abstraction over the user-facing text stream.
pub trait Console {
    /// Show `prompt` without a trailing newline and read one line.
    ///
    /// Returns `Ok(None)` once the input stream is closed. The returned line
    /// has its line terminator removed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Write `text` followed by a newline.
    fn display_message(&mut self, text: &str) -> Result<()>;
}

/// Console over any buffered reader and writer.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl StdConsole<StdinLock<'static>, StdoutLock<'static>> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .context("write prompt")?;
        self.output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input line")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn display_message(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("write message")?;
        self.output.flush().context("flush message")?;
        Ok(())
    }
}

/// How many unparseable lines `get_validated_integer` tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Re-prompt forever.
    #[default]
    Unbounded,
    /// Give up after this many consecutive invalid lines.
    AtMost(u32),
}

/// The input stream closed before a valid integer was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputClosedError;

impl fmt::Display for InputClosedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input closed before a valid integer was entered")
    }
}

impl std::error::Error for InputClosedError {}

/// The retry cap of [`RetryPolicy::AtMost`] was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooManyInvalidInputsError {
    pub limit: u32,
}

impl fmt::Display for TooManyInvalidInputsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gave up after {} invalid inputs", self.limit)
    }
}

impl std::error::Error for TooManyInvalidInputsError {}

/// Prompt until the user enters a base-10 integer and return it.
///
/// Surrounding whitespace is ignored, full-width digits and signs are read as
/// ASCII, and single `_` separators between digits are allowed. Values are not
/// checked against the target range; magnitudes beyond `i64` saturate. Each rejected line shows [`INVALID_INTEGER`] and re-prompts.
pub fn get_validated_integer<C: Console + ?Sized>(
    console: &mut C,
    policy: RetryPolicy,
) -> Result<i64> {
    let mut invalid = 0u32;
    loop {
        let Some(line) = console.read_line(PROMPT)? else {
            return Err(InputClosedError.into());
        };
        match parse_integer(&line) {
            Some(value) => return Ok(value),
            None => {
                invalid = invalid.saturating_add(1);
                debug!(invalid, "rejected non-integer input");
                console.display_message(INVALID_INTEGER)?;
                if let RetryPolicy::AtMost(limit) = policy {
                    if invalid >= limit {
                        return Err(TooManyInvalidInputsError { limit }.into());
                    }
                }
            }
        }
    }
}

/// Write one line of text to the user.
pub fn display_message<C: Console + ?Sized>(console: &mut C, text: &str) -> Result<()> {
    console.display_message(text)
}

fn parse_integer(line: &str) -> Option<i64> {
    let digits = normalize_digits(line.trim())?;
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Map full-width digits/signs to ASCII and drop `_` separators.
///
/// A `_` must sit between two digits; anything else rejects the line.
fn normalize_digits(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().map(to_ascii_digit).collect();
    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let before_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if !(after_digit && before_digit) {
                return None;
            }
            continue;
        }
        out.push(c);
    }
    Some(out)
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (u32::from(c) - 0xFF10) as u8),
        '\u{FF0B}' => '+',
        '\u{FF0D}' => '-',
        _ => c,
    }
}

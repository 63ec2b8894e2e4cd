//! Test-only console that replays scripted input lines.

use std::collections::VecDeque;

use anyhow::Result;

use crate::io::console::Console;

/// One event written to a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Prompt(String),
    Message(String),
}

/// Console that returns predetermined lines, then reports closed input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    transcript: Vec<Transcript>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Every prompt and message in write order.
    pub fn transcript(&self) -> &[Transcript] {
        &self.transcript
    }

    /// Displayed messages only (prompts excluded).
    pub fn messages(&self) -> Vec<String> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                Transcript::Message(text) => Some(text.clone()),
                Transcript::Prompt(_) => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> usize {
        self.transcript
            .iter()
            .filter(|event| matches!(event, Transcript::Prompt(_)))
            .count()
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(Transcript::Prompt(prompt.to_string()));
        Ok(self.lines.pop_front())
    }

    fn display_message(&mut self, text: &str) -> Result<()> {
        self.transcript.push(Transcript::Message(text.to_string()));
        Ok(())
    }
}

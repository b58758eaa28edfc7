//! Yes/no confirmation prompt.

use super::console::Console;
use super::input::read_parsed;
use crate::error::Result;
use tracing::info;

/// Normalised tokens and the answer each one stands for.
const ANSWERS: [(&str, bool); 4] = [("yes", true), ("y", true), ("no", false), ("n", false)];

pub const INVALID_ANSWER: &str = "Invalid input. Please enter yes or no.";

/// Settings for [`confirm`].
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    /// Text shown before each read.
    pub prompt: String,
    /// Answer given by an empty (or blank) line. `None` rejects empty input.
    pub empty_answer: Option<bool>,
}

impl Default for ConfirmConfig {
    /// Empty input counts as "yes", matching the historical prompt.
    fn default() -> Self {
        Self {
            prompt: "Please enter yes or no: ".to_string(),
            empty_answer: Some(true),
        }
    }
}

impl ConfirmConfig {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Requires an explicit yes or no; blank lines are re-prompted.
    pub fn strict(mut self) -> Self {
        self.empty_answer = None;
        self
    }
}

/// Maps one raw line to an answer, or `None` if it is not recognised.
pub fn parse_answer(line: &str, empty_answer: Option<bool>) -> Option<bool> {
    let token = line.trim().to_lowercase();
    if token.is_empty() {
        return empty_answer;
    }
    ANSWERS
        .iter()
        .find(|(candidate, _)| *candidate == token)
        .map(|(_, answer)| *answer)
}

/// Asks until the user answers yes or no.
pub fn confirm<C: Console + ?Sized>(console: &mut C, config: &ConfirmConfig) -> Result<bool> {
    let answer = read_parsed(console, &config.prompt, |line| {
        parse_answer(line, config.empty_answer).ok_or_else(|| INVALID_ANSWER.to_string())
    })?;
    info!("Confirmation answered: {}", answer);
    Ok(answer)
}

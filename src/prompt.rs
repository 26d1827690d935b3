//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Trait for asking the user a single question.
///
/// Implementations return the default when the user submits an empty
/// answer, so callers never deal with the empty/default fallback.
pub trait Prompter {
    /// Asks a question. `default` may be empty, in which case no default
    /// is displayed and an empty answer is returned as-is.
    fn ask(&self, message: &str, default: &str) -> Result<String>;
}

/// Prompter implementation using the dialoguer crate.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, message: &str, default: &str) -> Result<String> {
        let input = Input::<String>::new().with_prompt(message).allow_empty(true);
        let input = if default.is_empty() {
            input
        } else {
            input.default(default.to_string())
        };

        let answer =
            input.interact_text().map_err(|e| Error::PromptError(e.to_string()))?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}

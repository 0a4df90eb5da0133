//! Operator prompts.
//!
//! [`Prompter`] is the raw device (one question, one answer). The retry and
//! default rules for free-text answers live in [`ask`], above the device.

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use crate::ui;

/// Shown when a required free-text answer is left empty
pub const EMPTY_VALUE_ERROR: &str = "Value can't be empty";

/// A device that can ask the operator questions.
pub trait Prompter {
    /// Ask the operator to pick one of `items`. Returns the chosen index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Ask for a line of free text. Empty answers are returned as-is.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Tell the operator their answer was rejected.
    fn reject(&self, message: &str);
}

/// Interactive terminal prompts backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .context("Prompt interaction failed")
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read user input")
    }

    fn reject(&self, message: &str) {
        ui::error(message);
    }
}

/// Ask for free text.
///
/// An empty answer resolves to `default` when there is one, is accepted
/// verbatim when `allow_empty` is set, and is otherwise rejected and asked
/// again until something non-empty comes back.
pub fn ask(
    prompter: &dyn Prompter,
    text: &str,
    default: Option<&str>,
    allow_empty: bool,
) -> Result<String> {
    let label = match default {
        Some(default) => format!("{text} (defaults to {default})"),
        None => text.to_string(),
    };

    loop {
        let answer = prompter.input(&label)?;
        let answer = answer.trim();

        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        if let Some(default) = default {
            return Ok(default.to_string());
        }
        if allow_empty {
            return Ok(String::new());
        }
        prompter.reject(EMPTY_VALUE_ERROR);
    }
}

/// Ask the operator to pick one of `items`, returning the chosen label.
pub fn choose<'a>(
    prompter: &dyn Prompter,
    text: &str,
    items: &[&'a str],
    default: usize,
) -> Result<&'a str> {
    let prompt = match items.get(default) {
        Some(label) => format!("{text} (defaults to {label})"),
        None => text.to_string(),
    };
    let index = prompter.select(&prompt, items, default)?;
    items
        .get(index)
        .copied()
        .with_context(|| format!("Selection {index} is out of range"))
}


#[cfg(test)]
mod tests {
    use super::testing::MockPrompter;
    use super::*;

    #[test]
    fn test_ask_retries_until_non_empty() {
        let prompter = MockPrompter::new(&[], &["", "  ", "root"]);

        let answer = ask(&prompter, "Database username", None, false).unwrap();

        assert_eq!(answer, "root");
        assert_eq!(prompter.input_prompts().len(), 3);
        assert_eq!(
            *prompter.rejections.borrow(),
            vec![EMPTY_VALUE_ERROR, EMPTY_VALUE_ERROR]
        );
    }

    #[test]
    fn test_ask_uses_default_on_empty() {
        let prompter = MockPrompter::new(&[], &[""]);

        let answer = ask(&prompter, "Database host", Some("localhost"), false).unwrap();

        assert_eq!(answer, "localhost");
        assert_eq!(
            prompter.input_prompts(),
            vec!["Database host (defaults to localhost)"]
        );
        assert!(prompter.rejections.borrow().is_empty());
    }

    #[test]
    fn test_ask_accepts_empty_when_allowed() {
        let prompter = MockPrompter::new(&[], &[""]);

        let answer = ask(&prompter, "Secret", None, true).unwrap();

        assert_eq!(answer, "");
        assert_eq!(prompter.remaining_inputs(), 0);
        assert!(prompter.rejections.borrow().is_empty());
    }

    #[test]
    fn test_ask_trims_answers() {
        let prompter = MockPrompter::new(&[], &["  doma.in \n"]);
        assert_eq!(ask(&prompter, "Hostname", None, false).unwrap(), "doma.in");
    }

    #[test]
    fn test_choose_returns_label() {
        let prompter = MockPrompter::new(&[1], &[]);

        let choice = choose(&prompter, "Select schema", &["http", "https"], 0).unwrap();

        assert_eq!(choice, "https");
        assert_eq!(
            *prompter.asked.borrow(),
            vec!["select: Select schema (defaults to http)"]
        );
    }

    #[test]
    fn test_choose_rejects_out_of_range() {
        let prompter = MockPrompter::new(&[5], &[]);
        assert!(choose(&prompter, "Pick", &["a", "b"], 0).is_err());
    }
}

//! User input and interaction handling.

use dialoguer::{Confirm, FuzzySelect, Input};

use crate::error::Result;

/// Asks the user for values missing from the command line.
pub trait Prompter {
    /// Lets the user pick one of `choices`. Returns the chosen index.
    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize>;

    /// Asks for free text, pre-filled with `default`.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, choices: &[String], default: usize) -> Result<usize> {
        let selection = FuzzySelect::new()
            .with_prompt(prompt)
            .items(choices)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(input)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::new().with_prompt(prompt).default(default).interact()?;
        Ok(answer)
    }
}

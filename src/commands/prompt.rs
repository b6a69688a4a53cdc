//! Terminal prompts behind a small trait so the command flows can be driven
//! by a script in tests.

use crate::core::error::{LazyTfError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use std::io::{self, IsTerminal};

/// Asks the user to pick an item or answer yes/no.
///
/// `None` means the prompt was cancelled (Esc or `q`).
pub trait Prompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>>;
}

/// Arrow-key prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_terminal() -> Result<()> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            Ok(())
        } else {
            Err(LazyTfError::NotATerminal)
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        Self::ensure_terminal()?;
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact_opt()?;
        Ok(choice)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>> {
        Self::ensure_terminal()?;
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()?;
        Ok(answer)
    }
}

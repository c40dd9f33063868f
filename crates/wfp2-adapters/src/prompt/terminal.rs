//! Interactive prompt backed by `dialoguer`.

use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use wfp2_core::{application::ports::Prompt, error::GeneratorResult};

use super::prompt_failed;

/// Asks through dialoguer's themed widgets. Needs a terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask_yes_no(&self, message: &str) -> GeneratorResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| prompt_failed(e.to_string()))
    }

    fn ask_text(&self, message: &str) -> GeneratorResult<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map_err(|e| prompt_failed(e.to_string()))
    }
}

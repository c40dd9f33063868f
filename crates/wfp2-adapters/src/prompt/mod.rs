//! Prompt adapters.
//!
//! - [`TerminalPrompt`]: dialoguer widgets, for a real TTY
//! - [`LinePrompt`]: plain line reads, for piped stdin
//! - [`ScriptedPrompt`]: queued answers, for tests

mod line;
mod scripted;
#[cfg(feature = "interactive")]
mod terminal;

pub use line::LinePrompt;
pub use scripted::{Answer, ScriptedPrompt};
#[cfg(feature = "interactive")]
pub use terminal::TerminalPrompt;

use wfp2_core::{application::ApplicationError, error::GeneratorError};

fn prompt_failed(reason: impl Into<String>) -> GeneratorError {
    ApplicationError::PromptFailed {
        reason: reason.into(),
    }
    .into()
}

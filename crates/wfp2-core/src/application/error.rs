//! Application layer errors.
//!
//! Every variant is fatal to the running invocation. Files written before
//! the failure stay on disk.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// An expected directory does not exist.
    #[error("Path {} does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// A skeleton file is missing from the skeleton directory.
    #[error("Template {} not found", path.display())]
    TemplateNotFound { path: PathBuf },

    /// A skeleton exists but could not be read.
    #[error("Template {} could not be read: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    /// Writing a file or creating a directory failed.
    #[error("File {} was not written: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    /// The user could not be asked (closed stdin, no terminal, ...).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PathNotFound { path } => vec![
                format!("Nothing found at {}", path.display()),
                "Check the --extension value against the extension directory".into(),
                "Set paths.ext_path (or WFP2_PATHS__EXT_PATH) if the extensions live elsewhere"
                    .into(),
            ],
            Self::TemplateNotFound { path } => vec![
                format!("Missing skeleton: {}", path.display()),
                "Install the default skeletons: wfp2 skeleton:init".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Check read permissions on {}", path.display()),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before this error were kept".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run the command from an interactive terminal".into(),
                "Or pipe the answers on stdin, one per line".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PathNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } | Self::PromptFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

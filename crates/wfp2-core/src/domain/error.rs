// ============================================================================
// domain/error.rs - validation failures of user supplied identifiers
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI re-renders them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was not supplied at all.
    #[error("Parameter {name} is required")]
    MissingParameter { name: &'static str },

    /// An identifier that must be derived into a name was empty.
    #[error("Identifier '{field}' must not be empty")]
    EmptyIdentifier { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingParameter { name } => vec![
                format!("Pass the {name} explicitly"),
                "Example: wfp2 generate:controller Blog --extension=my_extension".into(),
            ],
            Self::EmptyIdentifier { field } => vec![
                format!("The {field} needs at least one character"),
                "Extension keys look like my_extension_name".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParameter { .. } | Self::EmptyIdentifier { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

//! Driven ports - implemented by infrastructure.
//!
//! `wfp2-adapters` provides:
//! - `Filesystem`: `LocalFilesystem` (production), `MemoryFilesystem` (testing)
//! - `Prompt`: `TerminalPrompt`, `LinePrompt`, `ScriptedPrompt` (testing)

use std::path::{Path, PathBuf};

use crate::error::GeneratorResult;

/// Port for filesystem operations.
///
/// Adapters report failures as `ApplicationError::WriteFailed`,
/// `ReadFailed` or `PathNotFound` so callers can propagate with `?`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents.
    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()>;

    /// Absolute, normalized form of an existing path.
    fn canonicalize(&self, path: &Path) -> GeneratorResult<PathBuf>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> GeneratorResult<String>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()>;
}

/// Port for asking the user questions.
///
/// Blocking; the generator waits on each answer.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Ask a yes/no question.
    fn ask_yes_no(&self, message: &str) -> GeneratorResult<bool>;

    /// Ask for a line of text.
    fn ask_text(&self, message: &str) -> GeneratorResult<String>;
}

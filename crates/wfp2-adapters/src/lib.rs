//! Infrastructure adapters for wfp2.
//!
//! This crate implements the ports defined in `wfp2_core::application::ports`.
//! It contains all I/O: the real filesystem, terminal prompts, and the
//! skeleton files bundled with the binary.

pub mod builtin_skeletons;
pub mod filesystem;
pub mod prompt;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
#[cfg(feature = "interactive")]
pub use prompt::TerminalPrompt;
pub use prompt::{LinePrompt, ScriptedPrompt};

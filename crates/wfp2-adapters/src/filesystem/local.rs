//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use wfp2_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GeneratorError, GeneratorResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()> {
        std::fs::create_dir_all(path).map_err(|e| write_failed(path, e, "create directory"))
    }

    fn canonicalize(&self, path: &Path) -> GeneratorResult<PathBuf> {
        std::fs::canonicalize(path).map_err(|_| {
            ApplicationError::PathNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn read_to_string(&self, path: &Path) -> GeneratorResult<String> {
        std::fs::read_to_string(path).map_err(|e| {
            ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()> {
        std::fs::write(path, content).map_err(|e| write_failed(path, e, "write file"))
    }
}

fn write_failed(path: &Path, e: io::Error, operation: &str) -> GeneratorError {
    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

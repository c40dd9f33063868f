//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use wfp2_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GeneratorError, GeneratorResult},
};

/// In-memory filesystem for testing.
///
/// Paths are taken as given: `canonicalize` returns the path unchanged when
/// it exists, so tests should use absolute paths.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Add a directory and its ancestors (testing helper).
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.add_dir(path.as_ref());
        }
        self
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make every write at or below `path` fail.
    pub fn deny_writes(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    fn lock_error() -> GeneratorError {
        GeneratorError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl MemoryFilesystemInner {
    fn add_dir(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn is_read_only(&self, path: &Path) -> bool {
        self.read_only.iter().any(|denied| path.starts_with(denied))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
        if inner.is_read_only(path) {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "Read-only location".into(),
            }
            .into());
        }
        inner.add_dir(path);
        Ok(())
    }

    fn canonicalize(&self, path: &Path) -> GeneratorResult<PathBuf> {
        if self.exists(path) {
            Ok(path.to_path_buf())
        } else {
            Err(ApplicationError::PathNotFound {
                path: path.to_path_buf(),
            }
            .into())
        }
    }

    fn read_to_string(&self, path: &Path) -> GeneratorResult<String> {
        self.read_file(path).ok_or_else(|| {
            ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        if inner.is_read_only(path) {
            return Err(ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                reason: "Read-only location".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

//! Directory creation and file writes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, error::GeneratorResult};

/// Persists rendered text through the [`Filesystem`] port.
#[derive(Clone)]
pub struct FileWriter {
    filesystem: Arc<dyn Filesystem>,
}

impl FileWriter {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create `path` and any missing ancestors, then return its canonical form.
    ///
    /// Existing directories are left alone.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn ensure_directory(&self, path: &Path) -> GeneratorResult<PathBuf> {
        if !self.filesystem.is_dir(path) {
            debug!("Creating directory");
            self.filesystem.create_dir_all(path)?;
        }
        self.filesystem.canonicalize(path)
    }

    /// Replace the contents of `path` with `content`.
    ///
    /// The parent directory must exist; the adapter's `WriteFailed` is
    /// returned untouched.
    #[instrument(skip(self, content), fields(path = %path.display(), bytes = content.len()))]
    pub fn write_text(&self, path: &Path, content: &str) -> GeneratorResult<()> {
        self.filesystem.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::error::GeneratorError;

    #[test]
    fn existing_directory_is_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_canonicalize()
            .withf(|p| p == Path::new("ext/demo/Classes"))
            .returning(|_| Ok(PathBuf::from("/abs/ext/demo/Classes")));

        let writer = FileWriter::new(Arc::new(fs));
        let dir = writer.ensure_directory(Path::new("ext/demo/Classes")).unwrap();
        assert_eq!(dir, PathBuf::from("/abs/ext/demo/Classes"));
    }

    #[test]
    fn missing_directory_is_created() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_canonicalize()
            .returning(|p| Ok(Path::new("/abs").join(p)));

        let writer = FileWriter::new(Arc::new(fs));
        let dir = writer.ensure_directory(Path::new("new")).unwrap();
        assert_eq!(dir, PathBuf::from("/abs/new"));
    }

    #[test]
    fn write_failure_is_propagated() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::WriteFailed {
                path: p.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let writer = FileWriter::new(Arc::new(fs));
        let err = writer.write_text(Path::new("/x.php"), "<?php").unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::Application(ApplicationError::WriteFailed { .. })
        ));
    }
}

//! Directory conventions of a TYPO3 installation.

use std::path::{Path, PathBuf};

use crate::domain::SkeletonId;

/// Name of the extension that ships the skeletons.
pub const SKELETON_EXTENSION: &str = "wfp2_console";

/// Where extensions and skeletons live.
///
/// ```text
/// <ext_path>/
/// ├── wfp2_console/skeleton/<generator>/<template file>
/// └── <extension>/
///     ├── Classes/Controller/<Name>Controller.php
///     └── Resources/Private/Templates/<Controller>/<Action>.html
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionLayout {
    ext_path: PathBuf,
    root_path: PathBuf,
}

impl ExtensionLayout {
    /// `ext_path` holds the extensions; `root_path` is the project root that
    /// `{generator.file}` is reported relative to.
    pub fn new(ext_path: impl Into<PathBuf>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            ext_path: ext_path.into(),
            root_path: root_path.into(),
        }
    }

    pub fn ext_path(&self) -> &Path {
        &self.ext_path
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn extension_dir(&self, slug: &str) -> PathBuf {
        self.ext_path.join(slug)
    }

    pub fn skeleton_dir(&self, generator: &str) -> PathBuf {
        self.ext_path
            .join(SKELETON_EXTENSION)
            .join("skeleton")
            .join(generator)
    }

    pub fn skeleton_path(&self, id: &SkeletonId) -> PathBuf {
        self.skeleton_dir(id.generator()).join(id.file_name())
    }
}

/// `path` relative to the first base that prefixes it, as a display string.
///
/// Falls back to the full path when no base matches.
pub fn relative_to(path: &Path, bases: &[&Path]) -> String {
    bases
        .iter()
        .find_map(|base| path.strip_prefix(base).ok())
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

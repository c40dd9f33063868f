//! Skeleton loading and `{key}` rendering.

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::{
            file_writer::FileWriter,
            layout::{ExtensionLayout, relative_to},
        },
    },
    domain::{ParameterMapping, SkeletonId},
    error::GeneratorResult,
};

pub const KEY_DATE: &str = "generator.date";
pub const KEY_NAME: &str = "generator.name";
pub const KEY_AUTHOR: &str = "generator.author";
pub const KEY_FILE: &str = "generator.file";

/// Source of the `{generator.date}` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timestamp {
    /// Local wall clock at render time.
    #[default]
    Now,
    /// Always the same instant (reproducible output, tests).
    Fixed(NaiveDateTime),
}

impl Timestamp {
    fn resolve(self) -> NaiveDateTime {
        match self {
            Self::Now => Local::now().naive_local(),
            Self::Fixed(at) => at,
        }
    }
}

/// Values every render is enriched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDefaults {
    /// `{generator.name}`
    pub name: String,
    /// `{generator.author}`
    pub author: String,
    /// strftime format of `{generator.date}`.
    pub date_format: String,
    pub timestamp: Timestamp,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            name: "wfp2_console".into(),
            author: "Sebastian Seidelmann <sebastian.seidelmann@googlemail.com>".into(),
            date_format: "%y-%m-%d %H:%M:%S".into(),
            timestamp: Timestamp::Now,
        }
    }
}

/// Loads skeletons from the skeleton directory and fills their placeholders.
#[derive(Clone)]
pub struct TemplateRenderer {
    filesystem: Arc<dyn Filesystem>,
    writer: FileWriter,
    layout: ExtensionLayout,
    defaults: GeneratorDefaults,
}

impl TemplateRenderer {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        layout: ExtensionLayout,
        defaults: GeneratorDefaults,
    ) -> Self {
        Self {
            writer: FileWriter::new(Arc::clone(&filesystem)),
            filesystem,
            layout,
            defaults,
        }
    }

    pub fn layout(&self) -> &ExtensionLayout {
        &self.layout
    }

    /// Read the raw skeleton text.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::TemplateNotFound`] if the file does not exist.
    pub fn load_skeleton(&self, id: &SkeletonId) -> GeneratorResult<String> {
        let path = self.layout.skeleton_path(id);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::TemplateNotFound { path }.into());
        }
        self.filesystem.read_to_string(&path)
    }

    /// Copy of `parameters` with the date, product name and author set.
    ///
    /// These three keys always take the configured values; every other key
    /// is kept as supplied.
    pub fn enrich(&self, parameters: &ParameterMapping) -> ParameterMapping {
        let mut enriched = parameters.clone();
        let date = self
            .defaults
            .timestamp
            .resolve()
            .format(&self.defaults.date_format)
            .to_string();
        enriched.insert(KEY_DATE, date);
        enriched.insert(KEY_NAME, self.defaults.name.as_str());
        enriched.insert(KEY_AUTHOR, self.defaults.author.as_str());
        enriched
    }

    /// Load `id` and substitute the enriched `parameters` into it.
    #[instrument(skip(self, parameters), fields(skeleton = %id))]
    pub fn render(&self, id: &SkeletonId, parameters: &ParameterMapping) -> GeneratorResult<String> {
        let source = self.load_skeleton(id)?;
        let enriched = self.enrich(parameters);
        debug!(keys = enriched.len(), "Rendering skeleton");
        Ok(enriched.substitute(&source))
    }

    /// Render `id` and write it to `target`.
    ///
    /// Adds `{generator.file}`: `target` relative to the configured root path.
    #[instrument(skip(self, parameters), fields(skeleton = %id, target = %target.display()))]
    pub fn render_to_file(
        &self,
        id: &SkeletonId,
        target: &Path,
        parameters: &ParameterMapping,
    ) -> GeneratorResult<()> {
        let mut parameters = parameters.clone();
        parameters.insert(KEY_FILE, self.relative_to_root(target));

        let source = self.render(id, &parameters)?;
        self.writer.write_text(target, &source)
    }

    fn relative_to_root(&self, target: &Path) -> String {
        let root = self.layout.root_path();
        match self.filesystem.canonicalize(root) {
            Ok(canonical) => relative_to(target, &[&canonical, root]),
            Err(_) => relative_to(target, &[root]),
        }
    }
}

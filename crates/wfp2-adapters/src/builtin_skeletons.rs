//! Skeletons bundled with the binary.
//!
//! `wfp2 skeleton:init` copies these into
//! `<ext_path>/wfp2_console/skeleton/controller/` so a fresh installation can
//! generate controllers without hand-writing templates first.

use std::path::PathBuf;

use tracing::{info, instrument};
use wfp2_core::{
    application::{ExtensionLayout, ports::Filesystem},
    domain::{CONTROLLER_GENERATOR, SkeletonId, TemplateKind},
    error::GeneratorResult,
};

pub const CONTROLLER_PHP: &str = r#"<?php
namespace {namespace};

/***************************************************************
 * Generated by {generator.name} on {generator.date}
 * File: {generator.file}
 ***************************************************************/

/**
 * Class {name}
 * @package {namespace}
 * @author {generator.author}
 */
class {name} extends \TYPO3\CMS\Extbase\Mvc\Controller\ActionController
{
{body}
}
"#;

pub const ACTION_PHP: &str = r#"
    /**
     * Action {actionname}
     * Template: {view}
     * @return void
     */
    public function {actionname}()
    {
    }
"#;

pub const VIEW_HTML: &str = r#"<!-- {generator.file}, generated by {generator.name} on {generator.date} -->
<f:layout name="Default" />

<f:section name="main">
    <h1>{controller}::{action}</h1>
</f:section>
"#;

/// Bundled source for a controller skeleton.
pub fn source(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Controller => CONTROLLER_PHP,
        TemplateKind::Action => ACTION_PHP,
        TemplateKind::View => VIEW_HTML,
    }
}

/// What happened to one skeleton file during installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Written,
    Overwritten,
    /// Already present and `force` was not set.
    Kept,
}

/// Write the bundled controller skeletons into the skeleton directory.
///
/// Existing files are kept unless `force` is set.
#[instrument(skip(filesystem, layout))]
pub fn install(
    filesystem: &dyn Filesystem,
    layout: &ExtensionLayout,
    force: bool,
) -> GeneratorResult<Vec<(PathBuf, InstallStatus)>> {
    filesystem.create_dir_all(&layout.skeleton_dir(CONTROLLER_GENERATOR))?;

    let mut installed = Vec::with_capacity(TemplateKind::ALL.len());
    for kind in TemplateKind::ALL {
        let path = layout.skeleton_path(&SkeletonId::controller(kind));
        let status = match (filesystem.exists(&path), force) {
            (true, false) => InstallStatus::Kept,
            (existed, _) => {
                filesystem.write_file(&path, source(kind))?;
                if existed {
                    InstallStatus::Overwritten
                } else {
                    InstallStatus::Written
                }
            }
        };
        info!(path = %path.display(), ?status, "Skeleton installed");
        installed.push((path, status));
    }
    Ok(installed)
}

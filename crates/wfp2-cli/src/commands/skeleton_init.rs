//! `wfp2 skeleton:init`: install the bundled controller skeletons.

use tracing::instrument;
use wfp2_adapters::{LocalFilesystem, builtin_skeletons::{self, InstallStatus}};
use wfp2_core::domain::CONTROLLER_GENERATOR;

use crate::{
    cli::{OutputFormat, SkeletonInitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: SkeletonInitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config = config.with_paths(&args.paths);
    let layout = config.layout();

    let installed = builtin_skeletons::install(&LocalFilesystem::new(), &layout, args.force)?;

    if output.format() == OutputFormat::Json {
        let paths: Vec<_> = installed
            .iter()
            .map(|(path, status)| {
                serde_json::json!({
                    "path": path,
                    "status": status_label(*status),
                })
            })
            .collect();
        output.json(&paths)?;
        return Ok(());
    }

    output.header(&format!(
        "Skeletons in {}",
        layout.skeleton_dir(CONTROLLER_GENERATOR).display()
    ))?;
    for (path, status) in &installed {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match status {
            InstallStatus::Kept => output.info(&format!("{name} kept (use --force to overwrite)"))?,
            other => output.success(&format!("{name} {}", status_label(*other)))?,
        }
    }
    Ok(())
}

fn status_label(status: InstallStatus) -> &'static str {
    match status {
        InstallStatus::Written => "written",
        InstallStatus::Overwritten => "overwritten",
        InstallStatus::Kept => "kept",
    }
}

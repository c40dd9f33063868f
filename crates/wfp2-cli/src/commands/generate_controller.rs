//! `wfp2 generate:controller`: interactive controller generation.

use std::sync::Arc;

use tracing::{debug, instrument};
use wfp2_adapters::{LinePrompt, LocalFilesystem};
use wfp2_core::application::{ControllerGenerator, GenerationReport, ports::Prompt};
use wfp2_core::domain::GenerationRequest;

use crate::{
    cli::{GenerateControllerArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Banner shown before any question is asked.
const SECTION: &str = "Controller generation";

#[instrument(skip_all, fields(controller = %args.controller_name))]
pub fn execute(
    args: GenerateControllerArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config = config.with_paths(&args.paths);
    let json = output.format() == OutputFormat::Json;

    let request = GenerationRequest::new(args.extension, args.controller_name);

    if !json {
        output.section(SECTION)?;
    }

    let generator = ControllerGenerator::new(
        Arc::new(LocalFilesystem::new()),
        select_prompt(json),
        config.layout(),
        config.generator_defaults(),
    );
    let mut announced = Ok(());
    let report = generator.run_with(&request, |controller| {
        if !json {
            announced = output.print(&format!("Create new controller {controller}"));
        }
    })?;
    announced?;

    if json {
        output.json(&report)?;
    } else {
        print_report(&report, &output)?;
    }
    Ok(())
}

/// Themed prompts on a terminal, plain line reads otherwise.
///
/// With JSON output the questions go to stderr so stdout stays parseable.
fn select_prompt(json: bool) -> Box<dyn Prompt> {
    #[cfg(feature = "interactive")]
    if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
        debug!("Using terminal prompt");
        return Box::new(wfp2_adapters::TerminalPrompt::new());
    }

    debug!(json, "Using line prompt");
    if json {
        Box::new(LinePrompt::new(std::io::stdin().lock(), std::io::stderr()))
    } else {
        Box::new(LinePrompt::stdio())
    }
}

fn print_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    for step in &report.steps {
        output.step(&step.description, step.is_ok())?;
    }
    output.info(&format!(
        "Controller written to {}",
        report.controller_path.display()
    ))?;
    output.summary(&report.errors)?;
    Ok(())
}

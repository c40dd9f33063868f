//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wfp2",
    bin_name = "wfp2",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Controller scaffolding for TYPO3 extensions",
    long_about = "wfp2 generates Extbase controllers, action methods and Fluid \
                  views from the skeletons in wfp2_console/skeleton.",
    after_help = "EXAMPLES:\n\
        \x20 wfp2 skeleton:init\n\
        \x20 wfp2 generate:controller Blog --extension=my_extension\n\
        \x20 wfp2 completions bash > /usr/share/bash-completion/completions/wfp2",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a controller with actions and views for an extension.
    #[command(
        name = "generate:controller",
        visible_alias = "generate-controller",
        about = "Creates a controller for given extension",
        after_help = "EXAMPLES:\n\
            \x20 wfp2 generate:controller Blog --extension=my_extension\n\
            \x20 printf 'y\\nlist\\nn\\n' | wfp2 generate:controller Blog --extension=my_extension"
    )]
    GenerateController(GenerateControllerArgs),

    /// Install the bundled controller skeletons.
    #[command(
        name = "skeleton:init",
        about = "Install the default controller skeletons",
        after_help = "EXAMPLES:\n\
            \x20 wfp2 skeleton:init\n\
            \x20 wfp2 skeleton:init --force --ext-path /var/www/typo3conf/ext"
    )]
    SkeletonInit(SkeletonInitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wfp2 completions bash > ~/.local/share/bash-completion/completions/wfp2\n\
            \x20 wfp2 completions zsh  > ~/.zfunc/_wfp2\n\
            \x20 wfp2 completions fish > ~/.config/fish/completions/wfp2.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wfp2 config get paths.ext_path\n\
            \x20 wfp2 config list\n\
            \x20 wfp2 config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Installation paths; override `paths.*` from the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// Directory holding the extensions (typo3conf/ext).
    #[arg(long = "ext-path", value_name = "DIR", help = "Extension directory")]
    pub ext_path: Option<PathBuf>,

    /// Project root that generated file paths are reported relative to.
    #[arg(long = "root-path", value_name = "DIR", help = "Project root directory")]
    pub root_path: Option<PathBuf>,
}

// ── generate:controller ───────────────────────────────────────────────────────

/// Arguments for `wfp2 generate:controller`.
#[derive(Debug, Args)]
pub struct GenerateControllerArgs {
    /// Controller name; `Controller` is appended when missing.
    #[arg(value_name = "CONTROLLER_NAME", help = "The Controller name")]
    pub controller_name: String,

    /// Extension key below the extension directory.
    ///
    /// Required; checked by the generator so a missing value is reported
    /// like every other generation error.
    #[arg(
        long = "extension",
        value_name = "EXTENSION",
        help = "The extension name in typo3conf/ext"
    )]
    pub extension: Option<String>,

    #[command(flatten)]
    pub paths: PathArgs,
}

// ── skeleton:init ─────────────────────────────────────────────────────────────

/// Arguments for `wfp2 skeleton:init`.
#[derive(Debug, Args)]
pub struct SkeletonInitArgs {
    /// Overwrite skeletons that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing skeletons")]
    pub force: bool,

    #[command(flatten)]
    pub paths: PathArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wfp2 completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `wfp2 config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.ext_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_controller() {
        let cli = Cli::parse_from([
            "wfp2",
            "generate:controller",
            "Blog",
            "--extension=wfp2_demo",
        ]);
        match cli.command {
            Commands::GenerateController(args) => {
                assert_eq!(args.controller_name, "Blog");
                assert_eq!(args.extension.as_deref(), Some("wfp2_demo"));
                assert!(args.paths.ext_path.is_none());
            }
            other => panic!("expected generate:controller, got {other:?}"),
        }
    }

    #[test]
    fn extension_may_be_omitted_at_parse_time() {
        let cli = Cli::parse_from(["wfp2", "generate:controller", "Blog"]);
        assert!(matches!(
            cli.command,
            Commands::GenerateController(GenerateControllerArgs { extension: None, .. })
        ));
    }

    #[test]
    fn controller_name_is_required() {
        assert!(Cli::try_parse_from(["wfp2", "generate:controller"]).is_err());
    }

    #[test]
    fn dashed_alias() {
        let cli = Cli::parse_from(["wfp2", "generate-controller", "Blog", "--extension", "x"]);
        assert!(matches!(cli.command, Commands::GenerateController(_)));
    }

    #[test]
    fn path_overrides_parse() {
        let cli = Cli::parse_from([
            "wfp2",
            "skeleton:init",
            "--force",
            "--ext-path",
            "/var/www/typo3conf/ext",
        ]);
        match cli.command {
            Commands::SkeletonInit(args) => {
                assert!(args.force);
                assert_eq!(
                    args.paths.ext_path,
                    Some(PathBuf::from("/var/www/typo3conf/ext"))
                );
            }
            other => panic!("expected skeleton:init, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["wfp2", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}

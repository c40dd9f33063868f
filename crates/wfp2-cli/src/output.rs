//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Closing line when no manual work is left.
pub const ALL_OK: &str = "Everything is OK! Now get to work :).";

/// Banner above the manual-fixup list.
pub const MANUAL_FIXUP: [&str; 2] = [
    "Some steps could not be completed automatically.",
    "Please fix the following manually:",
];

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Padded banner with blank lines around it.
    pub fn section(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let padded = format!("  {text}  ");
        let line = if self.no_color {
            padded
        } else {
            padded.white().on_blue().bold().to_string()
        };
        self.term.write_line("")?;
        self.term.write_line(&line)?;
        self.term.write_line("")
    }

    /// One step of the runner: `OK` or `FAILED` before its description.
    pub fn step(&self, description: &str, ok: bool) -> io::Result<()> {
        if ok {
            if self.quiet {
                return Ok(());
            }
            let status = if self.no_color {
                "OK".to_owned()
            } else {
                "OK".green().bold().to_string()
            };
            self.term.write_line(&format!("{description}: {status}"))
        } else {
            let status = if self.no_color {
                "FAILED".to_owned()
            } else {
                "FAILED".red().bold().to_string()
            };
            self.term.write_line(&format!("{description}: {status}"))
        }
    }

    /// Closing summary: the all-OK banner, or the manual-fixup list.
    pub fn summary(&self, errors: &[String]) -> io::Result<()> {
        if errors.is_empty() {
            return self.section(ALL_OK);
        }

        self.term.write_line("")?;
        for line in MANUAL_FIXUP {
            let line = if self.no_color {
                line.to_owned()
            } else {
                line.white().on_red().bold().to_string()
            };
            self.term.write_line(&line)?;
        }
        self.term.write_line("")?;
        for error in errors {
            self.error(error)?;
        }
        Ok(())
    }

    /// Pretty JSON on stdout; never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&rendered)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

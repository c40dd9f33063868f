//! One module per subcommand; each exposes an `execute` function.

pub mod completions;
pub mod config;
pub mod generate_controller;
pub mod skeleton_init;

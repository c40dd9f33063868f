//! Application layer.
//!
//! - **Services**: `TemplateRenderer`, `FileWriter`, `ControllerGenerator`
//! - **Ports**: `Filesystem` and `Prompt`, implemented in `wfp2-adapters`
//! - **Errors**: fatal generation failures
//!
//! Naming rules and substitution live in `crate::domain`; this layer only
//! sequences them around I/O.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ControllerGenerator, ExtensionLayout, FileWriter, GenerationReport, GenerationState,
    GeneratorDefaults, StepOutcome, StepRunner, TemplateRenderer, Timestamp,
};

pub use ports::{Filesystem, Prompt};

pub use error::ApplicationError;

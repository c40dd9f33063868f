//! Application services - orchestrate use cases.

pub mod controller_generator;
pub mod file_writer;
pub mod layout;
pub mod step_runner;
pub mod template_renderer;

pub use controller_generator::{ControllerGenerator, GenerationReport, GenerationState};
pub use file_writer::FileWriter;
pub use layout::ExtensionLayout;
pub use step_runner::{StepOutcome, StepRunner};
pub use template_renderer::{GeneratorDefaults, TemplateRenderer, Timestamp};

//! Core domain layer for the controller generator.
//!
//! Pure logic only: name derivation, placeholder substitution and the value
//! types the generator passes around. No filesystem access, no prompting.
//! Both live behind the ports in `crate::application::ports`.

pub mod entities;
pub mod error;
pub mod naming;

pub use entities::{
    parameters::ParameterMapping,
    request::{ActionSpec, GenerationRequest},
    skeleton::{CONTROLLER_GENERATOR, SkeletonId, TemplateKind},
};
pub use error::DomainError;
pub use naming::NamespacePath;

//! WFP2 Core - controller scaffolding engine
//!
//! This crate provides the domain and application layers for the `wfp2`
//! generator, following the ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             wfp2-cli (CLI)              │
//! │   generate:controller, skeleton:init    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ControllerGenerator, TemplateRenderer, │
//! │              FileWriter                 │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          Filesystem, Prompt             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     wfp2-adapters (Infrastructure)      │
//! │  LocalFilesystem, TerminalPrompt, ...   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  naming, ParameterMapping, ActionSpec   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wfp2_core::{
//!     application::{ControllerGenerator, GeneratorDefaults, ExtensionLayout},
//!     domain::GenerationRequest,
//! };
//!
//! let layout = ExtensionLayout::new("typo3conf/ext", ".");
//! let generator = ControllerGenerator::new(filesystem, prompt, layout, GeneratorDefaults::default());
//! let request = GenerationRequest::new(Some("wfp2_demo".into()), "Blog");
//! let report = generator.run(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ControllerGenerator, ExtensionLayout, FileWriter, GenerationReport, GeneratorDefaults,
        StepRunner, TemplateRenderer, Timestamp,
        ports::{Filesystem, Prompt},
    };
    pub use crate::domain::{
        ActionSpec, GenerationRequest, NamespacePath, ParameterMapping, SkeletonId, TemplateKind,
        naming,
    };
    pub use crate::error::{GeneratorError, GeneratorResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! # edmflow - Process Configuration Builder
//!
//! `edmflow` builds, validates, and renders declarative process descriptors
//! for event-processing pipelines: which externally implemented modules run,
//! in what order, with what parameters, reading which input and writing
//! which products.
//!
//! The descriptors are pure values. Nothing here clusters jets or calibrates
//! electrons; the execution engine those descriptors are handed to is out of
//! scope.
//!
//! ## Quick Start
//!
//! ```bash
//! # Emit the canned regression-and-calibration wiring
//! edmflow emit --preset regression-from-aod -o process.yaml
//!
//! # Check it
//! edmflow validate process.yaml
//!
//! # Inspect the schedule
//! edmflow graph process.yaml --format mermaid
//! ```

pub mod cli;
pub mod errors;
pub mod filter;
pub mod params;
pub mod presets;
pub mod process;
pub mod templates;

// Re-export commonly used types
pub use errors::{EdmflowError, EdmflowResult};
pub use filter::{BranchName, OutputCommand, OutputRules, Selection};
pub use params::{InputTag, ParamValue, Parameter, ParameterSet};
pub use process::{
    ModuleConfig, OutputDescriptor, Process, ProcessBuilder, ProcessValidator, ScheduleGraph,
    SourceDescriptor, TaskPath,
};
pub use templates::TemplateLibrary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

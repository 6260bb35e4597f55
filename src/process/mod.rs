// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Process descriptors and their structural checks
//!
//! This module defines the core data structures for edmflow processes:
//! module configurations, source/output descriptors, paths, the builder,
//! and the validation and dependency-graph layers.

mod builder;
mod definition;
mod graph;
mod validation;

pub use builder::ProcessBuilder;
pub use definition::*;
pub use graph::ScheduleGraph;
pub use validation::{ProcessValidator, ValidationResult};

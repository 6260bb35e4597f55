// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Typed parameter records
//!
//! The value vocabulary a module configuration is built from: scalar and
//! string parameters, tagged references to other modules' products, and
//! nested parameter sets. All records are plain values; once a process is
//! built they are never mutated.

mod input_tag;
mod pset;
mod value;

pub use input_tag::InputTag;
pub use pset::ParameterSet;
pub use value::{ParamValue, Parameter};

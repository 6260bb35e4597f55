// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Process builder
//!
//! Assembles a process descriptor field by field and freezes it with
//! [`ProcessBuilder::build`]. Building performs no validation and no I/O;
//! malformed configurations are caught later by [`crate::ProcessValidator`]
//! or, ultimately, by the execution engine.

use std::collections::BTreeMap;
use tracing::debug;

use crate::params::ParameterSet;
use crate::process::{
    ModuleConfig, OutputDescriptor, Process, SourceDescriptor, TaskPath,
};

/// Builder for [`Process`] descriptors
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    name: String,
    global_tag: Option<String>,
    max_events: i32,
    services: BTreeMap<String, ParameterSet>,
    modules: BTreeMap<String, ModuleConfig>,
    source: Option<SourceDescriptor>,
    output: Option<OutputDescriptor>,
    paths: Vec<TaskPath>,
    end_paths: Vec<TaskPath>,
}

impl ProcessBuilder {
    /// Start a process with the given name (and production namespace)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            global_tag: None,
            max_events: -1,
            services: BTreeMap::new(),
            modules: BTreeMap::new(),
            source: None,
            output: None,
            paths: Vec::new(),
            end_paths: Vec::new(),
        }
    }

    /// Set the global calibration tag
    pub fn global_tag(mut self, tag: impl Into<String>) -> Self {
        self.global_tag = Some(tag.into());
        self
    }

    /// Set the event-count limit (-1 = unlimited)
    pub fn max_events(mut self, limit: i32) -> Self {
        self.max_events = limit;
        self
    }

    /// Declare a framework service; redeclaring a name replaces it
    pub fn service(mut self, name: impl Into<String>, params: ParameterSet) -> Self {
        self.services.insert(name.into(), params);
        self
    }

    /// Declare a module under a label; redeclaring a label replaces it
    pub fn module(mut self, label: impl Into<String>, config: ModuleConfig) -> Self {
        let label = label.into();
        if self.modules.contains_key(&label) {
            debug!(label = %label, "replacing module configuration");
        }
        self.modules.insert(label, config);
        self
    }

    /// Set the input descriptor
    pub fn source(mut self, source: SourceDescriptor) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the output descriptor
    pub fn output(mut self, output: OutputDescriptor) -> Self {
        self.output = Some(output);
        self
    }

    /// Append an execution path
    pub fn path(mut self, path: TaskPath) -> Self {
        self.paths.push(path);
        self
    }

    /// Append a termination path
    pub fn end_path(mut self, path: TaskPath) -> Self {
        self.end_paths.push(path);
        self
    }

    /// Freeze the descriptor
    pub fn build(self) -> Process {
        debug!(
            name = %self.name,
            modules = self.modules.len(),
            paths = self.paths.len(),
            "building process descriptor"
        );

        Process {
            name: self.name,
            global_tag: self.global_tag,
            max_events: self.max_events,
            services: self.services,
            modules: self.modules,
            source: self.source,
            output: self.output,
            paths: self.paths,
            end_paths: self.end_paths,
        }
    }
}

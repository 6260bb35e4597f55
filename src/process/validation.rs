// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Process validation
//!
//! The descriptor itself validates nothing at construction time; these are
//! the structural checks an execution engine would perform before running,
//! surfaced early and without side effects.

use std::collections::HashSet;

use crate::errors::EdmflowError;
use crate::process::{Process, ScheduleGraph, TaskPath};

/// Simulation campaigns the calibration producer accepts when `isMC` is set
const MC_DATASETS: &[&str] = &["Summer11", "Fall11", "Summer12", "Summer12_DR53X_HCP2012"];

/// Data reprocessings the calibration producer accepts when `isMC` is unset
const DATA_DATASETS: &[&str] = &["Prompt", "ReReco", "Jan16ReReco", "ICHEP2012", "Moriond2013"];

/// Process validator
pub struct ProcessValidator;

impl ProcessValidator {
    /// Validate a process descriptor
    pub fn validate(process: &Process) -> ValidationResult {
        let mut result = ValidationResult::new();

        if process.paths.is_empty() {
            result.add_error("Process has no paths defined");
        }

        if process.name.is_empty() {
            result.add_error("Process name is empty");
        }

        match &process.source {
            None => result.add_error("Process has no source descriptor"),
            Some(source) if source.file_names.is_empty() => {
                result.add_error("Source descriptor lists no input locations");
            }
            Some(_) => {}
        }

        match &process.output {
            None => result.add_warning("Process has no output descriptor; nothing will be written"),
            Some(output) if output.output_commands.is_empty() => {
                result.add_warning(&format!(
                    "Output '{}' has no filter rules; every branch will be dropped",
                    output.label
                ));
            }
            Some(_) => {}
        }

        for path in &process.paths {
            Self::validate_path(path, process, &mut result);
        }
        for end_path in &process.end_paths {
            Self::validate_end_path(end_path, process, &mut result);
        }

        // Dependency graph: cycles and scheduling order
        match ScheduleGraph::build(process) {
            Ok(graph) => Self::validate_schedule_order(process, &graph, &mut result),
            Err(EdmflowError::CircularDependency { modules }) => {
                result.add_error(&format!(
                    "Circular data dependency: {}",
                    modules.join(" -> ")
                ));
            }
            Err(e) => result.add_error(&format!("Dependency graph error: {}", e)),
        }

        for (label, module) in &process.modules {
            if module.plugin == "CalibratedElectronProducer" {
                Self::validate_calibration_module(label, module, &mut result);
            }
        }

        result
    }

    /// Validate one execution path
    fn validate_path(path: &TaskPath, process: &Process, result: &mut ValidationResult) {
        if path.modules.is_empty() {
            result.add_error(&format!("Path '{}' is empty", path.name));
        }

        let mut seen = HashSet::new();
        for label in &path.modules {
            if process.get_module(label).is_none() {
                result.add_error(&format!(
                    "Path '{}' references unknown module '{}'",
                    path.name, label
                ));
            }
            if !seen.insert(label) {
                result.add_error(&format!(
                    "Path '{}' schedules module '{}' more than once",
                    path.name, label
                ));
            }
        }
    }

    /// Validate one termination path
    fn validate_end_path(path: &TaskPath, process: &Process, result: &mut ValidationResult) {
        let output_label = process.output.as_ref().map(|o| o.label.as_str());

        for label in &path.modules {
            let is_output = output_label == Some(label.as_str());
            if !is_output && process.get_module(label).is_none() {
                result.add_error(&format!(
                    "End path '{}' references unknown module '{}'",
                    path.name, label
                ));
            }
        }
    }

    /// Consumers must be scheduled after their producers within each path
    fn validate_schedule_order(
        process: &Process,
        graph: &ScheduleGraph,
        result: &mut ValidationResult,
    ) {
        for path in &process.paths {
            for (pos, label) in path.modules.iter().enumerate() {
                let Some(producers) = graph.producers_for(label) else {
                    continue;
                };

                for producer in producers {
                    match path.modules.iter().position(|m| *m == producer) {
                        Some(producer_pos) if producer_pos > pos => {
                            result.add_error(&format!(
                                "Path '{}': module '{}' consumes '{}' but is scheduled before it",
                                path.name, label, producer
                            ));
                        }
                        Some(_) => {}
                        None => {
                            result.add_warning(&format!(
                                "Path '{}': module '{}' consumes '{}', which is not scheduled in this path",
                                path.name, label, producer
                            ));
                        }
                    }
                }
            }
        }

        // Modules defined but never scheduled
        let scheduled: HashSet<&str> = process
            .paths
            .iter()
            .flat_map(|p| p.modules.iter().map(|m| m.as_str()))
            .collect();
        for label in process.modules.keys() {
            if !scheduled.contains(label.as_str()) {
                result.add_warning(&format!("Module '{}' is defined but never scheduled", label));
            }
        }
    }

    /// Dataset/isMC consistency for the calibration producer
    ///
    /// Mirrors the checks the producer itself performs at construction, so
    /// a bad dataset name is caught before the engine ever runs.
    fn validate_calibration_module(
        label: &str,
        module: &crate::process::ModuleConfig,
        result: &mut ValidationResult,
    ) {
        let Some(is_mc) = module.params.get_bool("isMC") else {
            result.add_warning(&format!(
                "Module '{}': 'isMC' is missing or not a bool",
                label
            ));
            return;
        };
        let Some(dataset) = module.params.get_str("inputDataset") else {
            result.add_warning(&format!(
                "Module '{}': 'inputDataset' is missing or not a string",
                label
            ));
            return;
        };

        let known = if is_mc { MC_DATASETS } else { DATA_DATASETS };
        if !known.contains(&dataset) {
            let kind = if is_mc { "simulation" } else { "data" };
            result.add_error(&format!(
                "Module '{}': unknown {} dataset '{}' (expected one of: {})",
                label,
                kind,
                dataset,
                known.join(", ")
            ));
        }
    }
}

/// Result of process validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn add_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

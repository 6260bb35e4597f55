// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Process descriptor structures
//!
//! The value records an execution engine consumes: module configurations,
//! source/output descriptors, and ordered paths. Everything here is
//! immutable after construction; the engine is handed a finished value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path as FsPath;

use crate::errors::{EdmflowError, EdmflowResult};
use crate::filter::OutputRules;
use crate::params::{ParamValue, ParameterSet};

/// A complete process descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Process name, also the namespace its products are tagged with
    pub name: String,

    /// Versioned calibration-dataset identifier, opaque at this layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_tag: Option<String>,

    /// Event-count limit; -1 means unlimited
    #[serde(default = "default_max_events")]
    pub max_events: i32,

    /// Configured framework services by name
    #[serde(default)]
    pub services: BTreeMap<String, ParameterSet>,

    /// Module configurations by label
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,

    /// Input descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceDescriptor>,

    /// Output descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputDescriptor>,

    /// Execution paths in declaration order
    #[serde(default)]
    pub paths: Vec<TaskPath>,

    /// Termination paths (output stages)
    #[serde(default)]
    pub end_paths: Vec<TaskPath>,
}

fn default_max_events() -> i32 {
    -1
}

impl Process {
    /// Load a descriptor, choosing the format by file extension
    pub fn from_file(path: &FsPath) -> EdmflowResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EdmflowError::FileReadError {
                path: path.to_path_buf(),
                error: e.to_string(),
            })?;

        match DescriptorFormat::from_path(path)? {
            DescriptorFormat::Yaml => Self::from_yaml(&content),
            DescriptorFormat::Json => serde_json::from_str(&content).map_err(Into::into),
            DescriptorFormat::Toml => toml::from_str(&content).map_err(Into::into),
        }
    }

    /// Write a descriptor, choosing the format by file extension
    pub fn to_file(&self, path: &FsPath) -> EdmflowResult<()> {
        let content = self.render(DescriptorFormat::from_path(path)?)?;
        std::fs::write(path, content).map_err(|e| EdmflowError::FileWriteError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse a descriptor from a YAML string
    pub fn from_yaml(yaml: &str) -> EdmflowResult<Self> {
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Serialize the descriptor to YAML
    pub fn to_yaml(&self) -> EdmflowResult<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Serialize the descriptor in the given format
    pub fn render(&self, format: DescriptorFormat) -> EdmflowResult<String> {
        match format {
            DescriptorFormat::Yaml => self.to_yaml(),
            DescriptorFormat::Json => {
                serde_json::to_string_pretty(self).map_err(Into::into)
            }
            DescriptorFormat::Toml => toml::to_string_pretty(self).map_err(Into::into),
        }
    }

    /// Get a module configuration by label
    pub fn get_module(&self, label: &str) -> Option<&ModuleConfig> {
        self.modules.get(label)
    }

    /// Get a path by name
    pub fn get_path(&self, name: &str) -> Option<&TaskPath> {
        self.paths.iter().find(|p| p.name == name)
    }

    /// All module labels, in name order
    pub fn module_labels(&self) -> Vec<&str> {
        self.modules.keys().map(|k| k.as_str()).collect()
    }
}

/// Serialization formats for descriptor files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    Yaml,
    Json,
    Toml,
}

impl DescriptorFormat {
    /// Choose a format from a file extension
    pub fn from_path(path: &FsPath) -> EdmflowResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        extension.parse().map_err(|_| EdmflowError::UnsupportedFormat {
            extension: extension.to_string(),
        })
    }
}

impl std::str::FromStr for DescriptorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Unknown descriptor format: {}", s)),
        }
    }
}

/// A configured external module: plugin name plus its parameter record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Name of the externally implemented plugin
    pub plugin: String,

    /// Module parameters
    #[serde(default)]
    pub params: ParameterSet,
}

impl ModuleConfig {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            params: ParameterSet::new(),
        }
    }

    /// Builder-style parameter override
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Builder-style untracked parameter override
    pub fn with_untracked(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.params.insert_untracked(name, value);
        self
    }

    /// Clone this configuration with a set of overrides applied
    pub fn clone_with(&self, overrides: &ParameterSet) -> Self {
        Self {
            plugin: self.plugin.clone(),
            params: self.params.overriding(overrides),
        }
    }
}

/// Input descriptor: where events come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    /// Source plugin name, e.g. `PoolSource`
    pub plugin: String,

    /// Input locations, opaque to this layer
    #[serde(default)]
    pub file_names: Vec<String>,
}

impl SourceDescriptor {
    pub fn pool(file_names: Vec<String>) -> Self {
        Self {
            plugin: "PoolSource".to_string(),
            file_names,
        }
    }
}

/// Output descriptor: where selected products go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    /// Label end paths refer to this descriptor by
    #[serde(default = "default_output_label")]
    pub label: String,

    /// Output plugin name, e.g. `PoolOutputModule`
    pub plugin: String,

    /// Output location, opaque to this layer
    pub file_name: String,

    /// Ordered keep/drop rules over produced branches
    #[serde(default)]
    pub output_commands: OutputRules,
}

fn default_output_label() -> String {
    "out".to_string()
}

impl OutputDescriptor {
    pub fn pool(file_name: impl Into<String>, output_commands: OutputRules) -> Self {
        Self {
            label: default_output_label(),
            plugin: "PoolOutputModule".to_string(),
            file_name: file_name.into(),
            output_commands,
        }
    }
}

/// An ordered sequence of module labels
///
/// Order is significant and fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPath {
    pub name: String,
    pub modules: Vec<String>,
}

impl TaskPath {
    pub fn new<S: Into<String>>(name: impl Into<String>, modules: Vec<S>) -> Self {
        Self {
            name: name.into(),
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }
}

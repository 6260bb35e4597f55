// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Error types for process-descriptor construction and validation
//!
//! Descriptor construction itself never fails; errors surface when loading,
//! validating, or rendering a descriptor.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for edmflow operations
pub type EdmflowResult<T> = Result<T, EdmflowError>;

/// Main error type for edmflow
#[derive(Error, Debug, Diagnostic)]
pub enum EdmflowError {
    // ─────────────────────────────────────────────────────────────────────────
    // Descriptor Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Process file not found: {path}")]
    #[diagnostic(
        code(edmflow::process_not_found),
        help("Generate one with 'edmflow emit --preset regression-from-aod -o process.yaml'")
    )]
    ProcessNotFound { path: PathBuf },

    #[error("Invalid process configuration: {reason}")]
    #[diagnostic(code(edmflow::invalid_process))]
    InvalidProcess {
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("No template named '{name}'")]
    #[diagnostic(code(edmflow::unknown_template))]
    UnknownTemplate {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Circular data dependency detected")]
    #[diagnostic(
        code(edmflow::circular_dependency),
        help("Review the input tags of the listed modules to remove the cycle")
    )]
    CircularDependency { modules: Vec<String> },

    // ─────────────────────────────────────────────────────────────────────────
    // Parameter Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Malformed input tag: '{tag}'")]
    #[diagnostic(
        code(edmflow::invalid_input_tag),
        help("Input tags take the form 'label', 'label:instance', or 'label:instance:process'")
    )]
    InvalidInputTag { tag: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Output Command Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Malformed output command: '{command}'")]
    #[diagnostic(
        code(edmflow::invalid_output_command),
        help("Output commands are 'keep <pattern>' or 'drop <pattern>', where the pattern \
              is '*' or 'type_label_instance_process' with '*' wildcards per field")
    )]
    InvalidOutputCommand { command: String },

    #[error("Malformed branch name: '{branch}'")]
    #[diagnostic(
        code(edmflow::invalid_branch),
        help("Branch names take the form 'type_label_instance_process'")
    )]
    InvalidBranch { branch: String },

    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(edmflow::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(edmflow::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    #[error("Unsupported descriptor format: '{extension}'")]
    #[diagnostic(
        code(edmflow::unsupported_format),
        help("Supported formats: .yaml/.yml, .json, .toml")
    )]
    UnsupportedFormat { extension: String },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(edmflow::io_error))]
    Io { message: String },

    #[error("YAML parsing error: {message}")]
    #[diagnostic(code(edmflow::yaml_error))]
    Yaml { message: String },

    #[error("JSON parsing error: {message}")]
    #[diagnostic(code(edmflow::json_error))]
    Json { message: String },

    #[error("TOML parsing error: {message}")]
    #[diagnostic(code(edmflow::toml_error))]
    Toml { message: String },
}

impl From<std::io::Error> for EdmflowError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for EdmflowError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for EdmflowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<toml::de::Error> for EdmflowError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl From<toml::ser::Error> for EdmflowError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl EdmflowError {
    /// Create an unknown template error listing the available names
    pub fn unknown_template(name: &str, available: &[&str]) -> Self {
        Self::UnknownTemplate {
            name: name.to_string(),
            help: Some(format!("Available templates: {}", available.join(", "))),
        }
    }

}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for edmflow.

pub mod emit;
pub mod graph;
pub mod select;
pub mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Process configuration builder
///
/// Build, validate, and render declarative process descriptors.
#[derive(Parser, Debug)]
#[clap(
    name = "edmflow",
    version,
    about = "Process configuration builder for event-processing pipelines",
    long_about = None,
    after_help = "Examples:\n\
        edmflow emit --preset regression-from-aod -o process.yaml\n\
        edmflow validate process.yaml            Check a descriptor\n\
        edmflow graph process.yaml --format dot  Render the schedule\n\
        edmflow select process.yaml doubleMap_calibratedElectrons_eneRegForGsfEle_ExREG\n\n\
        See 'edmflow <command> --help' for more information on a specific command."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a process descriptor
    Validate {
        /// Descriptor file to validate
        #[clap(default_value = "process.yaml")]
        process: PathBuf,
    },

    /// Show the schedule and its data dependencies as a graph
    Graph {
        /// Descriptor file
        #[clap(default_value = "process.yaml")]
        process: PathBuf,

        /// Output format (text, dot, mermaid)
        #[clap(short, long, default_value = "text")]
        format: GraphFormat,
    },

    /// Emit a process descriptor
    Emit {
        /// Preset to emit (regression-from-aod)
        #[clap(short, long, default_value = "regression-from-aod")]
        preset: String,

        /// Output file (default: stdout)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Output format, ignored when -o carries an extension (yaml, json, toml)
        #[clap(short, long, default_value = "yaml")]
        format: EmitFormat,
    },

    /// Report whether the output rules keep or drop a branch
    Select {
        /// Descriptor file
        process: PathBuf,

        /// Branch name, e.g. 'recoGsfElectrons_gsfElectrons__RECO'
        branch: String,
    },
}

/// Graph output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Text,
    Dot,
    Mermaid,
}

impl std::str::FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "dot" => Ok(Self::Dot),
            "mermaid" => Ok(Self::Mermaid),
            _ => Err(format!("Unknown graph format: {}", s)),
        }
    }
}

/// Emit output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    Yaml,
    Json,
    Toml,
}

impl std::str::FromStr for EmitFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Unknown emit format: {}", s)),
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! edmflow - Process Configuration Builder
//!
//! Build, validate, and render declarative process descriptors for
//! event-processing pipelines.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edmflow::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edmflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    // Dispatch to command handlers
    match cli.command {
        Commands::Validate { process } => edmflow::cli::validate::run(process, cli.verbose).await,
        Commands::Graph { process, format } => {
            edmflow::cli::graph::run(process, format, cli.verbose).await
        }
        Commands::Emit {
            preset,
            output,
            format,
        } => edmflow::cli::emit::run(preset, output, format, cli.verbose).await,
        Commands::Select { process, branch } => {
            edmflow::cli::select::run(process, branch, cli.verbose).await
        }
    }
}

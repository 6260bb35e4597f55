// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Emit command - write a canned process descriptor

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use super::EmitFormat;
use crate::presets;
use crate::process::DescriptorFormat;

/// Run the emit command
pub async fn run(
    preset: String,
    output: Option<PathBuf>,
    format: EmitFormat,
    verbose: bool,
) -> Result<()> {
    let process = presets::by_name(&preset).ok_or_else(|| {
        miette::miette!(
            "Unknown preset '{}'. Available presets: {}",
            preset,
            presets::PRESET_NAMES.join(", ")
        )
    })??;

    if verbose {
        eprintln!(
            "{} preset '{}' ({} modules, {} path(s))",
            "Emitting".bold(),
            preset,
            process.modules.len(),
            process.paths.len()
        );
    }

    match output {
        Some(path) => {
            process.to_file(&path)?;
            println!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => {
            let format = match format {
                EmitFormat::Yaml => DescriptorFormat::Yaml,
                EmitFormat::Json => DescriptorFormat::Json,
                EmitFormat::Toml => DescriptorFormat::Toml,
            };
            print!("{}", process.render(format)?);
        }
    }

    Ok(())
}

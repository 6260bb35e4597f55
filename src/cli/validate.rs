// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Validate command - check a process descriptor

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::process::{Process, ProcessValidator};

/// Run the validate command
pub async fn run(process_path: PathBuf, verbose: bool) -> Result<()> {
    println!("{}", "Validating process descriptor...".bold());
    println!();

    if !process_path.exists() {
        return Err(crate::EdmflowError::ProcessNotFound { path: process_path }.into());
    }

    let process = match Process::from_file(&process_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("  {} Failed to parse descriptor", "✗".red());
            eprintln!();
            return Err(e.into());
        }
    };

    println!("  {} Descriptor parses", "✓".green());

    let validation = ProcessValidator::validate(&process);

    if !validation.errors.is_empty() {
        println!();
        println!("{}:", "Errors".red().bold());
        for error in &validation.errors {
            println!("  {} {}", "✗".red(), error);
        }
    }

    if !validation.warnings.is_empty() {
        println!();
        println!("{}:", "Warnings".yellow().bold());
        for warning in &validation.warnings {
            println!("  {} {}", "⚠".yellow(), warning);
        }
    }

    if verbose {
        println!();
        println!("{}:", "Process summary".bold());
        println!("  Name: {}", process.name);
        if let Some(tag) = &process.global_tag {
            println!("  Global tag: {}", tag);
        }
        println!("  Max events: {}", process.max_events);
        println!("  Modules: {}", process.modules.len());
        for path in &process.paths {
            println!(
                "    {} = {}",
                path.name,
                path.modules.join(" * ").dimmed()
            );
        }
        if let Some(output) = &process.output {
            println!("  Output: {}", output.file_name);
            for command in output.output_commands.commands() {
                println!("    {}", command.to_string().dimmed());
            }
        }
    }

    println!();

    if validation.is_valid() {
        if validation.has_warnings() {
            println!("{}", "Descriptor is valid but has warnings.".yellow().bold());
        } else {
            println!("{}", "Descriptor is valid!".green().bold());
        }
        Ok(())
    } else {
        Err(crate::EdmflowError::InvalidProcess {
            reason: format!("{} error(s) found", validation.errors.len()),
            help: Some("See the report above".to_string()),
        }
        .into())
    }
}

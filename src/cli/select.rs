// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Select command - test a branch name against a descriptor's output rules

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::filter::{BranchName, Selection};
use crate::process::Process;

/// Run the select command
pub async fn run(process_path: PathBuf, branch: String, verbose: bool) -> Result<()> {
    if !process_path.exists() {
        return Err(crate::EdmflowError::ProcessNotFound { path: process_path }.into());
    }

    let process = Process::from_file(&process_path)?;
    let branch: BranchName = branch.parse()?;

    let Some(output) = &process.output else {
        return Err(miette::miette!(
            "Process '{}' has no output descriptor",
            process.name
        ));
    };

    let selection = output.output_commands.selects(&branch);

    if verbose {
        println!("{}:", "Rules".bold());
        for command in output.output_commands.commands() {
            println!("  {}", command);
        }
        println!();
    }

    match selection {
        Selection::Keep => println!("{} {}", "keep".green().bold(), branch),
        Selection::Drop => println!("{} {}", "drop".red().bold(), branch),
    }

    Ok(())
}

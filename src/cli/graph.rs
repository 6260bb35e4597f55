// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Graph command - visualize the schedule and its data dependencies

use miette::Result;
use std::path::PathBuf;

use super::GraphFormat;
use crate::process::{Process, ScheduleGraph};

/// Run the graph command
pub async fn run(process_path: PathBuf, format: GraphFormat, _verbose: bool) -> Result<()> {
    if !process_path.exists() {
        return Err(crate::EdmflowError::ProcessNotFound { path: process_path }.into());
    }

    let process = Process::from_file(&process_path)?;
    let graph = ScheduleGraph::build(&process)?;

    let output = match format {
        GraphFormat::Text => graph.to_text(&process),
        GraphFormat::Dot => graph.to_dot(),
        GraphFormat::Mermaid => graph.to_mermaid(),
    };

    println!("{}", output);

    Ok(())
}

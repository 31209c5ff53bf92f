// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line front end for inspecting and round-tripping diagram documents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{debug, info};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::error::ValidationError;
use crate::format::{document_schema, Document, DocumentCounts};
use crate::workspace::Workspace;

/// Inspect, validate and round-trip FossFLOW diagram documents
#[derive(Parser, Debug)]
#[command(name = "fossflow", author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Undo depth per store; overrides FOSSFLOW_HISTORY_LIMIT
    #[arg(long, global = true)]
    pub history_limit: Option<usize>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Import a document and print the state summary as JSON
    Inspect { input: PathBuf },
    /// Import a document and report validation issues
    Validate { input: PathBuf },
    /// Import, export and compare element counts; writes the exported JSON
    Roundtrip {
        input: PathBuf,
        /// Write the exported document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the JSON schema of the document format
    Schema,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("round trip changed element counts (before={before:?}, after={after:?})")]
    CountMismatch {
        before: DocumentCounts,
        after: DocumentCounts,
    },
}

impl Args {
    /// Engine settings from the environment, with command-line overrides applied.
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::from_env();
        match self.history_limit {
            Some(limit) => config.with_history_limit(limit),
            None => config,
        }
    }
}

/// Runs the selected subcommand, writing results to `out`.
///
/// # Errors
///
/// Returns `CliError` for unreadable input, invalid documents, count mismatches after a
/// round trip, and output failures.
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let config = args.engine_config();
    debug!(history_limit = config.history_limit; "engine configured");

    match &args.command {
        Command::Inspect { input } => {
            let workspace = load(input, config)?;
            let summary = serde_json::to_string_pretty(&workspace.state())?;
            writeln!(out, "{summary}")?;
        }
        Command::Validate { input } => {
            let workspace = load(input, config)?;
            let counts = workspace.export_document().counts();
            writeln!(
                out,
                "ok: {} items, {} views, {} connectors, {} rectangles, {} text boxes",
                counts.items, counts.views, counts.connectors, counts.rectangles, counts.text_boxes
            )?;
        }
        Command::Roundtrip { input, output } => {
            let text = read_input(input)?;
            let before = Document::from_json(&text)?.counts();

            let mut workspace = Workspace::new(config);
            workspace.import_json(&text)?;
            let exported = workspace.export_document();
            let after = exported.counts();
            if before != after {
                return Err(CliError::CountMismatch { before, after });
            }

            let json = exported.to_json_pretty()?;
            match output {
                Some(path) => {
                    fs::write(path, format!("{json}\n")).map_err(|source| CliError::Write {
                        path: path.clone(),
                        source,
                    })?;
                    info!(output:% = path.display(); "round trip written");
                }
                None => writeln!(out, "{json}")?,
            }
        }
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&document_schema())?;
            writeln!(out, "{schema}")?;
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load(path: &Path, config: EngineConfig) -> Result<Workspace, CliError> {
    let text = read_input(path)?;
    let mut workspace = Workspace::new(config);
    workspace.import_json(&text)?;
    info!(input:% = path.display(); "document loaded");
    Ok(workspace)
}

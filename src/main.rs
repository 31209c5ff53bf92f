// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of fossflow-state and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `fossflow` CLI entrypoint.

use std::io;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, LevelFilter};

use fossflow_state::{Args, CliError};

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(args:?; "parsed arguments");

    let mut stdout = io::stdout().lock();
    if let Err(err) = fossflow_state::run(&args, &mut stdout) {
        eprintln!("error: {err}");
        if let CliError::Validation(validation) = &err {
            for issue in validation.issues() {
                eprintln!("  - {issue}");
            }
        }
        process::exit(1);
    }
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Log output setup.
//!
//! The terminal UI owns stdout and stderr while it runs, so log lines go to
//! a file. Without a configured file no subscriber is installed and the
//! `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::LoggingConfig;

/// Install the global subscriber. Returns whether logging is active.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };
    let level = config.level()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(true)
}

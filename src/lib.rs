//! # Context Statusline
//!
//! A tiny statusline for assistant coding sessions: how much of the context
//! window the latest turn used, the current git branch, and the directory.
//!
//! ## Overview
//!
//! The shell pipes a JSON session descriptor on stdin. The transcript it
//! points at is scanned from the end for the last assistant usage record,
//! the total is expressed as a percentage of the context limit, and one line
//! such as `42% | main | my-project` is printed.
//!
//! ## Features
//!
//! - `git` (default): Branch lookup through the `git` executable
//! - `colors` (default): Colored `--debug` report via owo-colors

use anyhow::{Context, Result, bail};

/// Command-line argument parsing and configuration
pub mod cli;

/// Display formatting for text and JSON output
pub mod display;

/// Git branch lookup (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Data models for the hook payload and transcript lines
pub mod models;

/// Per-invocation summary of everything shown
pub mod summary;

/// Transcript scanning and context percentage
pub mod usage;

/// Utility functions and shared constants
pub mod utils;

use models::HookJson;

/// Parses the stdin payload. Anything but a JSON object is an error.
pub fn parse_hook(input: &[u8]) -> Result<HookJson> {
    let value: serde_json::Value = serde_json::from_slice(input).context("parse hook json")?;
    if !value.is_object() {
        bail!("hook json must be an object");
    }
    serde_json::from_value(value).context("parse hook json")
}

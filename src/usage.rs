//! # Usage Module
//!
//! Reads the session transcript (JSON lines, one turn per line) and extracts
//! the token usage of the most recent assistant turn, which is what the model
//! currently holds in its context window.

use std::fs;
use std::path::Path;

use crate::models::{MessageUsage, TranscriptLine};

/// Usage of the bottom-most assistant turn in `transcript_path`.
///
/// Returns `None` when the path is empty, the file is missing or unreadable,
/// or no line carries assistant usage. Lines that are not valid JSON are
/// skipped.
pub fn last_usage_in_transcript(transcript_path: &str) -> Option<MessageUsage> {
    if transcript_path.is_empty() {
        return None;
    }
    let path = Path::new(transcript_path);
    if !path.is_file() {
        return None;
    }
    let contents = fs::read_to_string(path).ok()?;
    last_usage_in_lines(&contents)
}

/// Scans `contents` from the end and returns the first assistant usage found.
pub fn last_usage_in_lines(contents: &str) -> Option<MessageUsage> {
    contents.lines().rev().find_map(|line| {
        let t = line.trim();
        if t.is_empty() {
            return None;
        }
        serde_json::from_str::<TranscriptLine>(t)
            .ok()?
            .assistant_usage()
    })
}

/// Total context tokens, 0 when no usage record was found.
pub fn context_tokens(usage: Option<&MessageUsage>) -> i64 {
    usage.map(MessageUsage::total).unwrap_or(0)
}

/// Percentage of `limit` used by `tokens`, truncated toward zero.
/// A zero limit yields 0.
pub fn context_percent(tokens: i64, limit: u64) -> i64 {
    if limit == 0 {
        return 0;
    }
    let pct = i128::from(tokens) * 100 / i128::from(limit);
    pct.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

//! Everything the statusline shows, gathered once per invocation.

use std::path::Path;

use crate::models::{HookJson, MessageUsage};
use crate::usage::{context_percent, context_tokens, last_usage_in_transcript};
use crate::utils::dir_basename;

#[derive(Debug, Clone)]
pub struct Summary {
    pub current_dir: String,
    pub transcript_path: String,
    /// Usage of the most recent assistant turn, if any was found
    pub usage: Option<MessageUsage>,
    pub context_tokens: i64,
    pub context_limit: u64,
    pub percent: i64,
    pub branch: Option<String>,
}

impl Summary {
    /// Reads the transcript and asks git for the branch. Both steps degrade to
    /// "nothing found" on any failure.
    pub fn collect(hook: &HookJson, context_limit: u64) -> Self {
        let current_dir = hook.current_dir();
        let branch = if current_dir.is_empty() {
            None
        } else {
            branch_for(Path::new(current_dir))
        };
        Self::from_parts(
            hook,
            last_usage_in_transcript(hook.transcript_path()),
            branch,
            context_limit,
        )
    }

    pub fn from_parts(
        hook: &HookJson,
        usage: Option<MessageUsage>,
        branch: Option<String>,
        context_limit: u64,
    ) -> Self {
        let tokens = context_tokens(usage.as_ref());
        Self {
            current_dir: hook.current_dir().to_string(),
            transcript_path: hook.transcript_path().to_string(),
            usage,
            context_tokens: tokens,
            context_limit,
            percent: context_percent(tokens, context_limit),
            branch: branch.filter(|b| !b.is_empty()),
        }
    }

    pub fn dirname(&self) -> Option<&str> {
        Some(dir_basename(&self.current_dir)).filter(|d| !d.is_empty())
    }
}

#[cfg(feature = "git")]
fn branch_for(dir: &Path) -> Option<String> {
    crate::git::current_branch(dir)
}

#[cfg(not(feature = "git"))]
fn branch_for(_dir: &Path) -> Option<String> {
    None
}

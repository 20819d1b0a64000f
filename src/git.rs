//! # Git Module
//!
//! Looks up the checked-out branch by running `git branch --show-current`
//! inside the session's working directory.

use std::path::Path;
use std::process::{Command, Stdio};

/// Current branch name for the repository containing `dir`.
///
/// `None` when the directory does not exist, `git` cannot be launched, the
/// command exits non-zero (not a repository), or HEAD is detached.
pub fn current_branch(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["branch", "--show-current"])
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() { None } else { Some(branch) }
}

use anyhow::Result;
use serde_json::{Value, json};

#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

// Provide a no-op color shim when "colors" feature is disabled
#[cfg(not(feature = "colors"))]
mod color_shim {
    pub trait ColorizeShim {
        fn as_str(&self) -> &str;

        fn bright_black(&self) -> String {
            self.as_str().to_string()
        }
        fn cyan(&self) -> String {
            self.as_str().to_string()
        }
        fn dimmed(&self) -> String {
            self.as_str().to_string()
        }
    }

    impl ColorizeShim for &str {
        fn as_str(&self) -> &str {
            self
        }
    }
    impl ColorizeShim for String {
        fn as_str(&self) -> &str {
            String::as_str(self)
        }
    }
}
#[cfg(not(feature = "colors"))]
use color_shim::ColorizeShim as OwoColorize;

use crate::summary::Summary;
use crate::utils::SEGMENT_SEPARATOR;

/// `"<pct>%"`, then the branch and the directory name when present.
pub fn build_segments(percent: i64, branch: Option<&str>, dirname: Option<&str>) -> Vec<String> {
    let mut parts = vec![format!("{percent}%")];
    if let Some(b) = branch.filter(|b| !b.is_empty()) {
        parts.push(b.to_string());
    }
    if let Some(d) = dirname.filter(|d| !d.is_empty()) {
        parts.push(d.to_string());
    }
    parts
}

pub fn format_statusline(summary: &Summary) -> String {
    build_segments(summary.percent, summary.branch.as_deref(), summary.dirname())
        .join(SEGMENT_SEPARATOR)
}

pub fn build_json_output(summary: &Summary) -> Value {
    let usage = summary.usage.unwrap_or_default();
    json!({
        "cwd": summary.current_dir,
        "dirname": summary.dirname(),
        "transcript_path": summary.transcript_path,
        "context": {
            "tokens": summary.context_tokens,
            "limit": summary.context_limit,
            "percent": summary.percent,
            "input_tokens": usage.input_tokens,
            "cache_creation_input_tokens": usage.cache_creation_input_tokens,
            "cache_read_input_tokens": usage.cache_read_input_tokens,
            "output_tokens": usage.output_tokens,
        },
        "git": {
            "branch": summary.branch,
        },
        "statusline": format_statusline(summary),
    })
}

pub fn print_text_output(summary: &Summary) {
    println!("{}", format_statusline(summary));
}

pub fn print_json_output(summary: &Summary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&build_json_output(summary))?);
    Ok(())
}

pub fn print_debug(summary: &Summary) {
    let transcript_state = if summary.transcript_path.is_empty() {
        "unset"
    } else if std::path::Path::new(&summary.transcript_path).is_file() {
        "found"
    } else {
        "missing"
    };
    eprintln!();
    eprintln!("{}", "=== Debug Information ===".bright_black());
    eprintln!(
        "Transcript: {} ({})",
        summary.transcript_path.cyan(),
        transcript_state
    );
    match summary.usage {
        Some(u) => eprintln!(
            "Last usage: input={} cache_create={} cache_read={} output={}",
            u.input_tokens,
            u.cache_creation_input_tokens,
            u.cache_read_input_tokens,
            u.output_tokens
        ),
        None => eprintln!("Last usage: {}", "none".dimmed()),
    }
    eprintln!(
        "Context: {} tokens of {} ({}%)",
        summary.context_tokens, summary.context_limit, summary.percent
    );
    eprintln!(
        "Workspace: {}",
        if summary.current_dir.is_empty() { "(none)" } else { summary.current_dir.as_str() }
    );
    eprintln!("Git: branch={}", summary.branch.as_deref().unwrap_or("(none)"));
    eprintln!("{}", "========================".bright_black());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_skip_empty_values() {
        assert_eq!(build_segments(7, None, None), vec!["7%"]);
        assert_eq!(build_segments(7, Some(""), Some("")), vec!["7%"]);
        assert_eq!(
            build_segments(7, None, Some("proj")).join(SEGMENT_SEPARATOR),
            "7% | proj"
        );
        assert_eq!(
            build_segments(1, Some("main"), Some("proj")).join(SEGMENT_SEPARATOR),
            "1% | main | proj"
        );
    }
}

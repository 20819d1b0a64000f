use std::env;

use crate::utils::DEFAULT_CONTEXT_LIMIT;

#[derive(clap::Parser, Debug)]
#[command(about = "Print a one-line context usage summary for an assistant session")]
pub struct Args {
    /// Context window size in tokens; the percentage is relative to it (0 disables).
    /// Falls back to CLAUDE_CONTEXT_LIMIT, then 200000
    #[arg(long)]
    pub context_limit: Option<u64>,

    /// Emit JSON instead of the plain text line
    #[arg(long)]
    pub json: bool,

    /// Debug mode: show detailed calculation information on stderr
    #[arg(long, env = "CLAUDE_DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }

    /// Flag wins; an unparsable CLAUDE_CONTEXT_LIMIT is ignored.
    pub fn context_limit(&self) -> u64 {
        if let Some(limit) = self.context_limit {
            return limit;
        }
        if let Ok(limit) = env::var("CLAUDE_CONTEXT_LIMIT")
            .and_then(|s| s.trim().parse::<u64>().map_err(|_| env::VarError::NotPresent))
        {
            return limit;
        }
        DEFAULT_CONTEXT_LIMIT
    }
}

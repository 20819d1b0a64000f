use anyhow::{Context, Result};

use context_statusline::cli::Args;
use context_statusline::display::{print_debug, print_json_output, print_text_output};
use context_statusline::parse_hook;
use context_statusline::summary::Summary;
use context_statusline::utils::read_stdin;

fn main() -> Result<()> {
    let args = Args::parse();
    let stdin = read_stdin().context("read stdin")?;
    let hook = parse_hook(&stdin)?;

    let summary = Summary::collect(&hook, args.context_limit());

    if args.json {
        print_json_output(&summary)?;
    } else {
        print_text_output(&summary);
    }

    if args.debug {
        print_debug(&summary);
    }
    Ok(())
}

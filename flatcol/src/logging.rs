use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::Args;

pub fn init_logging(args: &Args) -> Result<()> {
    let filter = parse_filter(&args.log_level)?;

    let builder = tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(!args.log_no_ansi);

    if args.log_json {
        builder.json().init();
    } else {
        builder.compact().init();
    }

    Ok(())
}

/// Parses the `--log-level` directives, for example `info,flatcol_core=trace`.
fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::from_str(directives)
        .with_context(|| format!("Parse log level {directives:?}"))
}

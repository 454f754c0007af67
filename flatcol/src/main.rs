mod commands;
mod logging;
mod payload;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::logging::init_logging;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Parser)]
#[command(version, about)]
/// flatcol, nested values in, flat columns out.
///
/// Runs synthetic payloads through the column codec to check round trips
/// and inspect the resulting column layout.
pub struct Args {
    #[arg(long, env = "FLATCOL_LOG_LEVEL", default_value = "info")]
    /// Set the log level.
    ///
    /// This can filter on various levels, for example `info,flatcol_core=debug`
    /// will display all logs at `info` level severity and above, and session
    /// details from the codec itself.
    log_level: String,
    #[arg(long, env = "FLATCOL_LOG_JSON")]
    /// Emit logs in JSON format rather than as plain text.
    log_json: bool,
    #[arg(long, env = "FLATCOL_LOG_NO_ANSI")]
    /// Disable ANSI colour codes being present in the logs.
    log_no_ansi: bool,
    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args).context("Init logging")?;

    info!("flatcol v{}", env!("CARGO_PKG_VERSION"));

    args.command.display_startup_message();
    args.command.execute()
}

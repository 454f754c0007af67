use anyhow::{bail, Context, Result};
use clap::Subcommand;
use flatcol_core::{
    ColumnStore, ExchangeSession, LocalTransport, MsgpackTransport, PrimitiveKind,
    SessionOptions, Transport,
};
use tracing::{info, warn};

use crate::payload::Payload;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Round trip a synthetic payload and verify the decoded copy matches
    Check {
        #[arg(long, env = "FLATCOL_OUTER", default_value_t = 10)]
        /// The number of rows in the payload.
        outer: usize,
        #[arg(long, env = "FLATCOL_INNER", default_value_t = 5)]
        /// The number of values in each row.
        inner: usize,
        #[arg(long, default_value_t = 1)]
        /// The number of participants to gather payloads from.
        ///
        /// Each participant contributes its own payload, the columns of every
        /// participant are concatenated before decoding.
        participants: usize,
        #[arg(long)]
        /// Send the columns through a MessagePack buffer rather than
        /// passing them straight through.
        msgpack: bool,
    },
    /// Print the column layout of a synthetic payload
    Layout {
        #[arg(long, env = "FLATCOL_OUTER", default_value_t = 10)]
        /// The number of rows in the payload.
        outer: usize,
        #[arg(long, env = "FLATCOL_INNER", default_value_t = 5)]
        /// The number of values in each row.
        inner: usize,
    },
}

impl Commands {
    /// Triggers any additional startup messages which are aware
    /// of the provided subcommand.
    pub fn display_startup_message(&self) {
        match self {
            Commands::Check {
                outer,
                inner,
                participants,
                msgpack,
            } => {
                info!(outer, inner, participants, msgpack, "Checking payload round trip");
            },
            Commands::Layout { outer, inner } => {
                info!(outer, inner, "Inspecting payload layout");
            },
        }
    }

    /// Executes the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Check {
                outer,
                inner,
                participants,
                msgpack,
            } => {
                let cells = outer
                    .checked_mul(inner)
                    .context("Payload size overflows the column capacity")?;
                let participants = i64::try_from(participants.max(1))
                    .context("Too many participants")?;
                let payloads = (0..participants)
                    .map(|seed| Payload::generate(seed, outer, inner))
                    .collect::<Result<Vec<_>>>()
                    .context("Generate payloads")?;

                let options = SessionOptions::builder()
                    .capacity_hint(cells)
                    .require_exhausted(true)
                    .build();

                if msgpack {
                    check(ExchangeSession::new(MsgpackTransport, options), &payloads)
                } else {
                    check(ExchangeSession::new(LocalTransport, options), &payloads)
                }
            },
            Commands::Layout { outer, inner } => {
                let payload = Payload::generate(0, outer, inner).context("Generate payload")?;
                let store = ColumnStore::from_value(&payload);
                print_layout(&store);
                Ok(())
            },
        }
    }
}

fn check<X: Transport>(session: ExchangeSession<X>, payloads: &[Payload]) -> Result<()> {
    let decoded = if let [payload] = payloads {
        vec![session.exchange(payload).context("Exchange payload")?]
    } else {
        session.gather(payloads).context("Gather payloads")?
    };

    let mismatched = payloads
        .iter()
        .zip(&decoded)
        .filter(|(sent, received)| sent != received)
        .count();
    if mismatched > 0 {
        warn!(mismatched, "Decoded payloads differ from the originals");
        bail!("{mismatched} of {} payloads did not round trip", payloads.len());
    }

    info!(participants = payloads.len(), "All payloads round tripped");
    Ok(())
}

fn print_layout(store: &ColumnStore) {
    let shape = store.shape();
    println!("{:<8} {:>10} {:>12}", "column", "values", "bytes");
    for kind in PrimitiveKind::ALL {
        println!(
            "{:<8} {:>10} {:>12}",
            kind,
            shape.get(kind),
            store.column_bytes(kind).len(),
        );
    }
    println!("{:<8} {:>10} {:>12}", "total", shape.total(), shape.total_bytes());
}

//! Platinum Rift match binary.
//!
//! Reads the match setup and one observation per turn from stdin, writes two
//! command lines per turn to stdout. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! RUST_LOG=rift_runtime=debug RIFT_REPORT_TURNS=true cargo run -p rift-client < match.txt
//! ```
mod config;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use rift_core::RiftError;
use rift_runtime::{ProtocolReader, Runtime, write_commands};

use config::BotConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = BotConfig::from_env();
    tracing::info!(
        pod_price = config.runtime.engine.pod_price,
        attrition = %config.runtime.engine.attrition,
        report_turns = config.runtime.report_turns,
        "starting overmind"
    );

    let stdin = io::stdin();
    let mut reader = ProtocolReader::new(stdin.lock());
    let mut output = BufWriter::new(io::stdout().lock());

    let setup = reader.read_setup().context("failed to read match setup")?;
    let mut runtime = Runtime::builder()
        .config(config.runtime)
        .setup(setup.clone())
        .build()
        .context("failed to build runtime")?;

    while let Some(observation) = reader
        .read_turn(&setup)
        .with_context(|| format!("failed to read turn {}", runtime.turn() + 1))?
    {
        let outcome = runtime
            .play_turn(&observation)
            .inspect_err(|err| {
                tracing::error!(
                    code = err.error_code(),
                    severity = %err.severity(),
                    "turn rejected"
                )
            })
            .with_context(|| format!("failed to play turn {}", runtime.turn()))?;

        write_commands(&mut output, &outcome.commands).context("failed to write commands")?;

        if let Some(report) = outcome.report {
            tracing::debug!(report = %report.to_json()?, "turn report");
        }
    }

    tracing::info!(turns = runtime.turn(), "match over");
    Ok(())
}

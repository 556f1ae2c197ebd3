//! Outcome playground entry point.
//!
//! This binary is the composition root for the demos. Responsibilities:
//!
//! 1. **Parse configuration**: flags and `PLAYGROUND_*` environment
//!    variables via `clap`.
//! 2. **Wire observability**: install `tracing-subscriber` with an
//!    `EnvFilter` and a pretty or JSON layer on stderr. All `tracing` spans
//!    and events emitted by the workspace crates flow through it.
//! 3. **Construct the source**: an [`http_source::HttpSource`] built from
//!    [`http_source::ClientConfig`], or a [`simulated::SimulatedSource`] when
//!    `--simulate` is given.
//! 4. **Run the selected demo**: see [`commands`].

use anyhow::{Context, Result};
use clap::Parser;
use http_source::{ClientConfig, HttpSource};

mod cli;
mod commands;
mod handling;
mod observability;
mod simulated;
mod team;

use cli::Cli;
use simulated::SimulatedSource;

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.log_format)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.simulate {
        Some(scenario) => {
            tracing::info!(?scenario, "using simulated source");
            commands::run(&SimulatedSource::new(scenario), &cli.command, &mut out)
        }
        None => {
            let config = ClientConfig {
                base_url: cli.base_url,
                token: cli.token,
                timeout_secs: cli.timeout_secs,
                ..ClientConfig::default()
            };
            let source = HttpSource::new(config).context("failed to set up HTTP source")?;
            commands::run(&source, &cli.command, &mut out)
        }
    }
}

//! Console runner for the piece supply (default binary).
//!
//! Renders the upcoming queue and the reserve stack, reads one menu selection
//! per line from stdin and applies it. Logs go to stderr; set `RUST_LOG=debug`
//! to trace every operation.

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::info;

use piece_supply::config::DriverConfig;
use piece_supply::core::PieceSupply;
use piece_supply::driver::{run_session, OutputMode};
use piece_supply::term::ConsoleRenderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = DriverConfig::from_args(&args)?.with_env(|key| std::env::var(key).ok())?;

    let seed = config.resolve_seed();
    info!(seed, json = config.json, "starting session");

    let stdout = io::stdout();
    let color = config.color && !config.json && stdout.is_terminal();
    let mut renderer = ConsoleRenderer::new(stdout.lock(), color);
    let mode = if config.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let mut supply = PieceSupply::with_seed(seed);
    run_session(&mut supply, io::stdin().lock(), &mut renderer, mode)?;
    Ok(())
}

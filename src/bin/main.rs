use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use forward_core::Forwarder;
use hid_forward::{Cli, GamepadCycle, Mode, MouseWave, Transport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let endpoint = cli.link.endpoint()?;
    let transport = Transport::open(&endpoint)?;
    info!(?endpoint, interval_ms = cli.interval_ms, "transport ready");

    let interval = Duration::from_millis(cli.interval_ms);
    let never = match cli.mode {
        // Mouse deltas change every tick, so dedup would never trigger.
        Mode::MouseWave => Forwarder::new(MouseWave::new(), transport)
            .with_dedup(false)
            .run(interval)?,
        Mode::GamepadCycle => Forwarder::new(GamepadCycle::new(), transport).run(interval)?,
    };
    match never {}
}

//! Algotrace exporter
//!
//! Run one engine on its sample input and print the trace as JSON.

use algotrace_vis::{Report, VisConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algotrace=info,algotrace_vis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage: algotrace [algorithm] [start]
    let config = VisConfig::from_env()?.with_args(env::args().skip(1))?;
    tracing::info!(
        algorithm = %config.algorithm,
        start = config.start.index(),
        speed = config.speed.name(),
        "Starting run"
    );

    let report = Report::build(config)?;
    tracing::info!(
        frames = report.frames,
        duration_ms = ?report.duration_ms,
        "Replay complete"
    );

    println!("{}", report.to_json()?);
    Ok(())
}

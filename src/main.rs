//! Creator Pulse - Entry Point
//!
//! Loads configuration, builds the simulator, connects the event sink and
//! runs the tick loop until interrupted.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use creator_pulse::core::config::Args;
use creator_pulse::core::error::Result;
use creator_pulse::driver::{self, RunOptions};
use creator_pulse::publish::{EventSink, LogSink, NatsSink};
use creator_pulse::PlatformSimulator;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("creator_pulse={},info", args.log_level))),
        )
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        return Err(e);
    }

    info!("Creator Pulse starting...");
    info!("  Broker: {}", if args.dry_run { "(dry run)" } else { args.broker_url.as_str() });
    info!("  Content topic: {}", args.content_topic);
    info!("  Creator topic: {}", args.creator_topic);
    info!("  Creators: {}", args.num_creators);
    info!("  Interval: {}ms", args.interval_ms);
    info!("  Abnormal probability: {:.2}", args.abnormal_probability);
    if let Some(seed) = args.seed {
        info!("  Seed: {}", seed);
    }

    let mut sim = PlatformSimulator::initialize(&args.simulation())?;
    driver::log_population(&sim.creators());

    let sink: Box<dyn EventSink> = if args.dry_run {
        Box::new(LogSink::new())
    } else {
        let nats = NatsSink::connect(
            &args.broker_url,
            args.broker_user.as_deref(),
            args.broker_password.as_deref(),
        )
        .await
        .map_err(|e| {
            error!("Failed to create publisher: {}", e);
            e
        })?;
        Box::new(nats)
    };

    let options = RunOptions {
        interval: args.interval(),
        stats_every: args.stats_every,
        max_cycles: args.max_cycles,
    };

    info!("Press Ctrl+C to stop gracefully");
    driver::run(
        &mut sim,
        sink.as_ref(),
        &args.topics(),
        &options,
        driver::shutdown_signal(),
    )
    .await;

    sink.close().await;
    info!("Shutdown complete");
    Ok(())
}

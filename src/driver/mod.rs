//! Tick loop
//!
//! Pulls one round of content and creator updates from the simulator per
//! interval and hands them to an [`EventSink`]. A failed publish drops that
//! tick's records and the loop carries on.

pub mod stats;

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::core::clock::Clock;
use crate::core::config::Topics;
use crate::core::error::Result;
use crate::model::Creator;
use crate::publish::{encode_batch, EventSink};
use crate::simulation::PlatformSimulator;

pub use stats::Statistics;

/// Creators listed individually at startup
const SAMPLE_CREATORS: usize = 3;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub interval: Duration,
    /// Cycles between periodic statistics reports
    pub stats_every: u64,
    /// Stop after this many cycles; `None` runs until shutdown
    pub max_cycles: Option<u64>,
}

/// Run one simulation cycle and publish its output as a single batch
pub async fn run_cycle<C, S>(
    sim: &mut PlatformSimulator<C>,
    sink: &S,
    topics: &Topics,
    stats: &mut Statistics,
) -> Result<()>
where
    C: Clock,
    S: EventSink + ?Sized,
{
    let contents = sim.generate_content();
    let creators = sim.generate_creator_updates();

    stats.cycles += 1;
    stats.last_content_count = contents.len();
    stats.last_creator_count = creators.len();

    if contents.is_empty() && creators.is_empty() {
        return Ok(());
    }

    let published = match encode_batch(topics, &contents, &creators) {
        Ok(records) => sink.publish_batch(records).await,
        Err(e) => Err(e),
    };
    if let Err(e) = published {
        stats.publish_errors += 1;
        return Err(e);
    }

    stats.content_published += contents.len() as u64;
    stats.creator_updates += creators.len() as u64;

    info!(
        content = contents.len(),
        creators = creators.len(),
        "Published events"
    );
    if let Some(sample) = contents.first() {
        debug!(
            "Sample content: '{}' by {} ({}) - {} views, {} likes",
            sample.title, sample.creator_id, sample.kind, sample.view_count, sample.like_count
        );
    }

    Ok(())
}

/// Drive the simulator until `shutdown` resolves or `max_cycles` is reached
///
/// Ticks that fall behind are skipped rather than replayed in a burst.
pub async fn run<C, S, F>(
    sim: &mut PlatformSimulator<C>,
    sink: &S,
    topics: &Topics,
    options: &RunOptions,
    shutdown: F,
) -> Statistics
where
    C: Clock,
    S: EventSink + ?Sized,
    F: Future<Output = ()>,
{
    let mut stats = Statistics::new();
    let mut ticker = interval_at(Instant::now() + options.interval, options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    info!("Starting simulation loop (interval {:?})", options.interval);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = run_cycle(sim, sink, topics, &mut stats).await {
                    warn!("Error in simulation cycle: {}", e);
                }

                if options.stats_every > 0 && stats.cycles % options.stats_every == 0 {
                    stats.report_periodic();
                }

                if options.max_cycles.is_some_and(|max| stats.cycles >= max) {
                    info!("Reached {} cycles", stats.cycles);
                    break;
                }
            }
        }
    }

    stats.report_final();
    stats
}

/// Resolves on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}

/// Startup diagnostics: a few sample creators and the population size
pub fn log_population(creators: &[Creator]) {
    info!("Created {} creators", creators.len());

    for creator in creators.iter().take(SAMPLE_CREATORS) {
        info!(
            "  - {} ({}): {} subscribers, ${:.2}/month, {}",
            creator.username,
            creator.display_name,
            creator.subscriber_count,
            creator.monthly_price,
            creator.category
        );
    }

    if creators.len() > SAMPLE_CREATORS {
        info!("  ... and {} more creators", creators.len() - SAMPLE_CREATORS);
    }
}

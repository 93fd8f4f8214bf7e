//! Runtime statistics for the publish loop

use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone)]
pub struct Statistics {
    pub started_at: Instant,
    pub cycles: u64,
    pub content_published: u64,
    pub creator_updates: u64,
    pub publish_errors: u64,
    pub last_content_count: usize,
    pub last_creator_count: usize,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            cycles: 0,
            content_published: 0,
            creator_updates: 0,
            publish_errors: 0,
            last_content_count: 0,
            last_creator_count: 0,
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn total_events(&self) -> u64 {
        self.content_published + self.creator_updates
    }

    /// Events per minute of uptime, `None` before the first minute has any length
    pub fn events_per_minute(&self, events: u64) -> Option<f64> {
        let minutes = self.uptime().as_secs_f64() / 60.0;
        (minutes > 0.0).then(|| events as f64 / minutes)
    }

    /// Share of cycles that published without error, as a percentage
    pub fn success_rate(&self) -> Option<f64> {
        (self.cycles > 0).then(|| {
            self.cycles.saturating_sub(self.publish_errors) as f64 / self.cycles as f64 * 100.0
        })
    }

    pub fn report_periodic(&self) {
        let uptime = Duration::from_secs(self.uptime().as_secs());
        let content_rate = self.events_per_minute(self.content_published).unwrap_or(0.0);
        let creator_rate = self.events_per_minute(self.creator_updates).unwrap_or(0.0);

        info!("=== Statistics (uptime {:?}) ===", uptime);
        info!("Cycles: {}", self.cycles);
        info!("Content published: {} ({:.1}/min)", self.content_published, content_rate);
        info!("Creator updates: {} ({:.1}/min)", self.creator_updates, creator_rate);
        info!("Publish errors: {}", self.publish_errors);
        info!(
            "Last cycle: {} content, {} creators",
            self.last_content_count, self.last_creator_count
        );
    }

    pub fn report_final(&self) {
        let uptime = Duration::from_secs(self.uptime().as_secs());

        info!("=== Final statistics ===");
        info!("Total uptime: {:?}", uptime);
        info!("Total cycles: {}", self.cycles);
        info!("Content published: {}", self.content_published);
        info!("Creator updates: {}", self.creator_updates);
        info!("Total events: {}", self.total_events());
        info!("Publish errors: {}", self.publish_errors);

        if let Some(rate) = self.events_per_minute(self.total_events()) {
            info!("Average events/min: {:.1}", rate);
        }
        if let Some(rate) = self.success_rate() {
            info!("Success rate: {:.2}%", rate);
        }
    }
}

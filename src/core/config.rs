//! Runtime configuration
//!
//! Values come from command-line flags with environment-variable fallbacks,
//! so the publisher can be configured entirely through its container
//! environment.

use std::time::Duration;

use clap::Parser;

use crate::core::error::{PulseError, Result};

/// Shortest tick interval the driver accepts
pub const MIN_INTERVAL_MS: u64 = 100;

/// Parameters of the simulation engine itself
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of creators, fixed for the lifetime of the engine
    pub creator_count: usize,

    /// Per-tick chance that a creator's posting likelihood is multiplied
    /// into a posting spree
    ///
    /// At 0.0 creators post on their natural cadence. At 1.0 every eligible
    /// creator posts on the first tick past its hard floor.
    pub abnormal_probability: f64,

    /// RNG seed; `None` seeds from OS entropy and runs are not reproducible
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            creator_count: 10,
            abnormal_probability: 0.8,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(creator_count: usize, abnormal_probability: f64, seed: Option<u64>) -> Self {
        Self {
            creator_count,
            abnormal_probability,
            seed,
        }
    }

    /// Reject parameters the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.creator_count == 0 {
            return Err(PulseError::InvalidConfig(
                "NUM_CREATORS must be greater than 0".into(),
            ));
        }

        // NaN fails both comparisons, so test the accepted range directly.
        if !(0.0..=1.0).contains(&self.abnormal_probability) {
            return Err(PulseError::InvalidConfig(format!(
                "ABNORMAL_PROBABILITY must be between 0 and 1, got {}",
                self.abnormal_probability
            )));
        }

        Ok(())
    }
}

/// Destination topics for the two event streams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topics {
    pub content: String,
    pub creator: String,
}

/// Creator Pulse - synthetic creator/content event publisher
#[derive(Parser, Debug, Clone)]
#[command(name = "creator-pulse")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Message bus URL
    #[arg(long, env = "BROKER_URL", default_value = "nats://127.0.0.1:4222")]
    pub broker_url: String,

    /// Broker username (optional)
    #[arg(long, env = "BROKER_USER")]
    pub broker_user: Option<String>,

    /// Broker password (optional)
    #[arg(long, env = "BROKER_PASSWORD")]
    pub broker_password: Option<String>,

    /// Topic that receives content posts
    #[arg(long, env = "CONTENT_TOPIC", default_value = "content")]
    pub content_topic: String,

    /// Topic that receives creator profile updates
    #[arg(long, env = "CREATOR_TOPIC", default_value = "creator")]
    pub creator_topic: String,

    /// Number of simulated creators
    #[arg(long, env = "NUM_CREATORS", default_value_t = 10)]
    pub num_creators: i64,

    /// Tick interval in milliseconds
    #[arg(long, env = "INTERVAL_MS", default_value_t = 1000)]
    pub interval_ms: u64,

    /// Per-tick probability of a posting spree (0.0-1.0)
    #[arg(long, env = "ABNORMAL_PROBABILITY", default_value_t = 0.8)]
    pub abnormal_probability: f64,

    /// Random seed for reproducible runs. When omitted, OS entropy is used.
    #[arg(long, env = "SEED")]
    pub seed: Option<u64>,

    /// Log events instead of publishing them
    #[arg(long, env = "DRY_RUN", default_value_t = false)]
    pub dry_run: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Cycles between periodic statistics reports
    #[arg(long, env = "STATS_EVERY", default_value_t = 60)]
    pub stats_every: u64,

    /// Stop after this many cycles instead of running until a signal
    #[arg(long, env = "MAX_CYCLES")]
    pub max_cycles: Option<u64>,
}

impl Args {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_creators <= 0 {
            return Err(PulseError::InvalidConfig(
                "NUM_CREATORS must be greater than 0".into(),
            ));
        }

        if self.interval_ms < MIN_INTERVAL_MS {
            return Err(PulseError::InvalidConfig(format!(
                "INTERVAL_MS must be at least {}ms",
                MIN_INTERVAL_MS
            )));
        }

        if self.stats_every == 0 {
            return Err(PulseError::InvalidConfig(
                "STATS_EVERY must be greater than 0".into(),
            ));
        }

        if self.content_topic.trim().is_empty() {
            return Err(PulseError::InvalidConfig("CONTENT_TOPIC cannot be empty".into()));
        }

        if self.creator_topic.trim().is_empty() {
            return Err(PulseError::InvalidConfig("CREATOR_TOPIC cannot be empty".into()));
        }

        if !self.dry_run && self.broker_url.trim().is_empty() {
            return Err(PulseError::InvalidConfig("BROKER_URL cannot be empty".into()));
        }

        self.simulation().validate()
    }

    /// Engine parameters
    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig::new(
            usize::try_from(self.num_creators).unwrap_or(0),
            self.abnormal_probability,
            self.seed,
        )
    }

    pub fn topics(&self) -> Topics {
        Topics {
            content: self.content_topic.clone(),
            creator: self.creator_topic.clone(),
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

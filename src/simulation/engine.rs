//! The platform simulator
//!
//! Owns the authoritative creator store, the per-creator simulation state and
//! the random source. Callers pull content and profile updates once per tick;
//! the two generation calls must not run concurrently.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::model::{Content, Creator};
use crate::simulation::drift::drift_creator;
use crate::simulation::population::generate_population;
use crate::simulation::posting::should_post;
use crate::simulation::state::CreatorEntry;
use crate::simulation::synthesis::synthesize_content;

/// Per-tick chance that a creator's profile drifts
const UPDATE_PROBABILITY: f64 = 0.2;

pub struct PlatformSimulator<C: Clock = SystemClock> {
    entries: Vec<CreatorEntry>,
    abnormal_probability: f64,
    rng: ChaCha8Rng,
    clock: C,
}

impl PlatformSimulator<SystemClock> {
    /// Build a simulator on the wall clock
    pub fn initialize(config: &SimulationConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PlatformSimulator<C> {
    /// Build a simulator reading time from `clock`
    ///
    /// Fails when the population is empty or the abnormal probability lies
    /// outside [0, 1].
    pub fn with_clock(config: &SimulationConfig, clock: C) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let entries = generate_population(config.creator_count, clock.now(), &mut rng);

        info!(
            creators = entries.len(),
            abnormal_probability = config.abnormal_probability,
            seeded = config.seed.is_some(),
            "Platform simulator initialized"
        );

        Ok(Self {
            entries,
            abnormal_probability: config.abnormal_probability,
            rng,
            clock,
        })
    }

    /// Snapshot of the whole population
    pub fn creators(&self) -> Vec<Creator> {
        self.entries.iter().map(|e| e.creator.clone()).collect()
    }

    pub fn creator_count(&self) -> usize {
        self.entries.len()
    }

    pub fn abnormal_probability(&self) -> f64 {
        self.abnormal_probability
    }

    /// New posts for this tick, in creator order
    pub fn generate_content(&mut self) -> Vec<Content> {
        let now = self.clock.now();
        let mut content = Vec::new();

        for entry in &mut self.entries {
            if !should_post(&entry.state, now, self.abnormal_probability, &mut self.rng) {
                continue;
            }

            content.push(synthesize_content(&entry.creator, &entry.state, now, &mut self.rng));
            entry.state.last_post_at = now;
            entry.state.post_count += 1;
        }

        debug!(posts = content.len(), "Generated content");
        content
    }

    /// Drifted profiles for this tick, in creator order
    ///
    /// Each returned snapshot has already replaced the stored creator, so the
    /// next tick drifts from it.
    pub fn generate_creator_updates(&mut self) -> Vec<Creator> {
        let mut updates = Vec::new();

        for entry in &mut self.entries {
            if self.rng.gen::<f64>() >= UPDATE_PROBABILITY {
                continue;
            }

            let next = drift_creator(&entry.creator, &mut entry.state.subscriber_trend, &mut self.rng);
            entry.creator = next.clone();
            updates.push(next);
        }

        debug!(updates = updates.len(), "Generated creator updates");
        updates
    }
}

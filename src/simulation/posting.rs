//! Posting decision model
//!
//! Each tick, each creator gets one Bernoulli trial. The chance grows with
//! the time since the creator's last post relative to a base interval set by
//! its activity level:
//!
//! ```text
//! interval    = 2h + (1 - activity) * 46h
//! elapsed     < interval / 2  => never post
//! probability = elapsed / interval        (not capped at 1)
//! spree       => probability * 5
//! ```
//!
//! A probability at or above 1 always succeeds, so a creator on a spree with
//! a stale last post posts on every eligible tick.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::simulation::state::CreatorState;

/// Interval of a fully active creator, in hours
const MIN_INTERVAL_HOURS: f64 = 2.0;
/// Extra hours added across the activity range
const INTERVAL_SPAN_HOURS: f64 = 46.0;
/// Multiplier applied to the posting probability during a spree
pub const SPREE_MULTIPLIER: f64 = 5.0;

/// Base posting interval in hours for an activity level
pub fn base_interval_hours(activity_level: f64) -> f64 {
    MIN_INTERVAL_HOURS + (1.0 - activity_level) * INTERVAL_SPAN_HOURS
}

pub fn base_interval(activity_level: f64) -> Duration {
    Duration::milliseconds((base_interval_hours(activity_level) * 3_600_000.0) as i64)
}

/// Decide whether a creator posts at `now`
///
/// The hard floor consumes no randomness; past it, one draw decides the
/// spree and a second decides the post.
pub fn should_post(
    state: &CreatorState,
    now: DateTime<Utc>,
    abnormal_probability: f64,
    rng: &mut ChaCha8Rng,
) -> bool {
    let interval_hours = base_interval_hours(state.activity_level);
    let elapsed_hours = (now - state.last_post_at).num_milliseconds() as f64 / 3_600_000.0;

    if elapsed_hours < interval_hours / 2.0 {
        return false;
    }

    let mut probability = elapsed_hours / interval_hours;

    if rng.gen::<f64>() < abnormal_probability {
        probability *= SPREE_MULTIPLIER;
    }

    rng.gen::<f64>() < probability
}

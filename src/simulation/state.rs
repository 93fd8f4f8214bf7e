//! Per-creator simulation state

use chrono::{DateTime, Utc};

use crate::model::Creator;

/// Hidden modelling state for one creator
#[derive(Debug, Clone, PartialEq)]
pub struct CreatorState {
    /// Posting propensity in [0.2, 1.0], fixed at creation
    pub activity_level: f64,
    pub last_post_at: DateTime<Utc>,
    /// Fractional subscriber change applied per update, within [-0.05, 0.05]
    pub subscriber_trend: f64,
    /// Share of subscribers expected to view a post, in [0.05, 0.20], fixed at creation
    pub engagement_rate: f64,
    /// Posts authored so far; the next post's id uses the current value
    pub post_count: u64,
}

/// A creator and its state, stored together so they cannot drift apart
#[derive(Debug, Clone)]
pub struct CreatorEntry {
    pub creator: Creator,
    pub state: CreatorState,
}

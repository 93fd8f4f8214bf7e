//! Creator drift
//!
//! A slow random walk over the mutable parts of a profile. Subscriber counts
//! follow the creator's trend, and the trend itself occasionally wanders.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::model::Creator;
use crate::simulation::tables::{clamp, round_cents};

pub const MIN_MONTHLY_PRICE: f64 = 4.99;
pub const MAX_MONTHLY_PRICE: f64 = 99.99;
pub const MAX_TREND: f64 = 0.05;

const ONLINE_FLIP_PROBABILITY: f64 = 0.6;
const PRICE_CHANGE_PROBABILITY: f64 = 0.05;
/// Width of the uniform price change, centred on zero (±$5)
const PRICE_CHANGE_SPAN: f64 = 10.0;
const TREND_CHANGE_PROBABILITY: f64 = 0.1;
/// Width of the uniform trend nudge, centred on zero
const TREND_CHANGE_SPAN: f64 = 0.01;

/// Produce the next snapshot of `creator`, nudging `trend` in place
///
/// Subscriber growth uses the trend as it stood before this update.
pub fn drift_creator(creator: &Creator, trend: &mut f64, rng: &mut ChaCha8Rng) -> Creator {
    let mut next = creator.clone();

    let subscribers = next.subscriber_count as f64;
    next.subscriber_count = (subscribers + subscribers * *trend).trunc().max(0.0) as u64;

    if rng.gen::<f64>() < ONLINE_FLIP_PROBABILITY {
        next.is_online = !next.is_online;
    }

    if rng.gen::<f64>() < PRICE_CHANGE_PROBABILITY {
        let change = (rng.gen::<f64>() - 0.5) * PRICE_CHANGE_SPAN;
        next.monthly_price = clamp(
            round_cents(next.monthly_price + change),
            MIN_MONTHLY_PRICE,
            MAX_MONTHLY_PRICE,
        );
    }

    if rng.gen::<f64>() < TREND_CHANGE_PROBABILITY {
        let nudge = (rng.gen::<f64>() - 0.5) * TREND_CHANGE_SPAN;
        *trend = clamp(*trend + nudge, -MAX_TREND, MAX_TREND);
    }

    next
}

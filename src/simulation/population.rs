//! Initial creator population

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::CreatorId;
use crate::model::{Category, Creator};
use crate::simulation::state::{CreatorEntry, CreatorState};
use crate::simulation::tables::{pick, price_ending_99};

/// Creators are backdated up to this many hours (30 days)
const CREATION_WINDOW_HOURS: i64 = 720;
/// Last posts are backdated up to this many hours
const LAST_POST_WINDOW_HOURS: i64 = 48;

const VERIFIED_PROBABILITY: f64 = 0.3;
const ONLINE_PROBABILITY: f64 = 0.4;

/// Generate `count` creators with their simulation state
///
/// Draw order per creator is fixed so a seeded generator always yields the
/// same population for the same `now`.
pub fn generate_population(count: usize, now: DateTime<Utc>, rng: &mut ChaCha8Rng) -> Vec<CreatorEntry> {
    let base_time = now - Duration::hours(CREATION_WINDOW_HOURS);

    (0..count)
        .map(|index| {
            let creator = generate_creator(index, base_time, rng);
            let state = generate_state(now, rng);
            CreatorEntry { creator, state }
        })
        .collect()
}

fn generate_creator(index: usize, base_time: DateTime<Utc>, rng: &mut ChaCha8Rng) -> Creator {
    let subscriber_count = rng.gen_range(100..10_100u64);
    let monthly_price = price_ending_99(5, 50, rng);
    let is_verified = rng.gen::<f64>() < VERIFIED_PROBABILITY;
    let created_at = base_time + Duration::hours(rng.gen_range(0..CREATION_WINDOW_HOURS));
    let is_online = rng.gen::<f64>() < ONLINE_PROBABILITY;
    let category = pick(&Category::ALL, rng);

    let id = CreatorId::from_index(index);
    Creator {
        username: format!("user_{}", index),
        display_name: format!("Creator {}", index),
        email: format!("creator{}@platform.com", index),
        is_verified,
        subscriber_count,
        monthly_price,
        created_at,
        is_online,
        category,
        profile_pic: Some(format!("https://cdn.platform.com/profiles/{}.jpg", id)),
        id,
    }
}

fn generate_state(now: DateTime<Utc>, rng: &mut ChaCha8Rng) -> CreatorState {
    CreatorState {
        activity_level: rng.gen::<f64>() * 0.8 + 0.2,
        last_post_at: now - Duration::hours(rng.gen_range(0..LAST_POST_WINDOW_HOURS)),
        subscriber_trend: (rng.gen::<f64>() - 0.5) * 0.02,
        engagement_rate: rng.gen::<f64>() * 0.15 + 0.05,
        post_count: rng.gen_range(10..60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_population_size_and_unique_ids() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let entries = generate_population(250, now(), &mut rng);
        assert_eq!(entries.len(), 250);

        let ids: HashSet<_> = entries.iter().map(|e| e.creator.id.clone()).collect();
        assert_eq!(ids.len(), 250);
    }

    #[test]
    fn test_population_values_within_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let now = now();

        for entry in generate_population(500, now, &mut rng) {
            let creator = &entry.creator;
            let state = &entry.state;

            assert!((100..10_100).contains(&creator.subscriber_count));
            assert!((5.99..=49.99).contains(&creator.monthly_price));
            assert!(creator.created_at <= now);
            assert!(creator.created_at >= now - Duration::days(30));

            assert!((0.2..=1.0).contains(&state.activity_level));
            assert!((0.05..=0.20).contains(&state.engagement_rate));
            assert!(state.subscriber_trend.abs() <= 0.01);
            assert!((10..60).contains(&state.post_count));
            assert!(state.last_post_at <= now);
            assert!(state.last_post_at > now - Duration::hours(48));
        }
    }

    #[test]
    fn test_profile_fields_derive_from_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let entries = generate_population(3, now(), &mut rng);
        let creator = &entries[2].creator;

        assert_eq!(creator.id.as_str(), "creator-2");
        assert_eq!(creator.username, "user_2");
        assert_eq!(creator.email, "creator2@platform.com");
        assert_eq!(
            creator.profile_pic.as_deref(),
            Some("https://cdn.platform.com/profiles/creator-2.jpg")
        );
    }
}

use chrono::{Duration, TimeZone, Utc};
use creator_pulse::simulation::drift::{drift_creator, MAX_MONTHLY_PRICE, MAX_TREND, MIN_MONTHLY_PRICE};
use creator_pulse::{ManualClock, PlatformSimulator, SimulationConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_engine_profiles_stay_in_bounds(seed in any::<u64>(), count in 1usize..20, ticks in 1usize..300) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let mut sim = PlatformSimulator::with_clock(
            &SimulationConfig::new(count, 0.5, Some(seed)),
            clock.clone(),
        ).unwrap();

        for _ in 0..ticks {
            clock.advance(Duration::minutes(5));
            for creator in sim.generate_creator_updates() {
                prop_assert!(creator.monthly_price >= MIN_MONTHLY_PRICE);
                prop_assert!(creator.monthly_price <= MAX_MONTHLY_PRICE);
            }
        }
        prop_assert_eq!(sim.creators().len(), count);
    }

    #[test]
    fn property_any_trend_walk_keeps_bounds(
        seed in any::<u64>(),
        subscribers in 0u64..1_000_000,
        price in 0.0f64..200.0,
        trend in -3.0f64..3.0,
        steps in 1usize..400,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let sim = PlatformSimulator::with_clock(&SimulationConfig::new(1, 0.0, Some(seed)), clock).unwrap();

        let mut creator = sim.creators().remove(0);
        creator.subscriber_count = subscribers;
        creator.monthly_price = price.clamp(MIN_MONTHLY_PRICE, MAX_MONTHLY_PRICE);
        let mut trend = trend;

        for _ in 0..steps {
            let previous = creator.subscriber_count;
            creator = drift_creator(&creator, &mut trend, &mut rng);

            prop_assert!(creator.monthly_price >= MIN_MONTHLY_PRICE);
            prop_assert!(creator.monthly_price <= MAX_MONTHLY_PRICE);
            if previous == 0 {
                prop_assert_eq!(creator.subscriber_count, 0);
            }
        }
    }

    #[test]
    fn property_trend_nudges_land_in_band(seed in any::<u64>(), steps in 50usize..500) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let sim = PlatformSimulator::with_clock(&SimulationConfig::new(1, 0.0, Some(seed)), clock).unwrap();
        let mut creator = sim.creators().remove(0);
        let mut trend = 0.0;

        for _ in 0..steps {
            creator = drift_creator(&creator, &mut trend, &mut rng);
            prop_assert!(trend.abs() <= MAX_TREND);
        }
    }
}

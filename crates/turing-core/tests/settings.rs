use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use turing_core::settings::{GameSettings, ThinkTime};

#[test]
fn defaults_match_the_game() {
    let settings = GameSettings::default();
    assert_eq!(settings.human_probability, 0.5);
    assert_eq!(settings.think_time.min, Duration::from_secs(1));
    assert_eq!(settings.think_time.max, Duration::from_secs(3));
    assert!(settings.validate().is_ok());
}

#[test]
fn out_of_range_probability_is_invalid() {
    for p in [-0.1, 1.5, f64::NAN] {
        let settings = GameSettings {
            human_probability: p,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err(), "{p} should be rejected");
    }
}

#[test]
fn inverted_think_time_is_invalid() {
    let settings = GameSettings {
        think_time: ThinkTime {
            min: Duration::from_secs(5),
            max: Duration::from_secs(1),
        },
        ..GameSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn sampled_think_time_stays_in_range() {
    let think = ThinkTime::default();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let d = think.sample(&mut rng);
        assert!(d >= think.min && d <= think.max, "{d:?} out of range");
    }
}

#[test]
fn zero_think_time_samples_zero() {
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(ThinkTime::NONE.sample(&mut rng), Duration::ZERO);
}

//! Integration tests for trivial and saturated rooms.

use birthday_estimator::{SimulationConfig, estimate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

#[test]
fn empty_room_is_zero() {
    for leap in [true, false] {
        let config = SimulationConfig::new(0)
            .with_n_trials(1_000)
            .with_leap_day(leap);
        let r = estimate(&config, &mut rng()).unwrap();
        assert_eq!(r.collisions(), 0);
        assert_eq!(r.probability(), 0.0);
    }
}

#[test]
fn single_person_is_zero() {
    for leap in [true, false] {
        let config = SimulationConfig::new(1)
            .with_n_trials(1_000)
            .with_leap_day(leap);
        assert_eq!(estimate(&config, &mut rng()).unwrap().probability(), 0.0);
    }
}

#[test]
fn pigeonhole_with_leap_day() {
    for room_size in [367, 400, 1_000] {
        let config = SimulationConfig::new(room_size).with_n_trials(200);
        assert_eq!(estimate(&config, &mut rng()).unwrap().probability(), 1.0);
    }
}

#[test]
fn pigeonhole_without_leap_day() {
    for room_size in [366, 500] {
        let config = SimulationConfig::new(room_size)
            .with_n_trials(200)
            .with_leap_day(false);
        assert_eq!(estimate(&config, &mut rng()).unwrap().probability(), 1.0);
    }
}

#[test]
fn single_trial() {
    let config = SimulationConfig::new(100).with_n_trials(1);
    let p = estimate(&config, &mut rng()).unwrap().probability();
    assert!(p == 0.0 || p == 1.0);
}

#[test]
fn probability_stays_in_unit_interval() {
    let mut rng = rng();
    for room_size in (0..=120).step_by(5) {
        let config = SimulationConfig::new(room_size).with_n_trials(300);
        let p = estimate(&config, &mut rng).unwrap().probability();
        assert!((0.0..=1.0).contains(&p), "room {room_size}: {p}");
    }
}

#[test]
fn increasing_room_sizes_in_sequence() {
    // One generator threaded through a 1..=100 sweep, as a curve would do.
    let mut rng = StdRng::seed_from_u64(11);
    let curve: Vec<f64> = (1..=100)
        .map(|n| {
            let config = SimulationConfig::new(n).with_n_trials(500);
            estimate(&config, &mut rng).unwrap().probability()
        })
        .collect();
    assert_eq!(curve.len(), 100);
    assert_eq!(curve[0], 0.0);
    assert!(curve[99] > 0.99);
}

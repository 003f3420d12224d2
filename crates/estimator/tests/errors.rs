//! Integration tests for EstimatorError variants.

use birthday_estimator::{EstimatorError, SimulationConfig, estimate, estimate_probability};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

#[test]
fn error_zero_trials() {
    let config = SimulationConfig::new(23).with_n_trials(0);
    let result = estimate(&config, &mut rng());
    assert!(matches!(
        result,
        Err(EstimatorError::NonPositiveTrials { n_trials: 0 })
    ));
}

#[test]
fn error_negative_trials() {
    let result = estimate_probability(23, -100, true, &mut rng());
    assert!(matches!(
        result,
        Err(EstimatorError::NonPositiveTrials { n_trials: -100 })
    ));
}

#[test]
fn error_negative_room_size() {
    let result = estimate_probability(-5, 1_000, false, &mut rng());
    assert!(matches!(
        result,
        Err(EstimatorError::NegativeRoomSize { room_size: -5 })
    ));
}

#[test]
fn rejected_call_consumes_no_randomness() {
    use rand::Rng;

    let mut used = rng();
    let _ = estimate_probability(-1, 10, true, &mut used);
    let mut fresh = rng();
    assert_eq!(used.random::<u64>(), fresh.random::<u64>());
}

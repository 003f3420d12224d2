//! Probability curve over room sizes.

use std::fmt::Write as _;

use birthday_estimator::{
    COMMON_YEAR_DAYS, EstimatorError, SimulationConfig, estimate, exact_probability,
};
use birthday_parallel::{Collect, ExecutionBackend, foreach};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::config::SweepConfig;
use crate::error::SweepError;

/// One room size on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    /// Number of people in the room.
    pub room_size: usize,
    /// Estimated collision probability.
    pub estimate: f64,
    /// Binomial standard error of the estimate.
    pub standard_error: f64,
    /// Closed-form probability for a uniform 365-day calendar, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<f64>,
}

/// Estimated collision probability for room sizes `1..=max_room_size`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    n_trials: usize,
    include_leap_day: bool,
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Returns the points in increasing room size.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of trials behind each point.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns whether the leap day was part of the calendar.
    pub fn include_leap_day(&self) -> bool {
        self.include_leap_day
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest room size whose estimate is at least `p`.
    pub fn first_above(&self, p: f64) -> Option<usize> {
        self.points
            .iter()
            .find(|pt| pt.estimate >= p)
            .map(|pt| pt.room_size)
    }

    /// Renders the curve as CSV with header `room_size,estimate,std_error,exact`.
    ///
    /// A missing closed-form value is an empty field.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("room_size,estimate,std_error,exact\n");
        for pt in &self.points {
            let exact = pt.exact.map(|e| e.to_string()).unwrap_or_default();
            // writing to a String cannot fail
            let _ = writeln!(
                out,
                "{},{},{},{}",
                pt.room_size, pt.estimate, pt.standard_error, exact
            );
        }
        out
    }

    /// Renders the curve as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SweepError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Estimates the collision probability for every room size `1..=max` on
/// `backend`.
///
/// Each room size is one loop iteration with its own seed derived from
/// `config.seed()`, so a seeded curve is identical on every backend.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SweepError::InvalidConfig`] | `max_room_size == 0` or `n_trials == 0` |
/// | [`SweepError::Parallel`] | the backend is shut down |
///
/// # Example
///
/// ```
/// use birthday_parallel::Sequential;
/// use birthday_sweep::{SweepConfig, probability_curve};
///
/// let config = SweepConfig::new(5).with_n_trials(200).with_seed(Some(1));
/// let curve = probability_curve(&config, &Sequential).unwrap();
/// assert_eq!(curve.len(), 5);
/// assert_eq!(curve.points()[0].estimate, 0.0);
/// ```
pub fn probability_curve<B: ExecutionBackend>(
    config: &SweepConfig,
    backend: &B,
) -> Result<Curve, SweepError> {
    config.validate()?;

    let n_trials = config.n_trials();
    let include_leap_day = config.include_leap_day();
    let annotate = config.with_exact_enabled() && !include_leap_day;

    let points = foreach(1..=config.max_room_size())
        .with_seeds(config.seed())
        .run_combined(backend, Collect, |(room_size, seed)| {
            let sim = SimulationConfig::new(room_size)
                .with_n_trials(n_trials)
                .with_leap_day(include_leap_day);
            let result = estimate(&sim, &mut StdRng::seed_from_u64(seed))?;
            Ok::<_, EstimatorError>(CurvePoint {
                room_size,
                estimate: result.probability(),
                standard_error: result.standard_error(),
                exact: annotate.then(|| exact_probability(room_size, COMMON_YEAR_DAYS)),
            })
        })?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let curve = Curve {
        n_trials,
        include_leap_day,
        points,
    };
    info!(
        backend = backend.name(),
        max_room_size = config.max_room_size(),
        n_trials,
        first_above_half = ?curve.first_above(0.5),
        "probability curve complete"
    );
    Ok(curve)
}

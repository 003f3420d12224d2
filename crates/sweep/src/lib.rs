//! # birthday-sweep
//!
//! Composes the estimator with the `foreach` construct: probability curves
//! over room sizes and single estimates whose trials are split across
//! workers.
//!
//! ## Pipeline
//!
//! ```text
//! SweepConfig ──► foreach(1..=max).with_seeds(seed) ──► estimate() per room ──► Collect ──► Curve
//!
//! SimulationConfig ──► chunk_sizes() ──► foreach(chunks) ──► estimate() per chunk ──► Reduce(merge)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use birthday_estimator::SimulationConfig;
//! use birthday_parallel::LocalPool;
//! use birthday_sweep::{SweepConfig, probability_curve, split_estimate};
//!
//! let pool = LocalPool::new(2).unwrap();
//!
//! let curve = probability_curve(&SweepConfig::new(10).with_n_trials(500), &pool).unwrap();
//! println!("{}", curve.to_csv());
//!
//! let config = SimulationConfig::new(23).with_n_trials(10_000);
//! let pooled = split_estimate(&config, 4, Some(7), &pool).unwrap();
//! assert_eq!(pooled.n_trials(), 10_000);
//! ```

mod config;
mod curve;
mod error;
mod split;

pub use config::{DEFAULT_MAX_ROOM_SIZE, SweepConfig};
pub use curve::{Curve, CurvePoint, probability_curve};
pub use error::SweepError;
pub use split::{chunk_sizes, split_estimate};

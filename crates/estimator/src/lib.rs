//! # birthday-estimator
//!
//! Monte Carlo estimation of the probability that at least two people in a
//! room share a birthday, optionally modelling Feb 29 at a quarter of the
//! weight of an ordinary day.
//!
//! ## Pipeline
//!
//! ```text
//!  ┌────────────────────┐     ┌──────────────┐     ┌────────────────────┐
//!  │  DayWeightTable     │────▶│  run_trial   │────▶│  EstimateResult    │
//!  │  (365 or 366 days)  │     │  (one room)  │     │  (collisions / n)  │
//!  └────────────────────┘     └──────────────┘     └────────────────────┘
//! ```
//!
//! The random source is always passed in by the caller; nothing in this
//! crate touches a thread-local or process-wide generator.
//!
//! ## Quick start
//!
//! ```
//! use birthday_estimator::{SimulationConfig, estimate};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = SimulationConfig::new(23)
//!     .with_n_trials(20_000)
//!     .with_leap_day(false);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let result = estimate(&config, &mut rng).unwrap();
//! assert!((result.probability() - 0.507).abs() < 0.03);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | Day weights and weighted day sampling |
//! | `config` | Per-call simulation parameters |
//! | `trial` | One simulated room |
//! | `estimate` | Estimation entry points |
//! | `exact` | Closed-form probability for a uniform calendar |
//! | `result` | Estimate counts and derived statistics |
//! | `error` | Error types |

mod calendar;
mod config;
mod error;
mod estimate;
mod exact;
mod result;
mod trial;

pub use calendar::{COMMON_YEAR_DAYS, DayWeightTable, LEAP_YEAR_DAYS};
pub use config::{DEFAULT_N_TRIALS, SimulationConfig};
pub use error::EstimatorError;
pub use estimate::{estimate, estimate_probability};
pub use exact::exact_probability;
pub use result::EstimateResult;
pub use trial::{TrialScratch, run_trial};

//! Birthday weights over the days of the year.

use rand::Rng;

/// Days in a common year.
pub const COMMON_YEAR_DAYS: usize = 365;

/// Days in the leap-inclusive calendar (Feb 29 appended as the last day).
pub const LEAP_YEAR_DAYS: usize = 366;

/// Relative weight of an ordinary day against the leap day.
///
/// Feb 29 exists in one year out of four, so it collects roughly a quarter
/// of the births an ordinary day does.
const ORDINARY_DAY_UNITS: f64 = 4.0;
const LEAP_DAY_UNITS: f64 = 1.0;

/// Normalised birthday probabilities for every day of the year.
///
/// Day indices are 0-based. With the leap day included, index 365 is Feb 29
/// and carries one quarter of the weight of any other day. Without it, all
/// 365 days are equally likely.
///
/// The table also holds a cumulative distribution used by [`sample`](Self::sample).
///
/// # Example
///
/// ```
/// use birthday_estimator::DayWeightTable;
///
/// let table = DayWeightTable::new(true);
/// assert_eq!(table.n_days(), 366);
/// let ratio = table.weight(365) / table.weight(0);
/// assert!((ratio - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DayWeightTable {
    weights: Vec<f64>,
    cdf: Vec<f64>,
}

impl DayWeightTable {
    /// Builds the table for the 366-day (`true`) or 365-day (`false`) calendar.
    pub fn new(include_leap_day: bool) -> Self {
        let weights = if include_leap_day {
            let total = COMMON_YEAR_DAYS as f64 * ORDINARY_DAY_UNITS + LEAP_DAY_UNITS;
            let mut w = vec![ORDINARY_DAY_UNITS / total; COMMON_YEAR_DAYS];
            w.push(LEAP_DAY_UNITS / total);
            w
        } else {
            vec![1.0 / COMMON_YEAR_DAYS as f64; COMMON_YEAR_DAYS]
        };

        let mut acc = 0.0;
        let mut cdf: Vec<f64> = weights
            .iter()
            .map(|&w| {
                acc += w;
                acc
            })
            .collect();
        // Force last entry to exactly 1.0 to absorb accumulation error
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        Self { weights, cdf }
    }

    /// Returns the number of days covered (365 or 366).
    pub fn n_days(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the table contains the leap day.
    pub fn includes_leap_day(&self) -> bool {
        self.weights.len() == LEAP_YEAR_DAYS
    }

    /// Returns the probability of `day` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `day >= self.n_days()`.
    pub fn weight(&self, day: usize) -> f64 {
        self.weights[day]
    }

    /// Returns all weights in day order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterates over `(day_index, weight)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights.iter().copied().enumerate()
    }

    /// Draws one day index according to the table's weights.
    ///
    /// Uses a binary search over the cumulative distribution.
    pub fn sample(&self, rng: &mut impl Rng) -> usize {
        let u: f64 = rng.random();
        self.cdf
            .partition_point(|&c| c < u)
            .min(self.weights.len() - 1)
    }
}

//! Closed-form collision probability for a uniform calendar.

/// Probability that `room_size` people drawn uniformly from `n_days` days
/// share at least one birthday.
///
/// Computes `1 - prod_{k=0}^{n-1} (d - k) / d`. Returns 0.0 for rooms of
/// 0 or 1 and 1.0 once `room_size > n_days`.
///
/// # Example
///
/// ```
/// use birthday_estimator::exact_probability;
///
/// let p = exact_probability(23, 365);
/// assert!((p - 0.5073).abs() < 1e-4);
/// ```
pub fn exact_probability(room_size: usize, n_days: usize) -> f64 {
    if room_size < 2 {
        return 0.0;
    }
    if room_size > n_days {
        return 1.0;
    }
    let d = n_days as f64;
    let no_collision: f64 = (0..room_size).map(|k| (d - k as f64) / d).product();
    (1.0 - no_collision).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        assert_abs_diff_eq!(exact_probability(2, 365), 1.0 / 365.0, epsilon = 1e-12);
        assert_abs_diff_eq!(exact_probability(23, 365), 0.507_297, epsilon = 1e-6);
        assert_abs_diff_eq!(exact_probability(50, 365), 0.970_374, epsilon = 1e-6);
        assert_abs_diff_eq!(exact_probability(70, 365), 0.999_160, epsilon = 1e-6);
    }

    #[test]
    fn trivial_rooms() {
        assert_eq!(exact_probability(0, 365), 0.0);
        assert_eq!(exact_probability(1, 365), 0.0);
    }

    #[test]
    fn pigeonhole() {
        assert_eq!(exact_probability(366, 365), 1.0);
        assert_eq!(exact_probability(1000, 365), 1.0);
        // n == d: only permutations avoid a repeat, d!/d^d is tiny but non-zero
        assert!(exact_probability(365, 365) > 0.999_999);
    }

    #[test]
    fn monotone_in_room_size() {
        let curve: Vec<f64> = (0..=100).map(|n| exact_probability(n, 365)).collect();
        assert!(curve.windows(2).all(|w| w[0] <= w[1]));
    }
}

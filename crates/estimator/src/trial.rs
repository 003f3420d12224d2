//! A single simulated room.

use rand::Rng;

use crate::calendar::{DayWeightTable, LEAP_YEAR_DAYS};

/// Reusable seen-day mask for [`run_trial`].
///
/// Reuse across trials to avoid a heap allocation per room.
#[derive(Debug, Clone)]
pub struct TrialScratch {
    seen: Vec<bool>,
}

impl TrialScratch {
    /// Creates a scratch mask large enough for either calendar.
    pub fn new() -> Self {
        Self {
            seen: vec![false; LEAP_YEAR_DAYS],
        }
    }
}

impl Default for TrialScratch {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulates one room of `room_size` people.
///
/// Draws birthdays with replacement from `table` and returns `true` as soon
/// as a day is drawn twice. Rooms of 0 or 1 people never collide.
pub fn run_trial(
    room_size: usize,
    table: &DayWeightTable,
    rng: &mut impl Rng,
    scratch: &mut TrialScratch,
) -> bool {
    if room_size < 2 {
        return false;
    }
    let seen = &mut scratch.seen[..table.n_days()];
    seen.fill(false);
    for _ in 0..room_size {
        let day = table.sample(rng);
        if seen[day] {
            return true;
        }
        seen[day] = true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_and_single_rooms_never_collide() {
        let table = DayWeightTable::new(true);
        let mut rng = StdRng::seed_from_u64(1);
        let mut scratch = TrialScratch::new();
        for _ in 0..100 {
            assert!(!run_trial(0, &table, &mut rng, &mut scratch));
            assert!(!run_trial(1, &table, &mut rng, &mut scratch));
        }
    }

    #[test]
    fn pigeonhole_always_collides() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scratch = TrialScratch::new();

        let uniform = DayWeightTable::new(false);
        for _ in 0..50 {
            assert!(run_trial(366, &uniform, &mut rng, &mut scratch));
        }

        let leap = DayWeightTable::new(true);
        for _ in 0..50 {
            assert!(run_trial(367, &leap, &mut rng, &mut scratch));
        }
    }

    #[test]
    fn scratch_is_reset_between_trials() {
        // Two people in a room collide with probability ~1/365; a stale mask
        // would make nearly every trial collide.
        let table = DayWeightTable::new(false);
        let mut rng = StdRng::seed_from_u64(3);
        let mut scratch = TrialScratch::new();
        let hits = (0..10_000)
            .filter(|_| run_trial(2, &table, &mut rng, &mut scratch))
            .count();
        assert!(hits < 100, "got {hits} collisions in 10000 two-person rooms");
    }

    #[test]
    fn scratch_shared_between_calendars() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut scratch = TrialScratch::new();
        let leap = DayWeightTable::new(true);
        let uniform = DayWeightTable::new(false);
        for _ in 0..100 {
            run_trial(30, &leap, &mut rng, &mut scratch);
            run_trial(30, &uniform, &mut rng, &mut scratch);
        }
    }
}

//! Random date generation.
//!
//! Sampling is hierarchical: a year uniformly in
//! `RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR`, a month uniformly in `1..=12`, then a
//! day uniformly within that month. Every month and year is equally likely
//! regardless of its length, so this is not a flat draw over all days in the
//! window.

use crate::consts::{JANUARY, MAX_MONTH, MIN_DAY, RANDOM_MAX_YEAR, RANDOM_MIN_YEAR};
use crate::types::days_in_month;
use crate::CalendarDate;
use rand::Rng;

/// Draws one date from `rng`.
pub fn random_date_with<R: Rng + ?Sized>(rng: &mut R) -> CalendarDate {
    let year = rng.gen_range(RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR);
    let month = rng.gen_range(JANUARY..=MAX_MONTH);
    let day = rng.gen_range(MIN_DAY..=days_in_month(month, year));
    log::debug!("random date {day}/{month}/{year}");
    CalendarDate::new(day, month, year)
}

/// Draws `count` dates from `rng`.
pub fn random_dates<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<CalendarDate> {
    (0..count).map(|_| random_date_with(rng)).collect()
}

impl CalendarDate {
    /// Draws a date from the thread-local generator, which is seeded once per thread.
    pub fn random() -> Self {
        random_date_with(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FEBRUARY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bounds_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(42);
        for d in random_dates(&mut rng, 10_000) {
            assert!(
                (RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()),
                "year out of window: {d:?}"
            );
            assert!((JANUARY..=MAX_MONTH).contains(&d.month()), "bad month: {d:?}");
            assert!(
                (MIN_DAY..=days_in_month(d.month(), d.year())).contains(&d.day()),
                "bad day: {d:?}"
            );
            assert!(d.is_valid());
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(random_dates(&mut rng1, 50), random_dates(&mut rng2, 50));
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(0);
        let dates = random_dates(&mut rng, 20);
        let first = dates[0];
        assert!(dates.iter().any(|d| *d != first));
    }

    #[test]
    fn test_every_month_and_window_edge_is_reached() {
        let mut rng = StdRng::seed_from_u64(1);
        let dates = random_dates(&mut rng, 10_000);
        for month in JANUARY..=MAX_MONTH {
            assert!(dates.iter().any(|d| d.month() == month), "month {month} never drawn");
        }
        assert!(dates.iter().any(|d| d.year() == RANDOM_MIN_YEAR));
        assert!(dates.iter().any(|d| d.year() == RANDOM_MAX_YEAR));
    }

    #[test]
    fn test_leap_day_only_in_leap_years() {
        let mut rng = StdRng::seed_from_u64(2024);
        for d in random_dates(&mut rng, 10_000) {
            if d.month() == FEBRUARY && d.day() == 29 {
                assert!(CalendarDate::is_leap_year(d.year()), "29 Feb in {}", d.year());
            }
        }
    }

    #[test]
    fn test_random_uses_thread_generator() {
        let d = CalendarDate::random();
        assert!((RANDOM_MIN_YEAR..=RANDOM_MAX_YEAR).contains(&d.year()));
        assert!(d.is_valid());
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(random_dates(&mut rng, 0).is_empty());
    }
}

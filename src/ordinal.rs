//! Day-ordinal conversion.
//!
//! Every arithmetic operation on [`crate::CalendarDate`] goes through this
//! layer: the date is linearized into an absolute day count, shifted, and
//! converted back. Absolute ordinals count from 1 January of year 1 (which has
//! ordinal 1); epoch-relative offsets count from the epoch base date, which
//! has offset 0.

use crate::consts::{
    DAYS_IN_GREGORIAN_CYCLE, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, GREGORIAN_CYCLE, JANUARY,
};
use crate::types::{days_in_month, days_in_year};

/// Days elapsed from 1 January of year 1 up to, not including, 1 January of `year`.
///
/// Floor division keeps the count consistent for years before 1.
pub(crate) fn year_to_days(year: i32) -> i64 {
    days_before(i64::from(year))
}

/// [`year_to_days`] for a year that may sit just outside `i32`.
fn days_before(year: i64) -> i64 {
    let y = year - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Absolute ordinal of a (day, month, year) tuple.
///
/// The tuple is not validated: a day past the end of its month simply
/// overshoots into the following month's ordinals, and months outside
/// `1..=12` contribute no days.
pub(crate) fn date_to_ordinal(day: u8, month: u8, year: i32) -> i64 {
    let months: i64 = (JANUARY..month)
        .map(|m| i64::from(days_in_month(m, year)))
        .sum();
    year_to_days(year) + months + i64::from(day)
}

/// Absolute ordinal of the epoch base date.
pub(crate) fn epoch_ordinal() -> i64 {
    date_to_ordinal(EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR)
}

/// Offset of a tuple from the epoch base date, in days.
pub(crate) fn days_since_epoch(day: u8, month: u8, year: i32) -> i64 {
    date_to_ordinal(day, month, year) - epoch_ordinal()
}

/// Inverse of [`days_since_epoch`] for valid dates.
///
/// Returns `None` when the resulting year does not fit in an `i32`.
pub(crate) fn ordinal_to_date(offset: i64) -> Option<(u8, u8, i32)> {
    // Whole 400-year cycles first; each one is exactly DAYS_IN_GREGORIAN_CYCLE long.
    let cycles = offset.div_euclid(DAYS_IN_GREGORIAN_CYCLE);
    let mut remaining = offset.rem_euclid(DAYS_IN_GREGORIAN_CYCLE);
    let base = cycles
        .checked_mul(i64::from(GREGORIAN_CYCLE))?
        .checked_add(i64::from(EPOCH_YEAR))?;
    let lowest = i64::from(i32::MIN);
    let mut year = if base < lowest {
        // The year falls in base..base + 400; start the walk at i32::MIN instead.
        if base <= lowest - i64::from(GREGORIAN_CYCLE) {
            return None;
        }
        remaining -= days_before(lowest) - days_before(base);
        if remaining < 0 {
            return None;
        }
        i32::MIN
    } else {
        i32::try_from(base).ok()?
    };

    loop {
        let len = i64::from(days_in_year(year));
        if remaining < len {
            break;
        }
        remaining -= len;
        year = year.checked_add(1)?;
    }

    let mut month = JANUARY;
    loop {
        let len = i64::from(days_in_month(month, year));
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }

    let day = u8::try_from(remaining + 1).ok()?;
    log::trace!("epoch offset {offset} -> {day}/{month}/{year}");
    Some((day, month, year))
}

//! Calendar-unit breakdowns built on top of day arithmetic.
//!
//! [`CalendarDate::difference`] only ever answers in whole days; the helpers
//! here step through months to express an interval as years, months and days,
//! the way an age is usually stated.

use crate::consts::{DAYS_IN_WEEK, MAX_MONTH};
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarDate, DateError};

/// Whole years, months and remaining days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, From, Into)]
#[display(fmt = "{years} yil, {months} ay, {days} gun")]
pub struct CalendarSpan {
    pub years:  u32,
    pub months: u32,
    pub days:   u32,
}

/// Error type for span calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Start date is after end date.
    #[error("Invalid span: start ({start}) is after end ({end})")]
    Reversed { start: CalendarDate, end: CalendarDate },

    /// One of the endpoints is not a valid date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Result does not fit the span's fields.
    #[error("Span out of range")]
    OutOfRange,
}

impl CalendarSpan {
    /// Breaks the interval `start..=end` into years, months and days.
    ///
    /// Months are counted by moving `start` forward one calendar month at a
    /// time; when the target month is shorter than `start`'s day, the step
    /// lands on that month's last day. The remainder is counted in days.
    ///
    /// # Errors
    /// Returns `SpanError::Date` if either endpoint fails validation and
    /// `SpanError::Reversed` if `start > end`.
    pub fn between(start: CalendarDate, end: CalendarDate) -> Result<Self, SpanError> {
        let (start, end) = ordered(start, end)?;

        let mut months = (i64::from(end.year()) - i64::from(start.year())) * i64::from(MAX_MONTH)
            + i64::from(end.month())
            - i64::from(start.month());
        let mut anchor = shift_months(start, months).ok_or(SpanError::OutOfRange)?;
        if anchor > end {
            months -= 1;
            anchor = shift_months(start, months).ok_or(SpanError::OutOfRange)?;
        }

        let narrow = |v: i64| u32::try_from(v).map_err(|_| SpanError::OutOfRange);
        Ok(Self {
            years:  narrow(months / i64::from(MAX_MONTH))?,
            months: narrow(months % i64::from(MAX_MONTH))?,
            days:   narrow(end.difference(&anchor))?,
        })
    }

    /// Flat day count of the interval `start..=end`, zero for the same day.
    ///
    /// # Errors
    /// Fails under the same conditions as [`CalendarSpan::between`].
    pub fn total_days(start: CalendarDate, end: CalendarDate) -> Result<u64, SpanError> {
        let (start, end) = ordered(start, end)?;
        Ok(end.difference(&start).unsigned_abs())
    }

    /// Whole weeks in the interval `start..=end`; leftover days are dropped.
    ///
    /// # Errors
    /// Fails under the same conditions as [`CalendarSpan::between`].
    pub fn total_weeks(start: CalendarDate, end: CalendarDate) -> Result<u64, SpanError> {
        Ok(Self::total_days(start, end)? / u64::from(DAYS_IN_WEEK))
    }

    /// Years and months folded into a month count
    pub const fn total_months(&self) -> u64 {
        self.years as u64 * MAX_MONTH as u64 + self.months as u64
    }

    /// True when all components are zero
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Validates both endpoints and checks that `start` does not come after `end`.
fn ordered(start: CalendarDate, end: CalendarDate) -> Result<(CalendarDate, CalendarDate), SpanError> {
    let start = start.validate()?;
    let end = end.validate()?;
    if start > end {
        return Err(SpanError::Reversed { start, end });
    }
    Ok((start, end))
}

/// Moves a valid date by whole calendar months, clamping the day to the
/// target month's length.
fn shift_months(date: CalendarDate, months: i64) -> Option<CalendarDate> {
    let index = i64::from(date.year()) * i64::from(MAX_MONTH) + i64::from(date.month()) - 1 + months;
    let year = i32::try_from(index.div_euclid(i64::from(MAX_MONTH))).ok()?;
    let month = u8::try_from(index.rem_euclid(i64::from(MAX_MONTH)) + 1).ok()?;
    let day = date.day().min(days_in_month(month, year));
    Some(CalendarDate::new(day, month, year))
}

/// Days from `today` until the next recurrence of `date`'s day and month,
/// zero if it falls on `today`.
///
/// A 29 February anniversary in a common year is observed on 1 March.
pub fn days_until_anniversary(date: CalendarDate, today: CalendarDate) -> i64 {
    let this_year = CalendarDate::new(date.day(), date.month(), today.year()).normalized();
    let next = if this_year < today {
        CalendarDate::new(date.day(), date.month(), today.year().saturating_add(1)).normalized()
    } else {
        this_year
    };
    next - today
}

/// Splits an absolute day count into whole weeks and leftover days.
pub const fn weeks_and_days(days: i64) -> (u64, u64) {
    let days = days.unsigned_abs();
    (days / DAYS_IN_WEEK as u64, days % DAYS_IN_WEEK as u64)
}

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, WEEKDAY_NAMES,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, numbered from Sunday (0) to Saturday (6).
///
/// Stepping is cyclic: `next()` past Saturday wraps to Sunday and
/// `previous()` before Sunday wraps to Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in ordinal order, starting with Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for an ordinal, reduced modulo 7
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_IN_WEEK) as usize]
    }

    /// Returns the ordinal of this weekday (0 = Sunday)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the following weekday, wrapping Saturday to Sunday
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the preceding weekday, wrapping Sunday to Saturday
    #[inline]
    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + DAYS_IN_WEEK - 1)
    }

    /// Returns the fixed display name of this weekday
    #[inline]
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= DAYS_IN_WEEK {
            return Err(DateError::InvalidWeekday(value));
        }
        Ok(Self::from_index(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

// Helper functions

/// Gregorian leap year rule: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`. Months outside `1..=12` have no days.
pub const fn days_in_month(month: u8, year: i32) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }
    DAYS_IN_MONTH[is_leap_year(year) as usize][(month - 1) as usize]
}

/// Length of `year` in days (365 or 366).
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

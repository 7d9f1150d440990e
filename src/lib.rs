mod consts;
mod ordinal;
mod prelude;
mod random;
mod span;
mod types;

pub use consts::*;
pub use random::{random_date_with, random_dates};
pub use span::{CalendarSpan, SpanError, days_until_anniversary, weeks_and_days};
pub use types::{Weekday, days_in_month, days_in_year, is_leap_year};

use crate::consts::WEEKDAY_MONTH_OFFSETS;
use chrono::{DateTime, Datelike, Local, TimeZone};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A day in the proleptic Gregorian calendar.
///
/// Fields are stored verbatim: [`CalendarDate::new`] accepts any tuple, and
/// [`CalendarDate::try_new`] is the validating path. Ordering is
/// lexicographic on (year, month, day) as stored, so it is a total order
/// even for tuples that do not name a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year:  i32,
    month: u8,
    day:   u8,
}

/// Error type for date construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Day is zero or past the end of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: i32 },

    /// Month is outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Year is outside the range accepted by checked construction.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Text did not match `<day><sep><month><sep><year>`.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Unix timestamp cannot be represented as a calendar date.
    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    /// Weekday ordinal is outside `0..=6`.
    #[error("Invalid weekday: {0} (must be 0-6)")]
    InvalidWeekday(u8),
}

impl CalendarDate {
    /// Creates a date from raw parts without validation.
    pub const fn new(day: u8, month: u8, year: i32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, checking that the tuple names a real day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is outside
    /// `MIN_YEAR..=MAX_YEAR`, `DateError::InvalidMonth` if the month is
    /// outside `1..=12`, and `DateError::InvalidDay` if the day does not exist
    /// in that month.
    pub const fn try_new(day: u8, month: u8, year: i32) -> Result<Self, DateError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(DateError::InvalidYear(year));
        }
        if month < JANUARY || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(month, year) {
            return Err(DateError::InvalidDay { day, month, year });
        }
        Ok(Self::new(day, month, year))
    }

    /// Runs the checks of [`CalendarDate::try_new`] on an existing value.
    ///
    /// # Errors
    /// Same as [`CalendarDate::try_new`].
    pub const fn validate(self) -> Result<Self, DateError> {
        Self::try_new(self.day, self.month, self.year)
    }

    /// Parses `<day><sep><month><sep><year>`, e.g. `15/02/1998`.
    ///
    /// # Errors
    /// See the [`FromStr`] implementation.
    pub fn from_text(s: &str) -> Result<Self, DateError> {
        s.parse()
    }

    /// Today's date according to the local system clock.
    pub fn today() -> Self {
        let now = Local::now();
        log::debug!("read local clock: {now}");
        Self::from_datetime(&now)
    }

    /// Converts a Unix timestamp (seconds) to a date in the local time zone.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTimestamp` if chrono cannot represent the instant.
    pub fn from_timestamp(secs: i64) -> Result<Self, DateError> {
        let utc = DateTime::from_timestamp(secs, 0).ok_or(DateError::InvalidTimestamp(secs))?;
        Ok(Self::from_datetime(&utc.with_timezone(&Local)))
    }

    /// Takes the calendar date of a chrono timestamp in its own time zone.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        // chrono guarantees day <= 31 and month <= 12
        Self::new(datetime.day() as u8, datetime.month() as u8, datetime.year())
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month (1 = January)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns `(day, month, year)`
    pub const fn to_parts(&self) -> (u8, u8, i32) {
        (self.day, self.month, self.year)
    }

    pub fn set_day(&mut self, day: u8) -> &mut Self {
        self.day = day;
        self
    }

    pub fn set_month(&mut self, month: u8) -> &mut Self {
        self.month = month;
        self
    }

    pub fn set_year(&mut self, year: i32) -> &mut Self {
        self.year = year;
        self
    }

    /// Replaces all three fields at once
    pub fn set(&mut self, day: u8, month: u8, year: i32) -> &mut Self {
        *self = Self::new(day, month, year);
        self
    }

    /// True when the tuple names a day that exists in the Gregorian calendar.
    /// Unlike [`CalendarDate::validate`], the year is not range-checked.
    pub const fn is_valid(&self) -> bool {
        self.month >= JANUARY
            && self.month <= MAX_MONTH
            && self.day >= MIN_DAY
            && self.day <= days_in_month(self.month, self.year)
    }

    /// Gregorian leap year test
    #[inline]
    pub const fn is_leap_year(year: i32) -> bool {
        is_leap_year(year)
    }

    /// Number of days in `month` of `year`
    #[inline]
    pub const fn days_in_month(month: u8, year: i32) -> u8 {
        days_in_month(month, year)
    }

    /// 1-based position of the date within its year
    pub fn day_of_year(&self) -> u16 {
        let preceding: u16 = (JANUARY..self.month)
            .map(|m| u16::from(days_in_month(m, self.year)))
            .sum();
        preceding + u16::from(self.day)
    }

    /// Fraction of the year elapsed, counting this day (`day_of_year / days_in_year`)
    pub fn year_progress(&self) -> f64 {
        f64::from(self.day_of_year()) / f64::from(days_in_year(self.year))
    }

    /// Day of the week, from the raw tuple.
    ///
    /// January and February count as months of the previous year so the
    /// leap-day correction lands after February.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn weekday(&self) -> Weekday {
        let y = i64::from(self.year) - i64::from(self.month < MARCH);
        let offset = usize::from(self.month)
            .checked_sub(1)
            .and_then(|i| WEEKDAY_MONTH_OFFSETS.get(i))
            .copied()
            .unwrap_or(0);
        let total = y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + i64::from(offset)
            + i64::from(self.day);
        // rem_euclid(7) is in 0..7
        Weekday::from_index(total.rem_euclid(i64::from(DAYS_IN_WEEK)) as u8)
    }

    /// Month name from the fixed table, `None` for months outside `1..=12`
    pub fn month_name(&self) -> Option<&'static str> {
        let index = usize::from(self.month).checked_sub(1)?;
        MONTH_NAMES.get(index).copied()
    }

    /// Numeric text form, `dd/mm/yyyy`.
    ///
    /// [`CalendarDate::parse_unchecked`] reads back any stored tuple;
    /// [`FromStr`] only accepts the output of a valid date.
    pub fn format_numeric(&self) -> String {
        format!(
            "{:02}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:04}",
            self.day, self.month, self.year
        )
    }

    /// Shifts the date by `days`, returning `None` if the year would leave `i32`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        if !self.is_valid() {
            log::debug!(
                "day arithmetic on unnormalized date {}",
                self.format_numeric()
            );
        }
        let offset = ordinal::days_since_epoch(self.day, self.month, self.year).checked_add(days)?;
        let (day, month, year) = ordinal::ordinal_to_date(offset)?;
        Some(Self::new(day, month, year))
    }

    /// Shifts the date back by `days`, returning `None` if the year would leave `i32`.
    pub fn checked_sub_days(self, days: i64) -> Option<Self> {
        self.checked_add_days(days.checked_neg()?)
    }

    /// Shifts the date by `days`.
    ///
    /// # Panics
    /// Panics if the resulting year does not fit in an `i32`.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days)
            .unwrap_or_else(|| panic!("date out of range: {self:?} + {days} days"))
    }

    /// Shifts the date back by `days`.
    ///
    /// # Panics
    /// Panics if the resulting year does not fit in an `i32`.
    pub fn sub_days(self, days: i64) -> Self {
        self.checked_sub_days(days)
            .unwrap_or_else(|| panic!("date out of range: {self:?} - {days} days"))
    }

    /// Signed number of days from `other` to `self`.
    pub fn difference(&self, other: &Self) -> i64 {
        ordinal::date_to_ordinal(self.day, self.month, self.year)
            - ordinal::date_to_ordinal(other.day, other.month, other.year)
    }

    /// The real calendar day this tuple lands on, e.g. 31/02/1900 becomes 03/03/1900.
    /// Valid dates are returned unchanged.
    pub fn normalized(self) -> Self {
        self.add_days(0)
    }

    /// The following day
    pub fn next(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day
    pub fn previous(self) -> Self {
        self.sub_days(1)
    }

    /// Advances in place by one day and returns the value held before the step.
    pub fn increment(&mut self) -> Self {
        let prior = *self;
        *self = prior.next();
        prior
    }

    /// Steps back in place by one day and returns the value held before the step.
    pub fn decrement(&mut self) -> Self {
        let prior = *self;
        *self = prior.previous();
        prior
    }
}

impl Default for CalendarDate {
    /// The epoch base date, 1 January 1900
    fn default() -> Self {
        Self::new(EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR)
    }
}

impl From<(u8, u8, i32)> for CalendarDate {
    fn from((day, month, year): (u8, u8, i32)) -> Self {
        Self::new(day, month, year)
    }
}

impl From<CalendarDate> for (u8, u8, i32) {
    fn from(date: CalendarDate) -> Self {
        date.to_parts()
    }
}

impl Add<i64> for CalendarDate {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        self.add_days(days)
    }
}

impl Add<CalendarDate> for i64 {
    type Output = CalendarDate;

    fn add(self, date: CalendarDate) -> CalendarDate {
        date.add_days(self)
    }
}

impl Sub<i64> for CalendarDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        self.sub_days(days)
    }
}

impl Sub for CalendarDate {
    type Output = i64;

    fn sub(self, other: Self) -> i64 {
        self.difference(&other)
    }
}

impl AddAssign<i64> for CalendarDate {
    fn add_assign(&mut self, days: i64) {
        *self = self.add_days(days);
    }
}

impl SubAssign<i64> for CalendarDate {
    fn sub_assign(&mut self, days: i64) {
        *self = self.sub_days(days);
    }
}

impl fmt::Display for CalendarDate {
    /// `<day> <month name> <year> <weekday name>`, e.g. `15 Subat 1998 Pazar`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month_name() {
            Some(name) => write!(f, "{} {} {} {}", self.day, name, self.year, self.weekday()),
            None => write!(f, "{} {} {} {}", self.day, self.month, self.year, self.weekday()),
        }
    }
}

/// Splits `<day><sep><month><sep><year>` into its three numeric tokens.
/// Separators are any single non-digit, non-whitespace character.
struct Fields<'a> {
    input: &'a str,
    rest:  &'a str,
}

impl<'a> Fields<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, rest: input }
    }

    fn malformed(&self) -> DateError {
        DateError::InvalidFormat(self.input.to_owned())
    }

    fn number(&mut self, signed: bool) -> Result<&'a str, DateError> {
        let rest = self.rest.trim_start();
        let sign_len = usize::from(signed && rest.starts_with(['-', '+']));
        let digits = rest[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len() - sign_len);
        if digits == 0 {
            return Err(self.malformed());
        }
        let (token, tail) = rest.split_at(sign_len + digits);
        self.rest = tail;
        Ok(token)
    }

    fn separator(&mut self) -> Result<char, DateError> {
        let rest = self.rest.trim_start();
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if !c.is_ascii_digit() && !c.is_whitespace() => {
                self.rest = chars.as_str();
                Ok(c)
            }
            _ => Err(self.malformed()),
        }
    }

    fn finish(&self) -> Result<(), DateError> {
        if self.rest.trim().is_empty() {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    /// Reads the three numeric fields without checking the calendar.
    fn parse(text: &'a str) -> Result<(u8, u8, i32), DateError> {
        let mut fields = Self::new(text.trim());

        let day = fields.number(false)?;
        fields.separator()?;
        let month = fields.number(false)?;
        fields.separator()?;
        let year = fields.number(true)?;
        fields.finish()?;

        let day = day.parse::<u8>().map_err(|_| fields.malformed())?;
        let month = month.parse::<u8>().map_err(|_| fields.malformed())?;
        let year = year.parse::<i32>().map_err(|_| fields.malformed())?;
        Ok((day, month, year))
    }
}

impl CalendarDate {
    /// Parses `<day><sep><month><sep><year>` like [`FromStr`] but stores the
    /// tuple as written, the way [`CalendarDate::new`] does.
    ///
    /// # Errors
    /// Returns `DateError::InvalidFormat` for text that is not three numbers
    /// joined by separators, or a number too large for its field.
    pub fn parse_unchecked(s: &str) -> Result<Self, DateError> {
        let (day, month, year) = Fields::parse(s)?;
        Ok(Self::new(day, month, year))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `<day><sep><month><sep><year>` and validates the result.
    ///
    /// Syntax errors and numbers too large for their field give
    /// `DateError::InvalidFormat`; well-formed text naming a day that does not
    /// exist gives the matching `InvalidDay`/`InvalidMonth`/`InvalidYear`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, month, year) = Fields::parse(s)?;
        Self::try_new(day, month, year)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_numeric())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_unchecked(&s).map_err(serde::de::Error::custom)
    }
}

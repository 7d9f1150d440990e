/// Year of the epoch base date (1 January 1900)
pub const EPOCH_YEAR: i32 = 1900;
/// Month of the epoch base date
pub const EPOCH_MONTH: u8 = JANUARY;
/// Day of the epoch base date
pub const EPOCH_DAY: u8 = MIN_DAY;

/// Earliest year produced by the random date generator (inclusive)
pub const RANDOM_MIN_YEAR: i32 = 1940;
/// Latest year produced by the random date generator (inclusive)
pub const RANDOM_MAX_YEAR: i32 = 2020;

/// Minimum year accepted by checked construction (inclusive)
pub const MIN_YEAR: i32 = 1;
/// Maximum year accepted by checked construction (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month after the leap day
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097;

/// Days per week
pub const DAYS_IN_WEEK: u8 = 7;

/// Month lengths, row 0 for common years and row 1 for leap years.
/// Columns are indexed by `month - 1`.
pub const DAYS_IN_MONTH: [[u8; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Month-start offsets for the weekday congruence, indexed by `month - 1`
pub(crate) const WEEKDAY_MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Month names used when rendering a date, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "Ocak", "Subat", "Mart", "Nisan", "Mayis", "Haziran", "Temmuz", "Agustos", "Eylul", "Ekim",
    "Kasim", "Aralik",
];

/// Weekday names, indexed by weekday ordinal (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Pazar",
    "Pazartesi",
    "Sali",
    "Carsamba",
    "Persembe",
    "Cuma",
    "Cumartesi",
];

/// Component separator used by the numeric text form (`dd/mm/yyyy`)
pub const DATE_SEPARATOR: char = '/';

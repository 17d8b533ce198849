/// Maximum valid year (inclusive)
pub const MAX_YEAR: i16 = 9999;

/// Minimum valid year (inclusive), astronomical numbering (year 0 is 1 BC)
pub const MIN_YEAR: i16 = -9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

pub const DAYS_IN_WEEK: i64 = 7;
pub const MONTHS_IN_QUARTER: u8 = 3;

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;
pub const MAX_MILLISECOND: u16 = 999;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub(crate) const MILLIS_PER_DAY: i64 = 24 * 60 * MILLIS_PER_MINUTE;

/// Largest accepted fixed offset, in minutes (`+23:59`)
pub const MAX_OFFSET_MINUTES: i16 = 23 * 60 + 59;

/// A two-digit year expands to the year ending in those digits that lies in
/// `reference - TWO_DIGIT_YEAR_WINDOW ..= reference + TWO_DIGIT_YEAR_WINDOW - 1`.
pub const TWO_DIGIT_YEAR_WINDOW: i32 = 50;

/// Upper bound on distinct format strings kept by [`crate::Format::cached`]
pub const SEGMENT_CACHE_CAPACITY: usize = 512;

/// Opens a bracket-escaped literal in a format string
pub const BRACKET_OPEN: char = '[';
/// Closes a bracket-escaped literal
pub const BRACKET_CLOSE: char = ']';
/// Delimits a quote-escaped literal; doubled, it is a literal quote
pub const QUOTE: char = '\'';

/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Format used by `Display`/`FromStr` for [`crate::CalendarDate`]
pub const ISO_DATE_TIME_FORMAT: &str = "YYYY-MM-DD[T]HH:mm:ss.SSS";
/// Date-only fallback accepted by `FromStr`
pub const ISO_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Stands for the number in a relative-time phrase
pub const COUNT_PLACEHOLDER: &str = "{count}";

use crate::prelude::*;
use crate::token::Field;

/// A format string could not be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// An escape opened at `position` (byte offset) was never closed.
    #[error("unterminated {delimiter} escape starting at byte {position}")]
    Unterminated { delimiter: char, position: usize },

    /// The token is easy to confuse with a more common one and needs an
    /// explicit opt-in.
    #[error("token {token:?} requires the `{option}` option")]
    ProtectedToken {
        token: &'static str,
        option: &'static str,
    },

    /// `first_week_contains_date` must be in `1..=7`.
    #[error("first_week_contains_date must be in 1..=7, got {0}")]
    InvalidWeekConfig(u8),

    /// An offset option is outside the supported bound.
    #[error("offset of {0} minutes is outside -{max}..={max}", max = crate::MAX_OFFSET_MINUTES)]
    InvalidOffset(i16),
}

/// A date component or combination of components is not a valid calendar
/// date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported range.
    #[error("invalid year: {0} (must be {min}..={max})", min = crate::MIN_YEAR, max = crate::MAX_YEAR)]
    InvalidYear(i64),
    /// Month outside 1-12.
    #[error("invalid month: {0} (must be 1-{max})", max = crate::MAX_MONTH)]
    InvalidMonth(i64),
    /// Day past the end of its month.
    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: u8, day: i64 },
    /// A time component is out of range.
    #[error("invalid time {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    },
    /// Day of year past the end of its year.
    #[error("invalid day of year {day} for year {year}")]
    InvalidDayOfYear { year: i64, day: i64 },
    /// Week number the week-numbering year does not have.
    #[error("invalid week {week} for week-numbering year {year}")]
    InvalidWeek { year: i64, week: i64 },
    /// The parsed weekday disagrees with the resolved date.
    #[error("parsed weekday {parsed} does not match {actual} for the resolved date")]
    WeekdayMismatch {
        parsed: crate::Weekday,
        actual: crate::Weekday,
    },
    /// Two tokens of equal priority captured different values for one field.
    #[error("conflicting values for {field}: {first} (from {first_token:?}) and {second} (from {second_token:?})")]
    Conflict {
        field: Field,
        first: i64,
        first_token: &'static str,
        second: i64,
        second_token: &'static str,
    },
    /// Offset or timestamp arithmetic left the supported years.
    #[error("resulting date is outside the supported range")]
    OutOfRange,
}

/// What the parser expected at the failing position.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Expected {
    #[display(fmt = "token {_0:?}")]
    Token(&'static str),
    #[display(fmt = "literal {_0:?}")]
    Literal(String),
}

/// Why a token or literal did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MatchFailure {
    /// No input was left.
    #[display(fmt = "input ended")]
    EndOfInput,
    /// Too few digits.
    #[display(fmt = "expected {min}..={max} digits")]
    ExpectedDigits { min: u8, max: u8 },
    /// The number is outside the field's range.
    #[display(fmt = "value {value} is not in {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    /// No locale name or alias is a prefix of the input.
    #[display(fmt = "no locale name matches")]
    UnknownName,
    /// Strict ordinal parsing found digits without the suffix.
    #[display(fmt = "numeral {_0} lacks the ordinal suffix")]
    MissingOrdinalSuffix(i64),
    /// An offset did not start with a sign.
    #[display(fmt = "expected `+` or `-`")]
    ExpectedSign,
    /// Literal text differs from the input.
    #[display(fmt = "text differs")]
    Literal,
}

/// Parsing failed. Nothing is returned on failure, not even a partial date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("expected {expected} at byte {position}: {reason}")]
    TokenMatch {
        expected: Expected,
        position: usize,
        reason: MatchFailure,
    },

    #[error("unconsumed input at byte {position}: {remaining:?}")]
    UnconsumedInput { position: usize, remaining: String },

    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

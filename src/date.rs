use crate::calendar::{self, WeekConfig};
use crate::consts::{
    ISO_DATE_FORMAT, ISO_DATE_TIME_FORMAT, MAX_HOUR, MAX_MILLISECOND, MAX_MINUTE, MAX_SECOND,
    MILLIS_PER_DAY, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::error::{DateError, ParseError};
use crate::locale::{EN_US, Locale};
use crate::options::{FormatOptions, ParseOptions};
use crate::segment::Format;
use crate::types::{Day, Month, Weekday, Year};
use std::fmt;
use std::str::FromStr;

/// A naive local wall-clock date and time with millisecond precision.
///
/// Values are immutable; every operation that "changes" a date returns a new
/// one. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

impl CalendarDate {
    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns a `DateError` if any component is out of range for the
    /// Gregorian calendar.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        })
    }

    /// Returns the same date at the given wall-clock time.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any time component is out of range.
    pub fn with_time(
        self,
        hour: i64,
        minute: i64,
        second: i64,
        millisecond: i64,
    ) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidTime {
            hour,
            minute,
            second,
            millisecond,
        };
        let in_range = |v: i64, max: u16| (0..=i64::from(max)).contains(&v);
        if !(in_range(hour, u16::from(MAX_HOUR))
            && in_range(minute, u16::from(MAX_MINUTE))
            && in_range(second, u16::from(MAX_SECOND))
            && in_range(millisecond, MAX_MILLISECOND))
        {
            return Err(invalid());
        }
        Ok(Self {
            hour: u8::try_from(hour).map_err(|_| invalid())?,
            minute: u8::try_from(minute).map_err(|_| invalid())?,
            second: u8::try_from(second).map_err(|_| invalid())?,
            millisecond: u16::try_from(millisecond).map_err(|_| invalid())?,
            ..self
        })
    }

    /// Creates a date from its day count relative to 1970-01-01, at midnight.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside the supported years.
    pub fn from_epoch_days(days: i64) -> Result<Self, DateError> {
        let (year, month, day) = calendar::civil_from_days(days);
        Self::new(i64::from(year), i64::from(month), i64::from(day))
            .map_err(|_| DateError::OutOfRange)
    }

    /// Creates a date from milliseconds relative to 1970-01-01T00:00:00.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside the supported years.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, DateError> {
        let days = millis.div_euclid(MILLIS_PER_DAY);
        let rem = millis.rem_euclid(MILLIS_PER_DAY);
        Self::from_epoch_days(days)?.with_time(
            rem / (60 * MILLIS_PER_MINUTE),
            rem / MILLIS_PER_MINUTE % 60,
            rem / MILLIS_PER_SECOND % 60,
            rem % MILLIS_PER_SECOND,
        )
    }

    pub const fn year(&self) -> i16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn quarter(&self) -> u8 {
        self.month.quarter()
    }

    /// Days since 1970-01-01.
    pub const fn epoch_days(&self) -> i64 {
        calendar::days_from_civil(self.year.get() as i32, self.month.get(), self.day.get())
    }

    /// Milliseconds since 1970-01-01T00:00:00, reading the wall clock as UTC.
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_days() * MILLIS_PER_DAY
            + self.hour as i64 * 60 * MILLIS_PER_MINUTE
            + self.minute as i64 * MILLIS_PER_MINUTE
            + self.second as i64 * MILLIS_PER_SECOND
            + self.millisecond as i64
    }

    pub const fn weekday(&self) -> Weekday {
        calendar::weekday_from_days(self.epoch_days())
    }

    pub const fn day_of_year(&self) -> u16 {
        calendar::day_of_year(self.year.get() as i32, self.month.get(), self.day.get())
    }

    pub const fn iso_week_year(&self) -> i32 {
        calendar::week_year(self.epoch_days(), WeekConfig::ISO)
    }

    pub const fn iso_week(&self) -> u8 {
        calendar::week_of_year(self.epoch_days(), WeekConfig::ISO)
    }

    /// Week-numbering year under the given week rules.
    pub const fn week_year(&self, config: WeekConfig) -> i32 {
        calendar::week_year(self.epoch_days(), config)
    }

    /// Week of the week-numbering year under the given week rules.
    pub const fn week(&self, config: WeekConfig) -> u8 {
        calendar::week_of_year(self.epoch_days(), config)
    }

    /// Midnight on the first day of the week containing this date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the week starts before the
    /// earliest supported date.
    pub fn start_of_week(&self, week_starts_on: Weekday) -> Result<Self, DateError> {
        Self::from_epoch_days(calendar::start_of_week(self.epoch_days(), week_starts_on))
    }

    /// Shifts the wall clock by a number of minutes.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn add_minutes(&self, minutes: i64) -> Result<Self, DateError> {
        minutes
            .checked_mul(MILLIS_PER_MINUTE)
            .and_then(|delta| self.epoch_millis().checked_add(delta))
            .ok_or(DateError::OutOfRange)
            .and_then(Self::from_epoch_millis)
    }

    /// Renders this date with a token format string and default options.
    ///
    /// # Errors
    /// Returns a `FormatError` if the format string does not compile.
    pub fn format(
        &self,
        format: &str,
        locale: &dyn Locale,
    ) -> Result<String, crate::error::FormatError> {
        crate::format::format(self, format, locale, &FormatOptions::default())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = Format::cached(ISO_DATE_TIME_FORMAT)
            .and_then(|format| format.render(self, EN_US, &FormatOptions::default()))
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Accepts `YYYY-MM-DDTHH:mm:ss.SSS` or a bare `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let reference = Self::default();
        let options = ParseOptions::default();
        Format::cached(ISO_DATE_TIME_FORMAT)?
            .parse(trimmed, &reference, EN_US, &options)
            .or_else(|full| {
                Format::cached(ISO_DATE_FORMAT)?
                    .parse(trimmed, &reference, EN_US, &options)
                    .map_err(|_| full)
            })
    }
}

impl Default for CalendarDate {
    /// 1970-01-01T00:00:00.000
    fn default() -> Self {
        Self {
            year: Year(1970),
            month: Month(std::num::NonZeroU8::MIN),
            day: Day(std::num::NonZeroU8::MIN),
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
        }
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

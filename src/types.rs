use crate::calendar::days_in_month;
use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::error::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`
/// (-9999..=9999). Astronomical numbering: year 0 is 1 BC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Year(pub(crate) i16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is out of range.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        i16::try_from(value)
            .map(Self)
            .map_err(|_| DateError::InvalidYear(value))
    }

    /// Returns the year value as i16
    #[inline]
    pub const fn get(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for Year {
    type Error = DateError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Year> for i16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(pub(crate) NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        u8::try_from(value)
            .ok()
            .filter(|m| *m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Quarter of the year this month falls in, `1..=4`
    #[inline]
    pub const fn quarter(self) -> u8 {
        (self.get() - 1) / crate::consts::MONTHS_IN_QUARTER + 1
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(pub(crate) NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: i64, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = || DateError::InvalidDay {
            year: i64::from(year.get()),
            month: month.get(),
            day: value,
        };
        let max_day = days_in_month(i32::from(year.get()), month.get());
        u8::try_from(value)
            .ok()
            .filter(|d| *d <= max_day)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        let invalid = DateError::InvalidDay {
            year: 0,
            month: 0,
            day: i64::from(value),
        };
        if value < MIN_DAY {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. The discriminant counts from Sunday, matching the `d`
/// token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Builds a weekday from a Sunday-based index, wrapping modulo 7.
    pub const fn from_sunday_zero(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// 0 for Sunday through 6 for Saturday.
    #[inline]
    pub const fn to_sunday_zero(self) -> u8 {
        self as u8
    }

    /// 1 for Monday through 7 for Sunday, as in ISO 8601.
    #[inline]
    pub const fn to_iso(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }

    /// Days from `start` forward to `self`, `0..=6`.
    #[inline]
    pub const fn days_since(self, start: Self) -> u8 {
        (self as u8 + 7 - start as u8) % 7
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(0).is_ok());
        assert!(Year::new(-9999).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(10000), Err(DateError::InvalidYear(10000))));
        assert!(matches!(Year::new(-10000), Err(DateError::InvalidYear(-10000))));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
        assert!(serde_json::from_str::<Year>("10000").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(256), Err(DateError::InvalidMonth(256))));
    }

    #[test]
    fn test_month_quarter() {
        let quarters: Vec<u8> = (1..=12).map(|m| Month::new(m).unwrap().quarter()).collect();
        assert_eq!(quarters, [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new() {
        let y2023 = Year::new(2023).unwrap();
        let y2024 = Year::new(2024).unwrap();
        let feb = Month::new(2).unwrap();
        let apr = Month::new(4).unwrap();

        assert!(Day::new(28, y2023, feb).is_ok());
        assert!(Day::new(29, y2023, feb).is_err());
        assert!(Day::new(29, y2024, feb).is_ok());
        assert!(Day::new(30, y2024, apr).is_ok());
        assert!(matches!(
            Day::new(31, y2024, apr),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(Day::new(0, y2024, apr).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_conversions() {
        assert_eq!(Weekday::from_sunday_zero(0), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_zero(7), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_zero(-1), Weekday::Saturday);
        assert_eq!(Weekday::Sunday.to_iso(), 7);
        assert_eq!(Weekday::Monday.to_iso(), 1);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Monday.days_since(Weekday::Sunday), 1);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Monday).unwrap();
        assert_eq!(json, r#""monday""#);
        let parsed: Weekday = serde_json::from_str(r#""sunday""#).unwrap();
        assert_eq!(parsed, Weekday::Sunday);
    }
}

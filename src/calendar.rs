//! Proleptic Gregorian calendar arithmetic.
//!
//! Everything here is a pure function over plain integers. Dates are
//! identified either by `(year, month, day)` or by their day count relative
//! to 1970-01-01 ("epoch days"), which makes week arithmetic a matter of
//! addition and modulo.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::types::Weekday;
use serde::{Deserialize, Serialize};

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days since 1970-01-01 for the given civil date.
///
/// Ref: <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
pub const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
///
/// Ref: <https://howardhinnant.github.io/date_algorithms.html#civil_from_days>
pub const fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m as u8, d as u8)
}

/// 1970-01-01 was a Thursday.
pub const fn weekday_from_days(days: i64) -> Weekday {
    Weekday::from_sunday_zero(days + 4)
}

/// 1-based ordinal of the day within its year.
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    (days_from_civil(year, month, day) - days_from_civil(year, JANUARY, 1) + 1) as u16
}

/// The day (as epoch days) on which the week containing `days` starts.
pub const fn start_of_week(days: i64, week_starts_on: Weekday) -> i64 {
    days - weekday_from_days(days).days_since(week_starts_on) as i64
}

/// How weeks are numbered: the weekday a week starts on, and which date of
/// January (1..=7) always falls into week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekConfig {
    pub week_starts_on: Weekday,
    pub first_week_contains_date: u8,
}

impl WeekConfig {
    /// ISO 8601: weeks start on Monday and week 1 contains January 4th.
    pub const ISO: Self = Self {
        week_starts_on: Weekday::Monday,
        first_week_contains_date: 4,
    };

    pub const fn is_valid(&self) -> bool {
        self.first_week_contains_date >= 1 && self.first_week_contains_date <= 7
    }
}

/// First day (as epoch days) of week 1 of the given week-numbering year.
pub const fn week_year_start(week_year: i32, config: WeekConfig) -> i64 {
    start_of_week(
        days_from_civil(week_year, JANUARY, config.first_week_contains_date),
        config.week_starts_on,
    )
}

/// The week-numbering year that `days` belongs to.
pub const fn week_year(days: i64, config: WeekConfig) -> i32 {
    let (year, _, _) = civil_from_days(days);
    if days >= week_year_start(year + 1, config) {
        year + 1
    } else if days >= week_year_start(year, config) {
        year
    } else {
        year - 1
    }
}

/// 1-based week of `days` within its week-numbering year.
pub const fn week_of_year(days: i64, config: WeekConfig) -> u8 {
    let start = week_year_start(week_year(days, config), config);
    ((days - start) / DAYS_IN_WEEK + 1) as u8
}

/// Number of weeks (52 or 53) in a week-numbering year.
pub const fn weeks_in_week_year(week_year: i32, config: WeekConfig) -> u8 {
    ((week_year_start(week_year + 1, config) - week_year_start(week_year, config)) / DAYS_IN_WEEK)
        as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero (1 BC)",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative, divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2024, month), 31, "Month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30, "Month {month}");
        }
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2100), 365);
    }

    #[test]
    fn test_epoch_days() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(1969, 12, 31), -1);
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(11_017), (2000, 3, 1));
    }

    #[test]
    fn test_epoch_days_roundtrip_across_range() {
        for year in [-9999, -401, -1, 0, 1, 1600, 1899, 1970, 2000, 2024, 9999] {
            for month in 1..=12 {
                for day in [1, days_in_month(year, month)] {
                    let days = days_from_civil(year, month, day);
                    assert_eq!(civil_from_days(days), (year, month, day));
                }
            }
        }
    }

    #[test]
    fn test_weekday_and_day_of_year() {
        assert_eq!(weekday_from_days(0), Weekday::Thursday);
        assert_eq!(weekday_from_days(days_from_civil(1986, 4, 4)), Weekday::Friday);
        assert_eq!(weekday_from_days(days_from_civil(2016, 1, 31)), Weekday::Sunday);
        assert_eq!(day_of_year(1992, 1, 1), 1);
        assert_eq!(day_of_year(2016, 4, 9), 100);
        assert_eq!(day_of_year(2024, 12, 31), 366);
    }

    #[test]
    fn test_start_of_week() {
        let tue = days_from_civil(2014, 9, 2);
        assert_eq!(start_of_week(tue, Weekday::Monday), days_from_civil(2014, 9, 1));
        assert_eq!(start_of_week(tue, Weekday::Sunday), days_from_civil(2014, 8, 31));
    }

    #[test]
    fn test_iso_weeks() {
        let iso = WeekConfig::ISO;
        // 2016-01-01 is a Friday and belongs to 2015-W53
        let d = days_from_civil(2016, 1, 1);
        assert_eq!(week_year(d, iso), 2015);
        assert_eq!(week_of_year(d, iso), 53);
        assert_eq!(weeks_in_week_year(2015, iso), 53);
        assert_eq!(weeks_in_week_year(2016, iso), 52);
        assert_eq!(week_year_start(2016, iso), days_from_civil(2016, 1, 4));
        // 1986-04-04 is in ISO week 14
        assert_eq!(week_of_year(days_from_civil(1986, 4, 4), iso), 14);
        // 2008-12-29 belongs to 2009-W01
        let d = days_from_civil(2008, 12, 29);
        assert_eq!(week_year(d, iso), 2009);
        assert_eq!(week_of_year(d, iso), 1);
    }

    #[test]
    fn test_locale_weeks() {
        let us = WeekConfig {
            week_starts_on: Weekday::Sunday,
            first_week_contains_date: 1,
        };
        // 2022-01-01 is a Saturday; its week starts on Sunday 2021-12-26
        let d = days_from_civil(2021, 12, 26);
        assert_eq!(week_year(d, us), 2022);
        assert_eq!(week_of_year(d, us), 1);
        assert_eq!(week_of_year(days_from_civil(2022, 1, 1), us), 1);
        assert_eq!(week_of_year(days_from_civil(2022, 1, 2), us), 2);
        // 2016-12-25 is a Sunday, but Jan 1 2017 starts the next week
        let d = days_from_civil(2016, 12, 25);
        assert_eq!(week_year(d, us), 2016);
        assert_eq!(week_of_year(d, us), 53);
        assert!(us.is_valid());
        assert!(!WeekConfig {
            week_starts_on: Weekday::Sunday,
            first_week_contains_date: 8,
        }
        .is_valid());
    }
}

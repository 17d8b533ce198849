//! Captured field values of one parse and their resolution into a date.

use crate::calendar::{self, WeekConfig};
use crate::consts::{DAYS_IN_WEEK, JANUARY, MILLIS_PER_MINUTE, MONTHS_IN_QUARTER};
use crate::date::CalendarDate;
use crate::error::DateError;
use crate::locale::{DayPeriod, Locale};
use crate::token::{FIELD_COUNT, Field, Token};
use crate::types::Weekday;

/// A value captured for a field, tagged with the token that captured it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub value: i64,
    pub priority: u8,
    pub token: &'static str,
}

/// How the calendar day is computed from the captured fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MonthDay,
    IsoWeek,
    LocalWeek,
    DayOfYear,
    YearOnly,
    WeekdayOnly,
    Reference,
}

/// Routes in the order they are tried. The first whose fields include a
/// captured one is taken; [`Route::Reference`] applies when none is.
pub const DATE_ROUTES: &[(Route, &[Field])] = &[
    (
        Route::MonthDay,
        &[Field::Month, Field::Quarter, Field::DayOfMonth],
    ),
    (Route::IsoWeek, &[Field::IsoWeekYear, Field::IsoWeek]),
    (Route::LocalWeek, &[Field::LocalWeekYear, Field::LocalWeek]),
    (Route::DayOfYear, &[Field::DayOfYear]),
    (Route::YearOnly, &[Field::Year, Field::YearOfEra]),
    (
        Route::WeekdayOnly,
        &[
            Field::DayOfWeek,
            Field::IsoDayOfWeek,
            Field::LocalDayOfWeek,
        ],
    ),
];

/// Weekday fields, highest priority first.
const WEEKDAY_FIELDS: [Field; 3] = [
    Field::DayOfWeek,
    Field::IsoDayOfWeek,
    Field::LocalDayOfWeek,
];

/// Captures of a single parse. One slot per [`Field`].
#[derive(Debug, Default, Clone)]
pub struct Draft {
    slots: [Option<Capture>; FIELD_COUNT],
}

impl Draft {
    /// Records `value` for the token's field.
    ///
    /// A capture with a lower priority than the one already held is
    /// ignored, a higher one replaces it.
    ///
    /// # Errors
    /// Returns `DateError::Conflict` when a token of equal priority already
    /// captured a different value.
    pub fn record(&mut self, token: &'static Token, value: i64) -> Result<(), DateError> {
        let slot = &mut self.slots[token.field.index()];
        if let Some(held) = *slot {
            if held.priority > token.priority {
                return Ok(());
            }
            if held.priority == token.priority {
                if held.value == value {
                    return Ok(());
                }
                return Err(DateError::Conflict {
                    field: token.field,
                    first: held.value,
                    first_token: held.token,
                    second: value,
                    second_token: token.literal,
                });
            }
        }
        *slot = Some(Capture {
            value,
            priority: token.priority,
            token: token.literal,
        });
        Ok(())
    }

    pub fn capture(&self, field: Field) -> Option<Capture> {
        self.slots[field.index()]
    }

    pub fn get(&self, field: Field) -> Option<i64> {
        self.capture(field).map(|c| c.value)
    }

    fn has(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }

    /// The first route in [`DATE_ROUTES`] with a captured field.
    pub fn route(&self) -> Route {
        DATE_ROUTES
            .iter()
            .find(|(_, fields)| fields.iter().any(|f| self.has(*f)))
            .map_or(Route::Reference, |(route, _)| *route)
    }

    /// Calendar year from `YYYY`/`YY`, or from `y` combined with an era
    /// (AD unless captured).
    fn year(&self) -> Option<i64> {
        self.get(Field::Year).or_else(|| {
            self.get(Field::YearOfEra).map(|year| match self.get(Field::Era) {
                Some(0) => 1 - year,
                _ => year,
            })
        })
    }

    /// The captured weekday with the highest priority, and the week rules
    /// "its week" refers to.
    fn weekday(&self, local: WeekConfig) -> Option<(Weekday, WeekConfig)> {
        WEEKDAY_FIELDS.iter().find_map(|&field| {
            let value = self.get(field)?;
            Some(match field {
                Field::IsoDayOfWeek => (Weekday::from_sunday_zero(value), WeekConfig::ISO),
                Field::LocalDayOfWeek => (
                    Weekday::from_sunday_zero(
                        i64::from(local.week_starts_on.to_sunday_zero()) + value,
                    ),
                    local,
                ),
                _ => (Weekday::from_sunday_zero(value), local),
            })
        })
    }

    /// Resolves the captures into one date.
    ///
    /// `reference` supplies whatever the captures leave open, `week` is the
    /// week numbering for `gg`/`w`/`e`/`d`, and `offset_minutes` is the
    /// offset of the returned wall clock.
    ///
    /// # Errors
    /// Returns a `DateError` if the captures describe no valid date or
    /// contradict each other.
    pub fn resolve(
        &self,
        reference: &CalendarDate,
        locale: &dyn Locale,
        week: WeekConfig,
        offset_minutes: i16,
    ) -> Result<CalendarDate, DateError> {
        let target_offset = i64::from(offset_minutes) * MILLIS_PER_MINUTE;
        if let Some(millis) = self.get(Field::Timestamp) {
            return millis
                .checked_add(target_offset)
                .ok_or(DateError::OutOfRange)
                .and_then(CalendarDate::from_epoch_millis);
        }

        let route = self.route();
        debug!("resolving captures through {route:?}");
        let date = self.resolve_day(route, reference, week)?;
        let date = self.apply_weekday(route, date, week)?;

        let (hour, minute, second, millisecond) = self.time(reference, locale);
        let date = date.with_time(hour, minute, second, millisecond)?;

        match self.get(Field::Offset) {
            Some(captured) => date.add_minutes(i64::from(offset_minutes) - captured),
            None => Ok(date),
        }
    }

    /// The calendar day. Fields coarser than every captured one come from
    /// `reference`; finer ones reset to their first value.
    fn resolve_day(
        &self,
        route: Route,
        reference: &CalendarDate,
        local: WeekConfig,
    ) -> Result<CalendarDate, DateError> {
        let year = self.year();
        match route {
            Route::MonthDay => {
                let month = self
                    .get(Field::Month)
                    .or_else(|| {
                        self.get(Field::Quarter)
                            .map(|q| (q - 1) * i64::from(MONTHS_IN_QUARTER) + 1)
                    })
                    .or_else(|| year.map(|_| i64::from(JANUARY)))
                    .unwrap_or_else(|| i64::from(reference.month()));
                CalendarDate::new(
                    year.unwrap_or_else(|| i64::from(reference.year())),
                    month,
                    self.get(Field::DayOfMonth).unwrap_or(1),
                )
            }
            Route::IsoWeek => self.resolve_week(
                self.get(Field::IsoWeekYear).or(year),
                self.get(Field::IsoWeek),
                reference,
                WeekConfig::ISO,
                local,
            ),
            Route::LocalWeek => self.resolve_week(
                self.get(Field::LocalWeekYear).or(year),
                self.get(Field::LocalWeek),
                reference,
                local,
                local,
            ),
            Route::DayOfYear => {
                let year = year.unwrap_or_else(|| i64::from(reference.year()));
                let day = self.get(Field::DayOfYear).unwrap_or(1);
                let jan_first = CalendarDate::new(year, i64::from(JANUARY), 1)?;
                let length = calendar::days_in_year(i32::from(jan_first.year()));
                if day > i64::from(length) {
                    return Err(DateError::InvalidDayOfYear { year, day });
                }
                CalendarDate::from_epoch_days(jan_first.epoch_days() + day - 1)
            }
            Route::YearOnly => {
                CalendarDate::new(year.unwrap_or_else(|| i64::from(reference.year())), 1, 1)
            }
            Route::WeekdayOnly | Route::Reference => CalendarDate::new(
                i64::from(reference.year()),
                i64::from(reference.month()),
                i64::from(reference.day()),
            ),
        }
    }

    fn resolve_week(
        &self,
        week_year: Option<i64>,
        week: Option<i64>,
        reference: &CalendarDate,
        config: WeekConfig,
        local: WeekConfig,
    ) -> Result<CalendarDate, DateError> {
        let week = week.unwrap_or_else(|| {
            if week_year.is_some() {
                1
            } else {
                i64::from(reference.week(config))
            }
        });
        let week_year = week_year.unwrap_or_else(|| i64::from(reference.week_year(config)));
        let year = i32::try_from(week_year).map_err(|_| DateError::InvalidYear(week_year))?;

        if week > i64::from(calendar::weeks_in_week_year(year, config)) {
            return Err(DateError::InvalidWeek {
                year: week_year,
                week,
            });
        }
        let offset = self.weekday(local).map_or(0, |(weekday, _)| {
            i64::from(weekday.days_since(config.week_starts_on))
        });
        let days = calendar::week_year_start(year, config) + (week - 1) * DAYS_IN_WEEK + offset;
        CalendarDate::from_epoch_days(days)
    }

    /// Checks or applies the captured weekday.
    fn apply_weekday(
        &self,
        route: Route,
        date: CalendarDate,
        local: WeekConfig,
    ) -> Result<CalendarDate, DateError> {
        let Some((weekday, week)) = self.weekday(local) else {
            return Ok(date);
        };
        match route {
            Route::IsoWeek | Route::LocalWeek => Ok(date),
            Route::DayOfYear => check_weekday(weekday, date),
            Route::MonthDay if self.has(Field::DayOfMonth) => check_weekday(weekday, date),
            Route::MonthDay | Route::YearOnly | Route::WeekdayOnly | Route::Reference => {
                let start = calendar::start_of_week(date.epoch_days(), week.week_starts_on);
                CalendarDate::from_epoch_days(
                    start + i64::from(weekday.days_since(week.week_starts_on)),
                )
            }
        }
    }

    /// Hour, minute, second and millisecond.
    fn time(&self, reference: &CalendarDate, locale: &dyn Locale) -> (i64, i64, i64, i64) {
        let captured = [
            self.hour(locale),
            self.get(Field::Minute),
            self.get(Field::Second),
            self.get(Field::Millisecond),
        ];
        let from_reference = [
            i64::from(reference.hour()),
            i64::from(reference.minute()),
            i64::from(reference.second()),
            i64::from(reference.millisecond()),
        ];
        let any_date = self
            .slots
            .iter()
            .zip(ALL_FIELDS)
            .any(|(slot, field)| slot.is_some() && field.is_date());
        let coarsest = if any_date {
            0
        } else {
            captured
                .iter()
                .position(Option::is_some)
                .unwrap_or(captured.len())
        };

        let mut out = [0; 4];
        for (i, value) in out.iter_mut().enumerate() {
            *value = captured[i].unwrap_or(if i < coarsest { from_reference[i] } else { 0 });
        }
        (out[0], out[1], out[2], out[3])
    }

    /// Hour of the day: `H` wins, otherwise `h` read through the day period.
    fn hour(&self, locale: &dyn Locale) -> Option<i64> {
        if let Some(hour) = self.get(Field::Hour24) {
            return Some(hour);
        }
        let period = self
            .get(Field::DayPeriod)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| locale.day_periods().get(index));
        match (self.get(Field::Hour12), period) {
            (Some(hour), Some(period)) => Some(hour_in_period(hour, period)),
            (Some(hour), None) => Some(hour),
            (None, Some(period)) => Some(i64::from(period.start_hour)),
            (None, None) => None,
        }
    }
}

const ALL_FIELDS: [Field; FIELD_COUNT] = [
    Field::Timestamp,
    Field::Era,
    Field::YearOfEra,
    Field::Year,
    Field::IsoWeekYear,
    Field::LocalWeekYear,
    Field::Quarter,
    Field::Month,
    Field::IsoWeek,
    Field::LocalWeek,
    Field::DayOfMonth,
    Field::DayOfYear,
    Field::DayOfWeek,
    Field::IsoDayOfWeek,
    Field::LocalDayOfWeek,
    Field::DayPeriod,
    Field::Hour24,
    Field::Hour12,
    Field::Minute,
    Field::Second,
    Field::Millisecond,
    Field::Offset,
];

/// The 24-hour reading of a 1-12 `hour` that falls in `period`. When
/// neither reading does, the half of the day the period starts in.
fn hour_in_period(hour: i64, period: &DayPeriod) -> i64 {
    let am = hour % 12;
    let pm = am + 12;
    let fits = |h: i64| u8::try_from(h).is_ok_and(|h| period.contains(h));
    if fits(am) {
        am
    } else if fits(pm) || period.start_hour >= 12 {
        pm
    } else {
        am
    }
}

fn check_weekday(parsed: Weekday, date: CalendarDate) -> Result<CalendarDate, DateError> {
    let actual = date.weekday();
    if parsed == actual {
        Ok(date)
    } else {
        Err(DateError::WeekdayMismatch { parsed, actual })
    }
}

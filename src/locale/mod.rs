//! Locale plug-ins: every piece of language text the engine renders or
//! matches comes through the [`Locale`] trait.
//!
//! [`LocaleData`] implements the trait from `const` tables. Table sizes are
//! part of the types (`NameSet<12>` for months, `NameSet<7>` for weekdays),
//! so a locale that forgets a name does not compile.

mod distance;
mod en_us;
mod eo;
mod ru;

pub use distance::{Distance, Plural, Tense};
pub use en_us::EN_US;
pub use eo::EO;
pub use ru::RU;

use crate::calendar::WeekConfig;
use crate::consts::MAX_HOUR;
use crate::error::FormatError;
use crate::prelude::*;
use std::fmt;

/// Number of eras every locale names (BC, AD).
pub const ERA_COUNT: usize = 2;
/// Bounds on how many day periods a locale may split the day into.
pub const MIN_DAY_PERIODS: usize = 2;
pub const MAX_DAY_PERIODS: usize = 5;

/// Which family of names a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NameUnit {
    #[display(fmt = "era")]
    Era,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "weekday")]
    Weekday,
    #[display(fmt = "day period")]
    DayPeriod,
}

/// Name width. Ordered from shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    Narrow = 0,
    Abbreviated = 1,
    Wide = 2,
}

impl Width {
    /// Widest first, the order in which names are tried when parsing.
    pub const WIDEST_FIRST: [Self; 3] = [Self::Wide, Self::Abbreviated, Self::Narrow];
}

/// Grammatical setting of a name. Some languages decline a month name
/// that follows a day number ("4 апреля") but not one that stands alone
/// ("апрель").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameContext {
    #[default]
    Standalone,
    /// The name follows a day of month.
    Formatting,
}

/// What an ordinal number counts. Some languages inflect the suffix by the
/// grammatical gender of the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrdinalUnit {
    Quarter,
    Month,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    Week,
}

/// A named part of the day covering the inclusive hour range
/// `start_hour..=end_hour`. The range wraps past midnight when
/// `start_hour > end_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPeriod {
    pub start_hour: u8,
    pub end_hour: u8,
    /// Indexed by [`Width`].
    pub names: [&'static str; 3],
}

impl DayPeriod {
    pub const fn contains(&self, hour: u8) -> bool {
        if self.start_hour <= self.end_hour {
            self.start_hour <= hour && hour <= self.end_hour
        } else {
            hour >= self.start_hour || hour <= self.end_hour
        }
    }

    pub const fn name(&self, width: Width) -> &'static str {
        self.names[width as usize]
    }
}

/// Locale capability bundle. Implementations must be immutable and
/// shareable across threads.
pub trait Locale: Send + Sync + fmt::Debug {
    /// BCP 47 style code, e.g. `en-US`.
    fn code(&self) -> &str;

    /// Name of the `index`th member of `unit` (0-based; weekdays count
    /// from Sunday).
    fn name(&self, unit: NameUnit, index: usize, width: Width) -> &str;

    /// Name of the `index`th member of `unit` as written after a day of
    /// month. Defaults to [`Locale::name`].
    fn formatting_name(&self, unit: NameUnit, index: usize, width: Width) -> &str {
        self.name(unit, index, width)
    }

    /// [`Locale::name`] or [`Locale::formatting_name`], by `context`.
    fn name_in(&self, context: NameContext, unit: NameUnit, index: usize, width: Width) -> &str {
        match context {
            NameContext::Standalone => self.name(unit, index, width),
            NameContext::Formatting => self.formatting_name(unit, index, width),
        }
    }

    /// `n` with its ordinal suffix, inflected for `unit`.
    fn ordinal(&self, n: i64, unit: OrdinalUnit) -> String;

    /// A phrase for `count` units of `distance`, placed by `tense`.
    fn distance(&self, distance: Distance, count: i64, tense: Tense) -> String;

    fn day_periods(&self) -> &[DayPeriod];

    fn week(&self) -> WeekConfig;

    /// Number of members in `unit`.
    fn unit_len(&self, unit: NameUnit) -> usize {
        match unit {
            NameUnit::Era => ERA_COUNT,
            NameUnit::Quarter => 4,
            NameUnit::Month => 12,
            NameUnit::Weekday => 7,
            NameUnit::DayPeriod => self.day_periods().len(),
        }
    }

    /// Index of the day period containing `hour`.
    fn day_period_of(&self, hour: u8) -> Option<usize> {
        self.day_periods().iter().position(|p| p.contains(hour))
    }

    /// Extra spellings accepted by [`Locale::parse_name`] after the
    /// rendered names fail.
    fn aliases(&self) -> &[Alias] {
        &[]
    }

    /// Matches a name of `unit` at the start of `input`, ignoring case.
    ///
    /// Widths are tried from wide down to `width`. Within one width the
    /// standalone and formatting names compete and the longest match wins,
    /// so neither an abbreviation nor a stem ("март" in "марта") cuts a
    /// longer name short. Returns the member index and the unconsumed input.
    fn parse_name<'i>(
        &self,
        unit: NameUnit,
        input: &'i str,
        width: Width,
    ) -> Option<(usize, &'i str)> {
        Width::WIDEST_FIRST
            .into_iter()
            .filter(|w| *w >= width)
            .find_map(|w| {
                let members = 0..self.unit_len(unit);
                let standalone = members.clone().map(|i| (i, self.name(unit, i, w)));
                let formatting = members.map(|i| (i, self.formatting_name(unit, i, w)));
                longest_match(input, standalone.chain(formatting))
            })
            .or_else(|| {
                longest_match(
                    input,
                    self.aliases()
                        .iter()
                        .filter(|a| a.unit == unit)
                        .map(|a| (a.index, a.text)),
                )
            })
    }
}

/// Longest candidate that prefixes `input`, ignoring case.
pub(crate) fn longest_match<'i, 'n>(
    input: &'i str,
    candidates: impl IntoIterator<Item = (usize, &'n str)>,
) -> Option<(usize, &'i str)> {
    candidates
        .into_iter()
        .filter(|(_, name)| !name.is_empty())
        .filter_map(|(index, name)| strip_prefix_ignore_case(input, name).map(|rest| (index, rest)))
        .min_by_key(|(_, rest)| rest.len())
}

/// Like `str::strip_prefix`, comparing chars by their Unicode lowercase
/// mapping.
pub(crate) fn strip_prefix_ignore_case<'i>(input: &'i str, prefix: &str) -> Option<&'i str> {
    let mut chars = input.char_indices();
    let mut consumed = 0;
    for expected in prefix.chars() {
        let (at, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        consumed = at + actual.len_utf8();
    }
    input.get(consumed..)
}

/// The same set of names at every width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSet<const N: usize> {
    pub narrow: [&'static str; N],
    pub abbreviated: [&'static str; N],
    pub wide: [&'static str; N],
}

impl<const N: usize> NameSet<N> {
    pub const fn get(&self, width: Width) -> &[&'static str; N] {
        match width {
            Width::Narrow => &self.narrow,
            Width::Abbreviated => &self.abbreviated,
            Width::Wide => &self.wide,
        }
    }
}

/// An extra spelling accepted when parsing, never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub unit: NameUnit,
    pub index: usize,
    pub text: &'static str,
}

/// Table-driven [`Locale`].
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    pub code: &'static str,
    pub eras: NameSet<ERA_COUNT>,
    pub quarters: NameSet<4>,
    pub months: NameSet<12>,
    /// Month names after a day of month, when they differ from `months`.
    pub months_formatting: Option<NameSet<12>>,
    /// Sunday first.
    pub weekdays: NameSet<7>,
    pub day_periods: &'static [DayPeriod],
    pub aliases: &'static [Alias],
    pub ordinal: fn(i64, OrdinalUnit) -> String,
    pub distance: fn(Distance, i64, Tense) -> String,
    pub week: WeekConfig,
}

/// Why a [`LocaleData`] table is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("locale {code} has {count} day periods (must be 2..=5)")]
    DayPeriodCount { code: &'static str, count: usize },
    #[error("locale {code} covers hour {hour} with {count} day periods (must be exactly 1)")]
    DayPeriodCoverage {
        code: &'static str,
        hour: u8,
        count: usize,
    },
    #[error("locale {code} has an out-of-range day period {start}..={end}")]
    DayPeriodBounds {
        code: &'static str,
        start: u8,
        end: u8,
    },
    #[error("locale {code} has an invalid alias for {unit} #{index}")]
    Alias {
        code: &'static str,
        unit: NameUnit,
        index: usize,
    },
    #[error(transparent)]
    Week(#[from] FormatError),
}

impl LocaleData {
    /// Checks the invariants the type system cannot: day periods partition
    /// the 24 hours, aliases point at existing members and the week rules
    /// are in range.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), LocaleError> {
        let code = self.code;
        let count = self.day_periods.len();
        if !(MIN_DAY_PERIODS..=MAX_DAY_PERIODS).contains(&count) {
            return Err(LocaleError::DayPeriodCount { code, count });
        }
        if let Some(p) = self
            .day_periods
            .iter()
            .find(|p| p.start_hour > MAX_HOUR || p.end_hour > MAX_HOUR)
        {
            return Err(LocaleError::DayPeriodBounds {
                code,
                start: p.start_hour,
                end: p.end_hour,
            });
        }
        for hour in 0..=MAX_HOUR {
            let count = self.day_periods.iter().filter(|p| p.contains(hour)).count();
            if count != 1 {
                return Err(LocaleError::DayPeriodCoverage { code, hour, count });
            }
        }
        if let Some(alias) = self
            .aliases
            .iter()
            .find(|a| a.text.is_empty() || a.index >= self.unit_len(a.unit))
        {
            return Err(LocaleError::Alias {
                code,
                unit: alias.unit,
                index: alias.index,
            });
        }
        if !self.week.is_valid() {
            return Err(FormatError::InvalidWeekConfig(self.week.first_week_contains_date).into());
        }
        Ok(())
    }
}

impl Locale for LocaleData {
    fn code(&self) -> &str {
        self.code
    }

    fn name(&self, unit: NameUnit, index: usize, width: Width) -> &str {
        let name = match unit {
            NameUnit::Era => self.eras.get(width).get(index),
            NameUnit::Quarter => self.quarters.get(width).get(index),
            NameUnit::Month => self.months.get(width).get(index),
            NameUnit::Weekday => self.weekdays.get(width).get(index),
            NameUnit::DayPeriod => self.day_periods.get(index).map(|p| &p.names[width as usize]),
        };
        name.copied().unwrap_or_else(|| {
            warn!("locale {} has no {unit} name at index {index}", self.code);
            ""
        })
    }

    fn formatting_name(&self, unit: NameUnit, index: usize, width: Width) -> &str {
        match (unit, &self.months_formatting) {
            (NameUnit::Month, Some(months)) => months
                .get(width)
                .get(index)
                .map_or_else(|| self.name(unit, index, width), |name| *name),
            _ => self.name(unit, index, width),
        }
    }

    fn ordinal(&self, n: i64, unit: OrdinalUnit) -> String {
        (self.ordinal)(n, unit)
    }

    fn distance(&self, distance: Distance, count: i64, tense: Tense) -> String {
        (self.distance)(distance, count, tense)
    }

    fn day_periods(&self) -> &[DayPeriod] {
        self.day_periods
    }

    fn week(&self) -> WeekConfig {
        self.week
    }

    fn aliases(&self) -> &[Alias] {
        self.aliases
    }
}

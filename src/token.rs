//! The static token table.
//!
//! Every format token is one [`Token`] entry: the calendar [`Field`] it
//! reads or captures, the [`Style`] it is written in, the priority it
//! carries when several tokens capture the same field, and whether it needs
//! an explicit opt-in. Rendering and matching for a token live side by side.

use crate::calendar::WeekConfig;
use crate::consts::{MAX_OFFSET_MINUTES, MAX_YEAR, MIN_YEAR, TWO_DIGIT_YEAR_WINDOW};
use crate::date::CalendarDate;
use crate::error::MatchFailure;
use crate::locale::{Locale, NameContext, NameUnit, OrdinalUnit, Width, strip_prefix_ignore_case};
use crate::options::TokenOptions;
use crate::prelude::*;
use std::borrow::Cow;

/// A calendar field a token reads when rendering and captures when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[display(fmt = "timestamp")]
    Timestamp,
    #[display(fmt = "era")]
    Era,
    #[display(fmt = "year of era")]
    YearOfEra,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "ISO week-numbering year")]
    IsoWeekYear,
    #[display(fmt = "local week-numbering year")]
    LocalWeekYear,
    #[display(fmt = "quarter")]
    Quarter,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "ISO week")]
    IsoWeek,
    #[display(fmt = "local week")]
    LocalWeek,
    #[display(fmt = "day of month")]
    DayOfMonth,
    #[display(fmt = "day of year")]
    DayOfYear,
    #[display(fmt = "day of week")]
    DayOfWeek,
    #[display(fmt = "ISO day of week")]
    IsoDayOfWeek,
    #[display(fmt = "local day of week")]
    LocalDayOfWeek,
    #[display(fmt = "day period")]
    DayPeriod,
    #[display(fmt = "hour")]
    Hour24,
    #[display(fmt = "hour of day period")]
    Hour12,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    #[display(fmt = "offset")]
    Offset,
}

pub const FIELD_COUNT: usize = Field::Offset as usize + 1;

impl Field {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Values a captured number may take, inclusive.
    pub const fn range(self) -> (i64, i64) {
        match self {
            Self::Timestamp => (i64::MIN, i64::MAX),
            Self::Era => (0, 1),
            Self::YearOfEra => (1, -(MIN_YEAR as i64) + 1),
            Self::Year | Self::IsoWeekYear | Self::LocalWeekYear => {
                (MIN_YEAR as i64, MAX_YEAR as i64)
            }
            Self::Quarter => (1, 4),
            Self::Month => (1, 12),
            Self::IsoWeek | Self::LocalWeek => (1, 53),
            Self::DayOfMonth => (1, 31),
            Self::DayOfYear => (1, 366),
            Self::DayOfWeek | Self::LocalDayOfWeek => (0, 6),
            Self::IsoDayOfWeek => (1, 7),
            Self::DayPeriod => (0, crate::locale::MAX_DAY_PERIODS as i64 - 1),
            Self::Hour24 => (0, 23),
            Self::Hour12 => (1, 12),
            Self::Minute | Self::Second => (0, 59),
            Self::Millisecond => (0, 999),
            Self::Offset => (-(MAX_OFFSET_MINUTES as i64), MAX_OFFSET_MINUTES as i64),
        }
    }

    /// Fields that pin down a calendar day (or part of one), as opposed to
    /// a time of day.
    pub const fn is_date(self) -> bool {
        matches!(
            self,
            Self::Era
                | Self::YearOfEra
                | Self::Year
                | Self::IsoWeekYear
                | Self::LocalWeekYear
                | Self::Quarter
                | Self::Month
                | Self::IsoWeek
                | Self::LocalWeek
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::DayOfWeek
                | Self::IsoDayOfWeek
                | Self::LocalDayOfWeek
        )
    }
}

/// How a token writes its field and reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Decimal, zero-padded to `min_digits`; parsing accepts
    /// `min_digits..=max_digits` digits.
    Number { min_digits: u8, max_digits: u8 },
    /// Four digits with a leading `-` before year 0 (`-0044`).
    SignedYear,
    /// Last two digits; parsing expands them around the reference year.
    TwoDigitYear,
    /// Digits followed by the locale's ordinal suffix.
    Ordinal { max_digits: u8, unit: OrdinalUnit },
    /// A locale name.
    Name { unit: NameUnit, width: Width },
    /// Leading digits of the millisecond.
    Fraction { digits: u8 },
    /// `+hh:mm` with `colon`, `+hhmm` without.
    Offset { colon: bool },
    /// Signed integer seconds, or milliseconds with `millis`.
    Timestamp { millis: bool },
}

/// Tokens that are easy to mistake for a more common one and therefore
/// need an opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protection {
    /// `GG`/`GGGG`/`gg`/`gggg`, usually meant as `YY`/`YYYY`.
    WeekYear,
    /// `DDD`/`DDDo`/`DDDD`, usually meant as `D`/`DD`.
    DayOfYear,
}

impl Protection {
    /// Name of the `TokenOptions` flag that lifts the protection.
    pub const fn option(self) -> &'static str {
        match self {
            Self::WeekYear => "use_additional_week_year_tokens",
            Self::DayOfYear => "use_additional_day_of_year_tokens",
        }
    }

    pub const fn is_allowed(self, options: &TokenOptions) -> bool {
        match self {
            Self::WeekYear => options.use_additional_week_year_tokens,
            Self::DayOfYear => options.use_additional_day_of_year_tokens,
        }
    }
}

/// One entry of [`TOKENS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The token as written in a format string.
    pub literal: &'static str,
    /// Field rendered from the date and captured by parsing.
    pub field: Field,
    /// How the field is written and read back.
    pub style: Style,
    /// Higher wins when several tokens capture the same field.
    pub priority: u8,
    /// Opt-in required before the token may be used.
    pub protection: Option<Protection>,
}

const fn token(literal: &'static str, field: Field, style: Style, priority: u8) -> Token {
    Token {
        literal,
        field,
        style,
        priority,
        protection: None,
    }
}

const fn protected(token: Token, protection: Protection) -> Token {
    Token {
        protection: Some(protection),
        ..token
    }
}

const fn num(min_digits: u8, max_digits: u8) -> Style {
    Style::Number {
        min_digits,
        max_digits,
    }
}

const fn ord(max_digits: u8, unit: OrdinalUnit) -> Style {
    Style::Ordinal { max_digits, unit }
}

const fn name(unit: NameUnit, width: Width) -> Style {
    Style::Name { unit, width }
}

use Field as F;
use NameUnit as U;
use OrdinalUnit as O;
use Protection as P;
use Width as W;

/// Every token, longest literal first so a prefix scan finds the longest
/// match.
pub static TOKENS: &[Token] = &[
    token("NNNNN", F::Era, name(U::Era, W::Narrow), 140),
    token("QQQQQ", F::Quarter, name(U::Quarter, W::Narrow), 120),
    token("MMMMM", F::Month, name(U::Month, W::Narrow), 110),
    token("NNNN", F::Era, name(U::Era, W::Wide), 140),
    token("YYYY", F::Year, Style::SignedYear, 130),
    token("QQQQ", F::Quarter, name(U::Quarter, W::Wide), 120),
    token("MMMM", F::Month, name(U::Month, W::Wide), 110),
    protected(
        token("GGGG", F::IsoWeekYear, Style::SignedYear, 105),
        P::WeekYear,
    ),
    protected(
        token("gggg", F::LocalWeekYear, Style::SignedYear, 98),
        P::WeekYear,
    ),
    protected(
        token("DDDo", F::DayOfYear, ord(3, O::DayOfYear), 85),
        P::DayOfYear,
    ),
    protected(token("DDDD", F::DayOfYear, num(3, 3), 85), P::DayOfYear),
    token("dddd", F::DayOfWeek, name(U::Weekday, W::Wide), 80),
    token("QQQ", F::Quarter, name(U::Quarter, W::Abbreviated), 120),
    token("MMM", F::Month, name(U::Month, W::Abbreviated), 110),
    protected(token("DDD", F::DayOfYear, num(1, 3), 85), P::DayOfYear),
    token("ddd", F::DayOfWeek, name(U::Weekday, W::Abbreviated), 80),
    token("SSS", F::Millisecond, Style::Fraction { digits: 3 }, 45),
    token("YY", F::Year, Style::TwoDigitYear, 125),
    token("Qo", F::Quarter, ord(1, O::Quarter), 120),
    token("Mo", F::Month, ord(2, O::Month), 110),
    token("MM", F::Month, num(2, 2), 110),
    protected(
        token("GG", F::IsoWeekYear, Style::TwoDigitYear, 100),
        P::WeekYear,
    ),
    token("Wo", F::IsoWeek, ord(2, O::Week), 100),
    token("WW", F::IsoWeek, num(2, 2), 100),
    protected(
        token("gg", F::LocalWeekYear, Style::TwoDigitYear, 95),
        P::WeekYear,
    ),
    token("wo", F::LocalWeek, ord(2, O::Week), 95),
    token("ww", F::LocalWeek, num(2, 2), 95),
    token("Do", F::DayOfMonth, ord(2, O::DayOfMonth), 90),
    token("DD", F::DayOfMonth, num(2, 2), 90),
    token("do", F::DayOfWeek, ord(1, O::DayOfWeek), 80),
    token("dd", F::DayOfWeek, name(U::Weekday, W::Narrow), 80),
    token("aa", F::DayPeriod, name(U::DayPeriod, W::Wide), 70),
    token("HH", F::Hour24, num(2, 2), 65),
    token("hh", F::Hour12, num(2, 2), 60),
    token("mm", F::Minute, num(2, 2), 55),
    token("ss", F::Second, num(2, 2), 50),
    token("SS", F::Millisecond, Style::Fraction { digits: 2 }, 45),
    token("ZZ", F::Offset, Style::Offset { colon: false }, 20),
    token("X", F::Timestamp, Style::Timestamp { millis: false }, 150),
    token("x", F::Timestamp, Style::Timestamp { millis: true }, 150),
    token("N", F::Era, name(U::Era, W::Abbreviated), 140),
    token("y", F::YearOfEra, num(1, 5), 130),
    token("Q", F::Quarter, num(1, 1), 120),
    token("M", F::Month, num(1, 2), 110),
    token("W", F::IsoWeek, num(1, 2), 100),
    token("w", F::LocalWeek, num(1, 2), 95),
    token("D", F::DayOfMonth, num(1, 2), 90),
    token("d", F::DayOfWeek, num(1, 1), 80),
    token("E", F::IsoDayOfWeek, num(1, 1), 79),
    token("e", F::LocalDayOfWeek, num(1, 1), 78),
    token("A", F::DayPeriod, name(U::DayPeriod, W::Abbreviated), 70),
    token("a", F::DayPeriod, name(U::DayPeriod, W::Narrow), 70),
    token("H", F::Hour24, num(1, 2), 65),
    token("h", F::Hour12, num(1, 2), 60),
    token("m", F::Minute, num(1, 2), 55),
    token("s", F::Second, num(1, 2), 50),
    token("S", F::Millisecond, Style::Fraction { digits: 1 }, 45),
    token("Z", F::Offset, Style::Offset { colon: true }, 20),
];

/// The longest token whose literal starts `text`.
pub fn lookup(text: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|t| text.starts_with(t.literal))
}

/// Everything a token needs to render a date.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub date: &'a CalendarDate,
    pub locale: &'a dyn Locale,
    pub week: WeekConfig,
    pub offset_minutes: i16,
    /// Which form of a name to write.
    pub name_context: NameContext,
}

/// Everything a token needs to match input.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub locale: &'a dyn Locale,
    pub reference_year: i32,
    pub lenient_ordinals: bool,
}

impl Token {
    /// The field value of `ctx.date` this token renders.
    fn value(&self, ctx: &RenderContext<'_>) -> i64 {
        let date = ctx.date;
        let year = i64::from(date.year());
        match self.field {
            Field::Timestamp => date.epoch_millis() - i64::from(ctx.offset_minutes) * 60_000,
            Field::Era => i64::from(year > 0),
            Field::YearOfEra => {
                if year > 0 {
                    year
                } else {
                    1 - year
                }
            }
            Field::Year => year,
            Field::IsoWeekYear => i64::from(date.iso_week_year()),
            Field::LocalWeekYear => i64::from(date.week_year(ctx.week)),
            Field::Quarter => i64::from(date.quarter()),
            Field::Month => i64::from(date.month()),
            Field::IsoWeek => i64::from(date.iso_week()),
            Field::LocalWeek => i64::from(date.week(ctx.week)),
            Field::DayOfMonth => i64::from(date.day()),
            Field::DayOfYear => i64::from(date.day_of_year()),
            Field::DayOfWeek => i64::from(date.weekday().to_sunday_zero()),
            Field::IsoDayOfWeek => i64::from(date.weekday().to_iso()),
            Field::LocalDayOfWeek => {
                i64::from(date.weekday().days_since(ctx.week.week_starts_on))
            }
            Field::DayPeriod => ctx
                .locale
                .day_period_of(date.hour())
                .map_or(0, |i| i as i64),
            Field::Hour24 => i64::from(date.hour()),
            Field::Hour12 => match date.hour() % 12 {
                0 => 12,
                h => i64::from(h),
            },
            Field::Minute => i64::from(date.minute()),
            Field::Second => i64::from(date.second()),
            Field::Millisecond => i64::from(date.millisecond()),
            Field::Offset => i64::from(ctx.offset_minutes),
        }
    }

    /// Renders this token's field of `ctx.date`.
    pub fn render<'a>(&self, ctx: &RenderContext<'a>) -> Cow<'a, str> {
        let value = self.value(ctx);
        match self.style {
            Style::Number { min_digits, .. } => {
                Cow::Owned(format!("{value:0width$}", width = usize::from(min_digits)))
            }
            Style::SignedYear => {
                if value < 0 {
                    Cow::Owned(format!("-{:04}", value.unsigned_abs()))
                } else {
                    Cow::Owned(format!("{value:04}"))
                }
            }
            Style::TwoDigitYear => Cow::Owned(format!("{:02}", value.rem_euclid(100))),
            Style::Ordinal { unit, .. } => Cow::Owned(ctx.locale.ordinal(value, unit)),
            Style::Name { unit, width } => {
                let index = name_index(unit, value);
                Cow::Borrowed(ctx.locale.name_in(ctx.name_context, unit, index, width))
            }
            Style::Fraction { digits } => {
                let scaled = value / 10_i64.pow(3 - u32::from(digits));
                Cow::Owned(format!("{scaled:0width$}", width = usize::from(digits)))
            }
            Style::Offset { colon } => {
                let sign = if value < 0 { '-' } else { '+' };
                let abs = value.unsigned_abs();
                let separator = if colon { ":" } else { "" };
                Cow::Owned(format!("{sign}{:02}{separator}{:02}", abs / 60, abs % 60))
            }
            Style::Timestamp { millis } => {
                let value = if millis { value } else { value.div_euclid(1_000) };
                Cow::Owned(value.to_string())
            }
        }
    }

    /// Matches this token at the start of `input`.
    ///
    /// Returns the captured value (month 1-12, name index, milliseconds
    /// for timestamps, minutes for offsets, ...) and the number of bytes
    /// consumed.
    ///
    /// # Errors
    /// Returns why the input does not start with this token.
    pub fn matches(
        &self,
        input: &str,
        ctx: &MatchContext<'_>,
    ) -> Result<(i64, usize), MatchFailure> {
        if input.is_empty() {
            return Err(MatchFailure::EndOfInput);
        }
        let (value, consumed) = match self.style {
            Style::Number {
                min_digits,
                max_digits,
            } => digits(input, min_digits, max_digits)?,
            Style::SignedYear => {
                let (negative, sign_len) = sign(input);
                let (value, len) = digits(&input[sign_len..], 4, 4)?;
                (if negative { -value } else { value }, sign_len + len)
            }
            Style::TwoDigitYear => {
                let (value, len) = digits(input, 2, 2)?;
                (expand_two_digit_year(value, ctx.reference_year), len)
            }
            Style::Ordinal { max_digits, unit } => {
                let (value, len) = digits(input, 1, max_digits)?;
                let rendered = ctx.locale.ordinal(value, unit);
                match strip_prefix_ignore_case(input, &rendered) {
                    Some(rest) => (value, input.len() - rest.len()),
                    None if ctx.lenient_ordinals => (value, len),
                    None => return Err(MatchFailure::MissingOrdinalSuffix(value)),
                }
            }
            Style::Name { unit, width } => {
                let (index, rest) = ctx
                    .locale
                    .parse_name(unit, input, width)
                    .ok_or(MatchFailure::UnknownName)?;
                let value = match unit {
                    NameUnit::Quarter | NameUnit::Month => index as i64 + 1,
                    NameUnit::Era | NameUnit::Weekday | NameUnit::DayPeriod => index as i64,
                };
                (value, input.len() - rest.len())
            }
            Style::Fraction { digits: width } => {
                let (value, len) = digits(input, width, width)?;
                (value * 10_i64.pow(3 - u32::from(width)), len)
            }
            Style::Offset { colon } => {
                let (negative, sign_len) = sign(input);
                if sign_len == 0 {
                    return Err(MatchFailure::ExpectedSign);
                }
                let (hours, hours_len) = digits(&input[sign_len..], 2, 2)?;
                let mut consumed = sign_len + hours_len;
                if colon {
                    if !input[consumed..].starts_with(':') {
                        return Err(MatchFailure::Literal);
                    }
                    consumed += 1;
                }
                let (minutes, minutes_len) = digits(&input[consumed..], 2, 2)?;
                if minutes > 59 {
                    return Err(MatchFailure::OutOfRange {
                        value: minutes,
                        min: 0,
                        max: 59,
                    });
                }
                let total = hours * 60 + minutes;
                (if negative { -total } else { total }, consumed + minutes_len)
            }
            Style::Timestamp { millis } => {
                let (negative, sign_len) = sign(input);
                let max_digits = if millis { 15 } else { 12 };
                let (value, len) = digits(&input[sign_len..], 1, max_digits)?;
                let value = if negative { -value } else { value };
                let value = if millis { value } else { value * 1_000 };
                (value, sign_len + len)
            }
        };
        let (min, max) = self.field.range();
        if !(min..=max).contains(&value) {
            return Err(MatchFailure::OutOfRange { value, min, max });
        }
        Ok((value, consumed))
    }
}

/// Index into the locale's name table for a field value.
const fn name_index(unit: NameUnit, value: i64) -> usize {
    match unit {
        NameUnit::Quarter | NameUnit::Month => (value - 1) as usize,
        NameUnit::Era | NameUnit::Weekday | NameUnit::DayPeriod => value as usize,
    }
}

/// Reads `min..=max` leading ASCII digits.
fn digits(input: &str, min: u8, max: u8) -> Result<(i64, usize), MatchFailure> {
    let len = input
        .bytes()
        .take(usize::from(max))
        .take_while(u8::is_ascii_digit)
        .count();
    if len < usize::from(min) {
        return Err(MatchFailure::ExpectedDigits { min, max });
    }
    let value = input
        .bytes()
        .take(len)
        .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'));
    Ok((value, len))
}

/// An optional leading `+` or `-`: whether it was negative and its length.
fn sign(input: &str) -> (bool, usize) {
    match input.as_bytes().first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    }
}

/// The year ending in `two_digits` that lies in
/// `reference - TWO_DIGIT_YEAR_WINDOW ..= reference + TWO_DIGIT_YEAR_WINDOW - 1`.
pub fn expand_two_digit_year(two_digits: i64, reference: i32) -> i64 {
    let lower = i64::from(reference) - i64::from(TWO_DIGIT_YEAR_WINDOW);
    lower + (two_digits - lower).rem_euclid(100)
}

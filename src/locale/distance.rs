//! Relative-time phrases such as "about 1 hour" or "через 1 час".
//!
//! Choosing the bucket and the count is up to the caller. A locale only
//! words the result.

use crate::consts::COUNT_PLACEHOLDER;

/// The kind of span a phrase describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distance {
    LessThanSeconds,
    Seconds,
    /// Ignores the count.
    HalfMinute,
    LessThanMinutes,
    Minutes,
    AboutHours,
    Hours,
    Days,
    AboutMonths,
    Months,
    AboutYears,
    Years,
    OverYears,
    AlmostYears,
}

impl Distance {
    pub const ALL: [Self; 14] = [
        Self::LessThanSeconds,
        Self::Seconds,
        Self::HalfMinute,
        Self::LessThanMinutes,
        Self::Minutes,
        Self::AboutHours,
        Self::Hours,
        Self::Days,
        Self::AboutMonths,
        Self::Months,
        Self::AboutYears,
        Self::Years,
        Self::OverYears,
        Self::AlmostYears,
    ];
}

/// Where the span lies relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tense {
    /// No direction: "1 hour".
    #[default]
    Neutral,
    /// "1 hour ago".
    Past,
    /// "in 1 hour".
    Future,
}

/// Singular and plural wording of one phrase, `{count}` standing for the
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plural {
    pub one: &'static str,
    pub other: &'static str,
}

impl Plural {
    pub const fn new(one: &'static str, other: &'static str) -> Self {
        Self { one, other }
    }

    /// `one` for a count of 1, `other` otherwise.
    pub fn pick(&self, count: i64) -> String {
        let text = if count == 1 { self.one } else { self.other };
        fill_count(text, count)
    }
}

pub(crate) fn fill_count(text: &str, count: i64) -> String {
    text.replace(COUNT_PLACEHOLDER, &count.to_string())
}

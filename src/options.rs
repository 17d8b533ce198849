//! Per-call configuration.
//!
//! All option structs implement `Default` and `Deserialize` with every
//! field optional, so they can be loaded straight from a configuration
//! file:
//!
//! ```
//! use date_tokens::ParseOptions;
//!
//! let options: ParseOptions = serde_json::from_str(
//!     r#"{ "use_additional_day_of_year_tokens": true, "week_starts_on": "monday" }"#,
//! ).unwrap();
//! assert!(options.tokens.use_additional_day_of_year_tokens);
//! ```

use crate::calendar::WeekConfig;
use crate::consts::MAX_OFFSET_MINUTES;
use crate::error::FormatError;
use crate::locale::Locale;
use crate::types::Weekday;
use serde::{Deserialize, Serialize};

/// Opt-ins for tokens that are easily confused with more common ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOptions {
    /// Allow `GG`, `GGGG`, `gg` and `gggg`.
    pub use_additional_week_year_tokens: bool,
    /// Allow `DDD`, `DDDo` and `DDDD`.
    pub use_additional_day_of_year_tokens: bool,
}

/// Week-numbering overrides shared by format and parse options. Unset
/// fields fall back to the locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekOptions {
    pub week_starts_on: Option<Weekday>,
    pub first_week_contains_date: Option<u8>,
}

impl WeekOptions {
    /// The locale's week rules with these overrides applied.
    ///
    /// # Errors
    /// Returns `FormatError::InvalidWeekConfig` if the resulting
    /// `first_week_contains_date` is not in `1..=7`.
    pub fn resolve(&self, locale: &dyn Locale) -> Result<WeekConfig, FormatError> {
        let base = locale.week();
        let config = WeekConfig {
            week_starts_on: self.week_starts_on.unwrap_or(base.week_starts_on),
            first_week_contains_date: self
                .first_week_contains_date
                .unwrap_or(base.first_week_contains_date),
        };
        if !config.is_valid() {
            return Err(FormatError::InvalidWeekConfig(
                config.first_week_contains_date,
            ));
        }
        Ok(config)
    }
}

fn check_offset(offset_minutes: i16) -> Result<i16, FormatError> {
    if offset_minutes.unsigned_abs() > MAX_OFFSET_MINUTES.unsigned_abs() {
        return Err(FormatError::InvalidOffset(offset_minutes));
    }
    Ok(offset_minutes)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    #[serde(flatten)]
    pub tokens: TokenOptions,
    #[serde(flatten)]
    pub week: WeekOptions,
    /// Offset from UTC, in minutes, that `Z`/`ZZ` print and `X`/`x` are
    /// computed against.
    pub offset_minutes: i16,
}

impl FormatOptions {
    /// # Errors
    /// Returns a `FormatError` for an out-of-range offset.
    pub fn checked_offset(&self) -> Result<i16, FormatError> {
        check_offset(self.offset_minutes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    #[serde(flatten)]
    pub tokens: TokenOptions,
    #[serde(flatten)]
    pub week: WeekOptions,
    /// Offset from UTC, in minutes, of the returned wall clock. A parsed
    /// `Z`/`ZZ` offset or timestamp is converted to it.
    pub offset_minutes: i16,
    /// Ignore input left over after the last segment.
    pub allow_trailing_input: bool,
    /// Accept a bare numeral for an ordinal token.
    pub lenient_ordinals: bool,
}

impl ParseOptions {
    /// # Errors
    /// Returns a `FormatError` for an out-of-range offset.
    pub fn checked_offset(&self) -> Result<i16, FormatError> {
        check_offset(self.offset_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_US, RU};

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(!options.tokens.use_additional_week_year_tokens);
        assert!(!options.allow_trailing_input);
        assert_eq!(options.offset_minutes, 0);
        assert_eq!(options.week.resolve(EN_US).unwrap(), EN_US.week);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: FormatOptions = serde_json::from_str(
            r#"{
                "use_additional_week_year_tokens": true,
                "week_starts_on": "monday",
                "offset_minutes": 60
            }"#,
        )
        .unwrap();
        assert!(options.tokens.use_additional_week_year_tokens);
        assert!(!options.tokens.use_additional_day_of_year_tokens);
        assert_eq!(options.offset_minutes, 60);
        let week = options.week.resolve(EN_US).unwrap();
        assert_eq!(week.week_starts_on, Weekday::Monday);
        assert_eq!(week.first_week_contains_date, 1);

        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn test_week_override_validation() {
        let week = WeekOptions {
            week_starts_on: None,
            first_week_contains_date: Some(8),
        };
        assert_eq!(week.resolve(RU), Err(FormatError::InvalidWeekConfig(8)));
    }

    #[test]
    fn test_offset_bounds() {
        let options = ParseOptions {
            offset_minutes: -1439,
            ..ParseOptions::default()
        };
        assert_eq!(options.checked_offset(), Ok(-1439));
        let options = FormatOptions {
            offset_minutes: 1440,
            ..FormatOptions::default()
        };
        assert_eq!(
            options.checked_offset(),
            Err(FormatError::InvalidOffset(1440))
        );
    }
}

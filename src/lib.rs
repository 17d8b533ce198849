//! Locale-aware formatting and parsing of naive calendar dates with
//! `YYYY-MM-DD`-style format tokens.
//!
//! ```
//! use date_tokens::{CalendarDate, FormatOptions, ParseOptions, EN_US, format, parse};
//!
//! let date = CalendarDate::new(2024, 3, 9)?.with_time(14, 5, 0, 0)?;
//! let text = format(&date, "[on] dddd, MMMM Do YYYY h:mm A", EN_US, &FormatOptions::default())?;
//! assert_eq!(text, "on Saturday, March 9th 2024 2:05 PM");
//!
//! let back = parse(&text, "[on] dddd, MMMM Do YYYY h:mm A", &date, EN_US, &ParseOptions::default())?;
//! assert_eq!(back, date);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Format strings are compiled once into [`Format`] segments and cached.
//! Names, ordinals, day periods and week numbering come from a [`Locale`];
//! `EN_US`, `RU` and `EO` are bundled.

#[macro_use]
mod logging;

pub mod calendar;
mod consts;
mod date;
mod draft;
mod error;
mod format;
pub mod locale;
mod options;
mod parse;
mod prelude;
mod range;
mod segment;
pub mod token;
mod types;

pub use calendar::WeekConfig;
pub use consts::*;
pub use date::CalendarDate;
pub use error::{DateError, Expected, FormatError, MatchFailure, ParseError};
pub use format::format;
pub use locale::{
    Alias, DayPeriod, Distance, EN_US, EO, Locale, LocaleData, LocaleError, NameContext, NameSet,
    NameUnit, OrdinalUnit, Plural, RU, Tense, Width,
};
pub use options::{FormatOptions, ParseOptions, TokenOptions, WeekOptions};
pub use parse::parse;
pub use range::{DateRange, RangeError};
pub use segment::{Format, Segment};
pub use token::Field;
pub use types::{Day, Month, Weekday, Year};

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i64, m: i64, d: i64) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_literal_escaping_round_trip() {
        let reference = date(2024, 6, 1);
        let text = format(&reference, "[year] YYYY", EN_US, &FormatOptions::default()).unwrap();
        assert_eq!(text, "year 2024");

        let parsed = parse(&text, "[year] YYYY", &date(1999, 1, 1), EN_US, &ParseOptions::default())
            .unwrap();
        assert_eq!(parsed.year(), 2024);
    }

    #[test]
    fn test_invalid_calendar_dates() {
        let reference = date(2021, 1, 1);
        let options = ParseOptions::default();
        assert!(matches!(
            parse("2021-02-30", "YYYY-MM-DD", &reference, EN_US, &options),
            Err(ParseError::InvalidDate(DateError::InvalidDay { .. }))
        ));
        assert!(matches!(
            parse("2021-13-01", "YYYY-MM-DD", &reference, EN_US, &options),
            Err(ParseError::TokenMatch { .. } | ParseError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_options_from_config() {
        let options: ParseOptions = serde_json::from_str(
            r#"{ "allow_trailing_input": true, "offset_minutes": -300 }"#,
        )
        .unwrap();
        let parsed = parse(
            "1986-04-04 is a Friday",
            "YYYY-MM-DD",
            &date(2000, 1, 1),
            EN_US,
            &options,
        )
        .unwrap();
        assert_eq!(parsed, date(1986, 4, 4));
    }

    #[test]
    fn test_compiled_format_is_shared_between_threads() {
        let compiled = Format::compile("YYYY-MM-DD").unwrap();
        let handles: Vec<_> = (1..=4)
            .map(|month| {
                let compiled = compiled.clone();
                std::thread::spawn(move || {
                    compiled
                        .render(&date(2020, month, 1), RU, &FormatOptions::default())
                        .unwrap()
                })
            })
            .collect();
        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(rendered, ["2020-01-01", "2020-02-01", "2020-03-01", "2020-04-01"]);
    }

    #[test]
    fn test_parsed_dates_in_range() {
        let options = ParseOptions::default();
        let reference = date(2014, 1, 1);
        let range = DateRange::new(
            parse("1 Sep 2014", "D MMM YYYY", &reference, EN_US, &options).unwrap(),
            parse("7 Oct 2014", "D MMM YYYY", &reference, EN_US, &options).unwrap(),
        )
        .unwrap();
        let inside = parse("30 сент. 2014", "D MMM YYYY", &reference, RU, &options).unwrap();
        assert!(range.contains(&inside));
    }

    #[test]
    fn test_relative_phrases() {
        let cases: [(&dyn Locale, &str); 3] = [
            (EN_US, "in about 1 hour"),
            (RU, "приблизительно через 1 час"),
            (EO, "post proksimume 1 horo"),
        ];
        for (locale, expected) in cases {
            assert_eq!(locale.distance(Distance::AboutHours, 1, Tense::Future), expected);
        }
    }

    #[test]
    fn test_locales_validate() {
        for locale in [EN_US, RU, EO] {
            assert_eq!(locale.validate(), Ok(()), "{}", locale.code());
        }
    }
}

use crate::date::CalendarDate;
use crate::error::FormatError;
use crate::locale::{Locale, NameContext};
use crate::options::FormatOptions;
use crate::segment::{Format, Segment};
use crate::token::RenderContext;

/// Renders `date` with the token format string `format`.
///
/// ```
/// use date_tokens::{CalendarDate, FormatOptions, EN_US, format};
///
/// let date = CalendarDate::new(1986, 4, 4)?.with_time(10, 32, 0, 0)?;
/// let text = format(&date, "dddd, MMMM Do YYYY [at] h:mm A", EN_US, &FormatOptions::default())?;
/// assert_eq!(text, "Friday, April 4th 1986 at 10:32 AM");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns a `FormatError` if `format` does not compile, uses a protected
/// token without its opt-in, or `options` are out of range.
pub fn format(
    date: &CalendarDate,
    format: &str,
    locale: &dyn Locale,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    Format::cached(format)?.render(date, locale, options)
}

impl Format {
    /// Renders `date`. Literal segments are copied, tokens write their
    /// field through the locale.
    ///
    /// # Errors
    /// See [`format`].
    pub fn render(
        &self,
        date: &CalendarDate,
        locale: &dyn Locale,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        self.check_protection(&options.tokens)?;
        let ctx = RenderContext {
            date,
            locale,
            week: options.week.resolve(locale)?,
            offset_minutes: options.checked_offset()?,
            name_context: NameContext::Standalone,
        };

        let mut out = String::with_capacity(self.source().len() * 2);
        for (index, segment) in self.segments().iter().enumerate() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => {
                    let ctx = RenderContext {
                        name_context: self.name_context(index),
                        ..ctx
                    };
                    out.push_str(&token.render(&ctx));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{EN_US, EO, RU};
    use crate::options::{TokenOptions, WeekOptions};
    use crate::types::Weekday;

    fn at(y: i64, mo: i64, d: i64, h: i64, mi: i64, s: i64, ms: i64) -> CalendarDate {
        CalendarDate::new(y, mo, d)
            .unwrap()
            .with_time(h, mi, s, ms)
            .unwrap()
    }

    /// 1986-04-04 10:32:00.900, a Friday.
    fn reference() -> CalendarDate {
        at(1986, 4, 4, 10, 32, 0, 900)
    }

    fn all_tokens() -> FormatOptions {
        FormatOptions {
            tokens: TokenOptions {
                use_additional_week_year_tokens: true,
                use_additional_day_of_year_tokens: true,
            },
            ..FormatOptions::default()
        }
    }

    fn render(date: &CalendarDate, fmt: &str, locale: &dyn Locale) -> String {
        format(date, fmt, locale, &all_tokens()).unwrap()
    }

    #[test]
    fn test_english() {
        let date = reference();
        assert_eq!(
            render(&date, "YYYY-MM-DD[T]HH:mm:ss.SSS", EN_US),
            "1986-04-04T10:32:00.900"
        );
        assert_eq!(
            render(&date, "dddd, MMMM Do YYYY h:mm a", EN_US),
            "Friday, April 4th 1986 10:32 am"
        );
        assert_eq!(render(&date, "ddd MMM D YY", EN_US), "Fri Apr 4 86");
        assert_eq!(render(&date, "Qo [quarter,] QQQ QQQQ", EN_US), "2nd quarter, Q2 2nd quarter");
        assert_eq!(render(&date, "DDDo DDDD DDD", EN_US), "94th 094 94");
        assert_eq!(render(&date, "N NNNN NNNNN y", EN_US), "AD Anno Domini A 1986");
        assert_eq!(render(&date, "E e d do", EN_US), "5 5 5 5th");
        assert_eq!(render(&date, "S SS SSS", EN_US), "9 90 900");
    }

    #[test]
    fn test_escapes_render_verbatim() {
        let date = at(2024, 1, 1, 15, 0, 0, 0);
        assert_eq!(render(&date, "[year] YYYY", EN_US), "year 2024");
        assert_eq!(render(&date, "'o''clock' h", EN_US), "o'clock 3");
        assert_eq!(render(&date, "[[YYYY]]", EN_US), "[YYYY]");
        assert_eq!(render(&date, "--/--, ", EN_US), "--/--, ");
    }

    #[test]
    fn test_weeks() {
        // 2016-01-01 is a Friday in ISO 2015-W53 and US week 1 of 2016
        let date = at(2016, 1, 1, 0, 0, 0, 0);
        assert_eq!(render(&date, "GGGG-[W]WW-E", EN_US), "2015-W53-5");
        assert_eq!(render(&date, "gggg-[w]ww-e", EN_US), "2016-w01-5");
        assert_eq!(render(&date, "GG gg Wo wo", EN_US), "15 16 53rd 1st");

        let monday_first = FormatOptions {
            week: WeekOptions {
                week_starts_on: Some(Weekday::Monday),
                first_week_contains_date: Some(4),
            },
            ..all_tokens()
        };
        assert_eq!(
            format(&date, "gggg-ww-e", EN_US, &monday_first).unwrap(),
            "2015-53-4"
        );
    }

    #[test]
    fn test_negative_years_and_offsets() {
        let date = at(-44, 3, 15, 12, 0, 0, 0);
        assert_eq!(render(&date, "YYYY y N", EN_US), "-0044 45 BC");

        let date = at(1970, 1, 1, 1, 0, 0, 0);
        let plus_one = FormatOptions {
            offset_minutes: 60,
            ..FormatOptions::default()
        };
        assert_eq!(
            format(&date, "HH:mm Z ZZ X x", EN_US, &plus_one).unwrap(),
            "01:00 +01:00 +0100 0 0"
        );
    }

    #[test]
    fn test_protected_tokens_need_opt_in() {
        let date = reference();
        let err = format(&date, "DDDD", EN_US, &FormatOptions::default()).unwrap_err();
        assert_eq!(
            err,
            FormatError::ProtectedToken {
                token: "DDDD",
                option: "use_additional_day_of_year_tokens"
            }
        );
        assert!(format(&date, "gggg", EN_US, &FormatOptions::default()).is_err());
        assert!(format(&date, "[gggg] YYYY", EN_US, &FormatOptions::default()).is_ok());
    }

    #[test]
    fn test_malformed_format() {
        assert_eq!(
            format(&reference(), "YYYY [", EN_US, &FormatOptions::default()),
            Err(FormatError::Unterminated {
                delimiter: '[',
                position: 5
            })
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let compiled = Format::compile("dddd Do MMMM YYYY HH:mm").unwrap();
        let date = reference();
        let first = compiled.render(&date, RU, &FormatOptions::default()).unwrap();
        let second = compiled.render(&date, RU, &FormatOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_russian() {
        let date = reference();
        assert_eq!(render(&date, "Mo [месяц]", RU), "4-й месяц");
        assert_eq!(render(&date, "MMM", RU), "апр.");
        assert_eq!(render(&date, "MMMM", RU), "апрель");
        assert_eq!(render(&date, "Qo [квартал]", RU), "2-й квартал");
        // genitive after a day of month
        assert_eq!(render(&date, "Do MMMM YYYY", RU), "4-е апреля 1986");
        assert_eq!(render(&date, "D MMM", RU), "4 апр.");
        assert_eq!(render(&at(1986, 3, 8, 0, 0, 0, 0), "D MMM", RU), "8 мар.");
        assert_eq!(render(&date, "MMMM YYYY, D", RU), "апрель 1986, 4");
        // nothing to decline in English
        assert_eq!(render(&date, "D MMMM", EN_US), "4 April");
        assert_eq!(
            render(&at(1992, 1, 1, 0, 0, 0, 0), "DDDo [день года]", RU),
            "1-й день года"
        );
        assert_eq!(
            render(&date, "do [день недели,] dd ddd dddd", RU),
            "5-й день недели, пт птн пятница"
        );
        assert_eq!(render(&date, "Wo [неделя]", RU), "14-я неделя");
        assert_eq!(render(&at(1986, 4, 4, 12, 0, 0, 0), "hh:mm a", RU), "12:00 дня");
        assert_eq!(render(&at(1986, 4, 6, 0, 0, 0, 900), "h:mm a", RU), "12:00 ночи");
    }

    #[test]
    fn test_russian_day_periods_every_hour() {
        let expected = [
            "12 ночи", "1 ночи", "2 ночи", "3 ночи", "4 утра", "5 утра", "6 утра", "7 утра",
            "8 утра", "9 утра", "10 утра", "11 утра", "12 дня", "1 дня", "2 дня", "3 дня",
            "4 дня", "5 вечера", "6 вечера", "7 вечера", "8 вечера", "9 вечера", "10 вечера",
            "11 вечера",
        ];
        for fmt in ["h a", "h A", "h aa"] {
            let rendered: Vec<String> = (0..24)
                .map(|hour| render(&at(2015, 1, 1, hour, 0, 0, 0), fmt, RU))
                .collect();
            assert_eq!(rendered, expected, "{fmt}");
        }
    }

    #[test]
    fn test_esperanto() {
        let date = reference();
        assert_eq!(render(&date, "Mo [monato]", EO), "4-a monato");
        assert_eq!(render(&date, "MMM", EO), "apr");
        assert_eq!(render(&date, "MMMM", EO), "aprilo");
        assert_eq!(render(&date, "Qo [kvarono]", EO), "2-a kvarono");
        assert_eq!(render(&date, "Do MMMM YYYY", EO), "4-a aprilo 1986");
        assert_eq!(
            render(&at(1992, 1, 1, 0, 0, 0, 0), "DDDo [tago de la jaro]", EO),
            "1-a tago de la jaro"
        );
        assert_eq!(
            render(&date, "do [tago de la semajno,] dd ddd dddd", EO),
            "5-a tago de la semajno, ve ven vendredo"
        );
        assert_eq!(render(&date, "Wo [semajno]", EO), "14-a semajno");

        let noon = at(1986, 4, 4, 12, 0, 0, 0);
        let midnight = at(1986, 4, 6, 0, 0, 0, 0);
        assert_eq!(render(&date, "hh:mm a", EO), "10:32 a.t.m.");
        assert_eq!(render(&noon, "hh:mm a", EO), "12:00 p.t.m.");
        assert_eq!(render(&midnight, "h:mm a", EO), "12:00 a.t.m.");
        assert_eq!(render(&midnight, "h:mm aa", EO), "12:00 antaŭtagmeze");
        assert_eq!(render(&noon, "hh:mm aa", EO), "12:00 posttagmeze");
        assert_eq!(render(&noon, "hh:mmA", EO), "12:00P.T.M.");
    }
}

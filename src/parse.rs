use crate::date::CalendarDate;
use crate::draft::Draft;
use crate::error::{Expected, MatchFailure, ParseError};
use crate::locale::Locale;
use crate::options::ParseOptions;
use crate::segment::{Format, Segment};
use crate::token::MatchContext;

/// Parses `input` with the token format string `format`.
///
/// Fields the input does not determine come from `reference`. The whole
/// input must be consumed unless `options.allow_trailing_input` is set.
///
/// ```
/// use date_tokens::{CalendarDate, ParseOptions, EN_US, parse};
///
/// let reference = CalendarDate::new(2024, 1, 1)?;
/// let date = parse("April 4th 86, 2 PM", "MMMM Do YY, h A", &reference, EN_US, &ParseOptions::default())?;
/// assert_eq!(date.to_string(), "1986-04-04T14:00:00.000");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns a `ParseError` if `format` does not compile, a segment does not
/// match, input is left over, or the captured fields are not a valid date.
pub fn parse(
    input: &str,
    format: &str,
    reference: &CalendarDate,
    locale: &dyn Locale,
    options: &ParseOptions,
) -> Result<CalendarDate, ParseError> {
    Format::cached(format)?.parse(input, reference, locale, options)
}

impl Format {
    /// Matches `input` segment by segment and resolves the captures.
    ///
    /// # Errors
    /// See [`parse`].
    pub fn parse(
        &self,
        input: &str,
        reference: &CalendarDate,
        locale: &dyn Locale,
        options: &ParseOptions,
    ) -> Result<CalendarDate, ParseError> {
        self.check_protection(&options.tokens)?;
        let week = options.week.resolve(locale)?;
        let offset_minutes = options.checked_offset()?;
        let ctx = MatchContext {
            locale,
            reference_year: i32::from(reference.year()),
            lenient_ordinals: options.lenient_ordinals,
        };

        let mut draft = Draft::default();
        let mut position = 0;
        for segment in self.segments() {
            let rest = input.get(position..).unwrap_or_default();
            match segment {
                Segment::Literal(text) => {
                    if !rest.starts_with(text.as_str()) {
                        return Err(ParseError::TokenMatch {
                            expected: Expected::Literal(text.clone()),
                            position,
                            reason: if rest.is_empty() {
                                MatchFailure::EndOfInput
                            } else {
                                MatchFailure::Literal
                            },
                        });
                    }
                    position += text.len();
                }
                Segment::Token(token) => {
                    let (value, consumed) = token.matches(rest, &ctx).map_err(|reason| {
                        debug!("token {:?} failed at byte {position}: {reason}", token.literal);
                        ParseError::TokenMatch {
                            expected: Expected::Token(token.literal),
                            position,
                            reason,
                        }
                    })?;
                    draft.record(token, value)?;
                    position += consumed;
                }
            }
        }

        if position < input.len() && !options.allow_trailing_input {
            return Err(ParseError::UnconsumedInput {
                position,
                remaining: input.get(position..).unwrap_or_default().to_owned(),
            });
        }

        Ok(draft.resolve(reference, locale, week, offset_minutes)?)
    }
}

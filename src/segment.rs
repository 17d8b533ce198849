use crate::consts::{BRACKET_CLOSE, BRACKET_OPEN, QUOTE, SEGMENT_CACHE_CAPACITY};
use crate::error::FormatError;
use crate::locale::NameContext;
use crate::options::TokenOptions;
use crate::token::{self, Field, Token};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, OnceLock, RwLock};

/// One piece of a compiled format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim when rendering and matched exactly when parsing.
    Literal(String),
    /// An entry of the static token table.
    Token(&'static Token),
}

/// A compiled format string.
///
/// Compiling is done once per distinct format string; the result is
/// immutable and cheap to clone, so one `Format` can be shared between
/// threads and used for any number of `render`/`parse` calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    source: Arc<str>,
    segments: Arc<[Segment]>,
}

impl Format {
    /// Splits `format` into literal and token segments.
    ///
    /// `[...]` and `'...'` escape literal text; `''` is a literal single
    /// quote. Everything else is scanned for the longest token literal,
    /// falling back to a one-character literal. Adjacent literal text ends
    /// up in a single segment.
    ///
    /// # Errors
    /// Returns `FormatError::Unterminated` if an escape is never closed.
    pub fn compile(format: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut position = 0;

        while let Some(rest) = format.get(position..).filter(|r| !r.is_empty()) {
            if let Some(body) = rest.strip_prefix(BRACKET_OPEN) {
                let close = body.find(BRACKET_CLOSE).ok_or(FormatError::Unterminated {
                    delimiter: BRACKET_OPEN,
                    position,
                })?;
                literal.push_str(&body[..close]);
                position += close + 2;
            } else if rest.starts_with(QUOTE) {
                position += quoted(rest, position, &mut literal)?;
            } else if let Some(token) = token::lookup(rest) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Token(token));
                position += token.literal.len();
            } else if let Some(c) = rest.chars().next() {
                literal.push(c);
                position += c.len_utf8();
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: Arc::from(format),
            segments: segments.into(),
        })
    }

    /// Like [`Format::compile`], but reuses the result for format strings
    /// seen before.
    ///
    /// The cache is process-wide and holds at most
    /// [`SEGMENT_CACHE_CAPACITY`] formats. Once full, new formats are
    /// compiled on every call instead of evicting old entries.
    ///
    /// # Errors
    /// Returns the `FormatError` of [`Format::compile`].
    pub fn cached(format: &str) -> Result<Self, FormatError> {
        static CACHE: OnceLock<RwLock<HashMap<String, Format>>> = OnceLock::new();
        let cache = CACHE.get_or_init(RwLock::default);

        if let Some(hit) = cache.read().ok().and_then(|map| map.get(format).cloned()) {
            return Ok(hit);
        }

        trace!("compiling format {format:?}");
        let compiled = Self::compile(format)?;
        if let Ok(mut map) = cache.write() {
            if map.len() < SEGMENT_CACHE_CAPACITY {
                map.entry(format.to_owned())
                    .or_insert_with(|| compiled.clone());
            } else {
                debug!("format cache is full, not caching {format:?}");
            }
        }
        Ok(compiled)
    }

    /// The format string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Literal and token segments in source order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Context of a name token at `index`: formatting when it follows a day
    /// of month, directly or after whitespace.
    pub(crate) fn name_context(&self, index: usize) -> NameContext {
        let mut before = self.segments[..index].iter().rev();
        let previous = match before.next() {
            Some(Segment::Literal(text)) if text.trim().is_empty() => before.next(),
            other => other,
        };
        match previous {
            Some(Segment::Token(token)) if token.field == Field::DayOfMonth => {
                NameContext::Formatting
            }
            _ => NameContext::Standalone,
        }
    }

    /// Fails on the first token that needs an opt-in `options` lacks.
    pub(crate) fn check_protection(&self, options: &TokenOptions) -> Result<(), FormatError> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Token(token) => Some(*token),
                Segment::Literal(_) => None,
            })
            .find_map(|token| {
                let protection = token.protection?;
                (!protection.is_allowed(options)).then_some(FormatError::ProtectedToken {
                    token: token.literal,
                    option: protection.option(),
                })
            })
            .map_or(Ok(()), Err)
    }
}

/// Consumes a quoted run at the start of `rest` (which begins with a
/// quote) and returns its length in bytes. `''` anywhere is one quote.
fn quoted(rest: &str, position: usize, literal: &mut String) -> Result<usize, FormatError> {
    if rest[1..].starts_with(QUOTE) {
        literal.push(QUOTE);
        return Ok(2);
    }
    let mut consumed = 1;
    loop {
        let tail = &rest[consumed..];
        let end = tail.find(QUOTE).ok_or(FormatError::Unterminated {
            delimiter: QUOTE,
            position,
        })?;
        literal.push_str(&tail[..end]);
        consumed += end + 1;
        if rest[consumed..].starts_with(QUOTE) {
            literal.push(QUOTE);
            consumed += 1;
        } else {
            return Ok(consumed);
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

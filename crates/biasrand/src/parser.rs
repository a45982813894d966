//! Tokenizer for range expressions.
//!
//! The accepted grammar is fixed and anchored at both ends:
//!
//! ```text
//! path     = "/random-min-" signed "-average-" signed "&" unsigned "-max-" signed
//! signed   = [ "-" ] digits
//! unsigned = digits
//! digits   = ASCII digit, one or more
//! ```
//!
//! Digit runs are maximal and every literal that follows a number starts with
//! `-` or `&`, so a single left-to-right pass is unambiguous and never needs
//! to backtrack.

use crate::{ParseError, RangeSpec, Result};

const MIN_PREFIX: &str = "/random-min-";
const AVERAGE_PREFIX: &str = "-average-";
const PERCENTAGE_PREFIX: &str = "&";
const MAX_PREFIX: &str = "-max-";

/// Parses a request path into a validated [`RangeSpec`].
///
/// Returns [`ParseError::MalformedPath`] when the path does not follow the
/// grammar, and [`ParseError::InvalidParameters`] when it does but the
/// values are inconsistent or too large for an `i64`.
///
/// ```
/// use biasrand::{ParseError, parse};
///
/// let spec = parse("/random-min-10-average-70&70-max-100").unwrap();
/// assert_eq!((spec.min(), spec.average(), spec.percentage(), spec.max()), (10, 70, 70, 100));
///
/// assert_eq!(parse("/random-min-50-average-10-max-100"), Err(ParseError::MalformedPath));
/// assert!(matches!(
///     parse("/random-min-10-average-200&70-max-100"),
///     Err(ParseError::InvalidParameters { .. })
/// ));
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", ret, err))]
pub fn parse(path: &str) -> Result<RangeSpec> {
    let raw = RawFields::lex(path).ok_or(ParseError::MalformedPath)?;

    let min = to_i64(raw.min)?;
    let average = to_i64(raw.average)?;
    let max = to_i64(raw.max)?;
    let percentage = to_percentage(raw.percentage)?;

    RangeSpec::new(min, average, percentage, max)
}

/// The four numeric substrings captured by a successful lexical match.
#[derive(Debug, PartialEq, Eq)]
struct RawFields<'a> {
    min: &'a str,
    average: &'a str,
    percentage: &'a str,
    max: &'a str,
}

impl<'a> RawFields<'a> {
    fn lex(path: &'a str) -> Option<Self> {
        let mut cursor = Cursor::new(path);

        cursor.literal(MIN_PREFIX)?;
        let min = cursor.signed()?;
        cursor.literal(AVERAGE_PREFIX)?;
        let average = cursor.signed()?;
        cursor.literal(PERCENTAGE_PREFIX)?;
        let percentage = cursor.digits()?;
        cursor.literal(MAX_PREFIX)?;
        let max = cursor.signed()?;
        cursor.end()?;

        Some(Self {
            min,
            average,
            percentage,
            max,
        })
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn literal(&mut self, expected: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// Consumes an optional `-` followed by one or more ASCII digits.
    fn signed(&mut self) -> Option<&'a str> {
        let start = self.rest;
        let sign = usize::from(start.starts_with('-'));
        let len = sign + digit_run(&start[sign..]);
        if len == sign {
            return None;
        }
        let (token, rest) = start.split_at(len);
        self.rest = rest;
        Some(token)
    }

    /// Consumes one or more ASCII digits.
    fn digits(&mut self) -> Option<&'a str> {
        let len = digit_run(self.rest);
        if len == 0 {
            return None;
        }
        let (token, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(token)
    }

    fn end(&self) -> Option<()> {
        self.rest.is_empty().then_some(())
    }
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn to_i64(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| ParseError::invalid("value does not fit in a 64-bit integer"))
}

fn to_percentage(token: &str) -> Result<u8> {
    // Digit runs longer than u8 allows are still just "over 100".
    token
        .parse::<u8>()
        .ok()
        .filter(|p| *p <= RangeSpec::MAX_PERCENTAGE)
        .ok_or(ParseError::invalid("percentage must be within 0-100"))
}

use crate::{ParseError, Result};
use core::{fmt, str::FromStr};

/// Validated sampling parameters decoded from a range expression.
///
/// A `RangeSpec` can only be built through [`RangeSpec::new`] or
/// [`crate::parse`], both of which enforce:
///
/// - `min <= average <= max`
/// - `percentage <= 100`
///
/// The [`Display`](fmt::Display) impl renders the canonical path form, which
/// parses back to the same value.
///
/// ```
/// use biasrand::RangeSpec;
///
/// let spec = RangeSpec::new(10, 70, 70, 100).unwrap();
/// assert_eq!(spec.to_string(), "/random-min-10-average-70&70-max-100");
/// assert_eq!(spec.to_string().parse::<RangeSpec>(), Ok(spec));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeSpec {
    min: i64,
    average: i64,
    percentage: u8,
    max: i64,
}

impl RangeSpec {
    /// Largest accepted percentage.
    pub const MAX_PERCENTAGE: u8 = 100;

    /// Builds a spec after checking the range and percentage constraints.
    pub fn new(min: i64, average: i64, percentage: u8, max: i64) -> Result<Self> {
        if min > max {
            return Err(ParseError::invalid("min must not exceed max"));
        }
        if average < min || average > max {
            return Err(ParseError::invalid("average must lie within [min, max]"));
        }
        if percentage > Self::MAX_PERCENTAGE {
            return Err(ParseError::invalid("percentage must be within 0-100"));
        }
        Ok(Self {
            min,
            average,
            percentage,
            max,
        })
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn average(&self) -> i64 {
        self.average
    }

    /// Chance, in percent, that a draw comes from the Gaussian around the
    /// average instead of the uniform distribution.
    pub const fn percentage(&self) -> u8 {
        self.percentage
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Width of the range as a float. Computed in `f64` so extreme bounds
    /// cannot overflow.
    pub fn span(&self) -> f64 {
        self.max as f64 - self.min as f64
    }

    /// Standard deviation of the Gaussian side: a tenth of the span.
    pub fn std_dev(&self) -> f64 {
        0.1 * self.span()
    }

    /// Returns `true` if `n` lies within `[min, max]`.
    pub fn contains(&self, n: i64) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/random-min-{}-average-{}&{}-max-{}",
            self.min, self.average, self.percentage, self.max
        )
    }
}

impl FromStr for RangeSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

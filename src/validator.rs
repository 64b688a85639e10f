//! Inclusive range checks for numeric inputs.

use std::fmt::Display;

use thiserror::Error;

/// Raised when a value falls outside the bounds it was checked against.
///
/// Bounds and value are stored rendered, so one error type serves every
/// numeric type `ensure_between` accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{name} must be between {low} and {high}, got {value}")]
    OutOfRange {
        name: String,
        low: String,
        high: String,
        value: String,
    },

    #[error("{name} has inverted bounds: {low} > {high}")]
    InvertedBounds {
        name: String,
        low: String,
        high: String,
    },
}

impl RangeError {
    pub fn out_of_range<T: Display>(name: &str, low: T, high: T, value: T) -> Self {
        Self::OutOfRange {
            name: name.to_owned(),
            low: low.to_string(),
            high: high.to_string(),
            value: value.to_string(),
        }
    }

    pub fn inverted_bounds<T: Display>(name: &str, low: T, high: T) -> Self {
        Self::InvertedBounds {
            name: name.to_owned(),
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// Label of the offending field.
    pub fn name(&self) -> &str {
        match self {
            Self::OutOfRange { name, .. } | Self::InvertedBounds { name, .. } => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;

/// Returns `value` if `low <= value <= high`.
///
/// Values that don't compare against the bounds (a NaN float) are out of
/// range. Bounds with `low > high` are rejected before `value` is looked at.
///
/// ```
/// use qqgjyx::validator::ensure_between;
///
/// assert_eq!(ensure_between(5, 0, 10, "value").unwrap(), 5);
/// let err = ensure_between(11, 0, 10, "ratio").unwrap_err();
/// assert_eq!(err.to_string(), "ratio must be between 0 and 10, got 11");
/// ```
pub fn ensure_between<T>(value: T, low: T, high: T, name: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if low > high {
        return Err(RangeError::inverted_bounds(name, low, high));
    }
    if low <= value && value <= high {
        Ok(value)
    } else {
        Err(RangeError::out_of_range(name, low, high, value))
    }
}

/// [`ensure_between`] with the field labelled `"value"`.
pub fn ensure_value_between<T>(value: T, low: T, high: T) -> Result<T>
where
    T: PartialOrd + Display,
{
    ensure_between(value, low, high, "value")
}

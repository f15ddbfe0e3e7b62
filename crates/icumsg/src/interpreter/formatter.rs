//! The locale formatting capability.
//!
//! Evaluation depends on locale-sensitive services through this narrow
//! trait instead of any particular i18n library: hosts can substitute
//! their own service, tests can run without locale data, and evaluation
//! degrades gracefully when no implementation is injected at all. The
//! shipped implementation is [`IcuFormatter`](crate::IcuFormatter).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::{DateTimeOptions, NumberOptions, PluralCategory};

/// A numeric argument value, after any offset subtraction.
///
/// Integers and floats stay distinct so integer arguments format exactly
/// even beyond the range a double represents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}

impl NumericValue {
    /// The value as a double, for rule selection.
    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Int(n) => n as f64,
            NumericValue::Float(f) => f,
        }
    }

    /// Whether the value is a whole number.
    pub fn is_integral(self) -> bool {
        match self {
            NumericValue::Int(_) => true,
            NumericValue::Float(f) => f.fract() == 0.0,
        }
    }

    /// The value with a plural offset removed.
    pub fn subtract(self, offset: i64) -> NumericValue {
        match self {
            NumericValue::Int(n) => NumericValue::Int(n.saturating_sub(offset)),
            NumericValue::Float(f) => NumericValue::Float(f - offset as f64),
        }
    }

    /// Exact-match comparison against an integer selector.
    pub fn equals_int(self, n: i64) -> bool {
        match self {
            NumericValue::Int(i) => i == n,
            NumericValue::Float(f) => f == n as f64,
        }
    }
}

/// An error from a [`LocaleFormatter`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> FormatError {
        FormatError {
            message: message.into(),
        }
    }
}

/// Locale-sensitive formatting services, injected into evaluation.
pub trait LocaleFormatter {
    /// Format a number for a locale with compiled number options.
    fn format_number(
        &self,
        locale: &str,
        value: NumericValue,
        options: &NumberOptions,
    ) -> Result<String, FormatError>;

    /// Format a timestamp for a locale in a named IANA time zone.
    fn format_datetime(
        &self,
        locale: &str,
        value: DateTime<Utc>,
        time_zone: &str,
        options: &DateTimeOptions,
    ) -> Result<String, FormatError>;

    /// Select the plural category for a number in a locale.
    fn plural_category(&self, locale: &str, value: NumericValue) -> PluralCategory;
}

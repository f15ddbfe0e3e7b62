use bon::Builder;

/// Compiled formatting options for a number argument.
///
/// Produced by the parser from `{n,number}`, `{n,number,integer}`, or
/// `{n,number,percent}`, or built directly when composing messages without
/// grammar source.
///
/// # Example
///
/// ```
/// use icumsg::{NumberOptions, NumberStyle};
///
/// let integer = NumberOptions::builder()
///     .max_fraction_digits(0)
///     .build();
/// assert_eq!(integer.style, NumberStyle::Decimal);
/// assert_eq!(integer.max_fraction_digits, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder)]
pub struct NumberOptions {
    /// How the number is presented.
    #[builder(default)]
    pub style: NumberStyle,

    /// Maximum number of fraction digits to render, rounding beyond it.
    /// `None` keeps the value's own precision.
    pub max_fraction_digits: Option<u8>,
}

impl NumberOptions {
    /// Options for the `integer` argument style: decimal with no
    /// fraction digits.
    pub fn integer() -> Self {
        NumberOptions {
            style: NumberStyle::Decimal,
            max_fraction_digits: Some(0),
        }
    }

    /// Options for the `percent` argument style.
    pub fn percent() -> Self {
        NumberOptions {
            style: NumberStyle::Percent,
            max_fraction_digits: Some(0),
        }
    }
}

/// Presentation style for a number argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// Locale-grouped decimal notation, the default.
    #[default]
    Decimal,
    /// The value times 100 with a percent sign.
    Percent,
}

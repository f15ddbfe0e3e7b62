use chrono::{DateTime, Utc};

/// A runtime value passed as an argument to a compiled message.
///
/// The `Value` enum provides a dynamic type system for message arguments,
/// allowing numbers, floats, strings, timestamps, and host components to be
/// passed through one map. The type parameter `T` is the host's rich-text
/// component type; it defaults to `()` for plain-string evaluation.
///
/// # Example
///
/// ```
/// use icumsg::Value;
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone)]
pub enum Value<T = ()> {
    /// An integer number (used for plural selection and number formatting).
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A point in time, stored in UTC and rendered in the context time zone.
    DateTime(DateTime<Utc>),

    /// A host component for rich-text composition, resolved via `wrap`.
    Component(T),
}

impl<T> Value<T> {
    /// Wrap a host component as a value.
    ///
    /// Components have no `From` impl because `T` may itself be one of the
    /// primitive types above.
    pub fn component(component: T) -> Self {
        Value::Component(component)
    }

    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, converting integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a timestamp, if it is one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get this value as a component, if it is one.
    pub fn as_component(&self) -> Option<&T> {
        match self {
            Value::Component(c) => Some(c),
            _ => None,
        }
    }

    /// The kind of this value, as used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::DateTime(_) => "date",
            Value::Component(_) => "component",
        }
    }

    /// A short description of this value for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Number(n) => format!("number ({n})"),
            Value::Float(f) => format!("number ({f})"),
            Value::String(s) => format!("string (\"{s}\")"),
            Value::DateTime(dt) => format!("date ({dt})"),
            Value::Component(_) => "component".to_string(),
        }
    }
}

// From implementations for common types

impl<T> From<i32> for Value<T> {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<i64> for Value<T> {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl<T> From<u32> for Value<T> {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<u64> for Value<T> {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<usize> for Value<T> {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl<T> From<f32> for Value<T> {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl<T> From<f64> for Value<T> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<T> From<String> for Value<T> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T> From<&str> for Value<T> {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T> From<DateTime<Utc>> for Value<T> {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

/// The result of evaluating a compiled message.
///
/// Plain messages evaluate to `Text`. Messages containing component
/// placeholders evaluate to whatever the caller's `collect` and `wrap`
/// callbacks build, carried as `Rich`.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T = ()> {
    /// Formatted text.
    Text(String),
    /// A composed rich-text value built by the host callbacks.
    Rich(T),
}

impl<T> Rendered<T> {
    /// Get the text of this result, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Rich(_) => None,
        }
    }

    /// Consume this result, returning its text if it is text.
    pub fn into_text(self) -> Option<String> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Rich(_) => None,
        }
    }

    /// Get the rich value of this result, if it is one.
    pub fn as_rich(&self) -> Option<&T> {
        match self {
            Rendered::Rich(value) => Some(value),
            Rendered::Text(_) => None,
        }
    }
}

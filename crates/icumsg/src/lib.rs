pub mod interpreter;
pub mod parser;
pub mod types;

#[cfg(feature = "icu")]
pub use interpreter::IcuFormatter;
pub use interpreter::{
    CollectFn, EvalContext, EvalError, EvalWarning, FormatError, LocaleFormatter, NumericValue,
    WarningSink, WrapFn, evaluate, format,
};
pub use parser::{ParseError, parse};
pub use types::{
    ArgFormat, ArgName, CompiledMessage, DateTimeFields, DateTimeLength, DateTimeOptions,
    DateTimePart, DateTimeStyle, HourCycle, MonthWidth, NameWidth, NumberOptions, NumberStyle,
    NumericWidth, PluralCategory, Rendered, Selector, Value,
};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or timestamps directly.
///
/// # Example
///
/// ```
/// use icumsg::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

//! Evaluation context.

use std::collections::HashMap;

use crate::interpreter::error::EvalWarning;
use crate::interpreter::formatter::LocaleFormatter;
use crate::types::{ArgName, Rendered, Value};

/// Callback combining mixed text and rich parts into one value.
pub type CollectFn<'a, T> = &'a dyn Fn(Vec<Rendered<T>>) -> Rendered<T>;

/// Callback wrapping an optional child result in a host component.
pub type WrapFn<'a, T> = &'a dyn Fn(&T, Option<Rendered<T>>) -> Rendered<T>;

/// Sink for non-fatal evaluation warnings.
pub type WarningSink<'a> = &'a dyn Fn(&EvalWarning);

/// Everything one evaluation needs besides the message itself.
///
/// The context borrows its parameter map, formatter, and callbacks, and is
/// never mutated by evaluation, so one context can serve any number of
/// messages.
///
/// # Example
///
/// ```
/// use icumsg::{EvalContext, IcuFormatter, format, params, parse};
///
/// let message = parse("{count,plural,one{# item}other{# items}}").unwrap();
/// let args = params! { "count" => 1 };
/// let formatter = IcuFormatter;
/// let ctx = EvalContext::new("en", &args).with_formatter(&formatter);
/// assert_eq!(format(&message, &ctx).unwrap(), "1 item");
/// ```
pub struct EvalContext<'a, T = ()> {
    locale: &'a str,
    time_zone: Option<&'a str>,
    params: &'a HashMap<String, Value<T>>,
    formatter: Option<&'a dyn LocaleFormatter>,
    collect: Option<CollectFn<'a, T>>,
    wrap: Option<WrapFn<'a, T>>,
    on_warning: Option<WarningSink<'a>>,
}

impl<'a, T> EvalContext<'a, T> {
    /// Create a context with a locale and an argument map.
    pub fn new(locale: &'a str, params: &'a HashMap<String, Value<T>>) -> Self {
        EvalContext {
            locale,
            time_zone: None,
            params,
            formatter: None,
            collect: None,
            wrap: None,
            on_warning: None,
        }
    }

    /// Set the IANA time zone used by date and time arguments.
    pub fn with_time_zone(mut self, time_zone: &'a str) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Inject the locale formatting service.
    pub fn with_formatter(mut self, formatter: &'a dyn LocaleFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Provide the callback that combines rich-text parts.
    pub fn with_collect(mut self, collect: CollectFn<'a, T>) -> Self {
        self.collect = Some(collect);
        self
    }

    /// Provide the callback that resolves component placeholders.
    pub fn with_wrap(mut self, wrap: WrapFn<'a, T>) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Provide a sink for non-fatal warnings.
    pub fn with_warning_sink(mut self, on_warning: WarningSink<'a>) -> Self {
        self.on_warning = Some(on_warning);
        self
    }

    /// The locale messages format for.
    pub fn locale(&self) -> &'a str {
        self.locale
    }

    /// The context time zone, if one was set.
    pub fn time_zone(&self) -> Option<&'a str> {
        self.time_zone
    }

    /// Look up an argument value.
    pub fn param(&self, name: &ArgName) -> Option<&'a Value<T>> {
        self.params.get(name.key().as_str())
    }

    pub(crate) fn formatter(&self) -> Option<&'a dyn LocaleFormatter> {
        self.formatter
    }

    pub(crate) fn collect(&self) -> Option<CollectFn<'a, T>> {
        self.collect
    }

    pub(crate) fn wrap(&self) -> Option<WrapFn<'a, T>> {
        self.wrap
    }

    /// Report a non-fatal warning to the sink, if one is attached.
    pub(crate) fn warn(&self, warning: &EvalWarning) {
        if let Some(sink) = self.on_warning {
            sink(warning);
        }
    }
}

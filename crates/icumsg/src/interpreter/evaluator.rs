//! Tree-walking evaluation of compiled messages.
//!
//! Evaluation is a single top-down pass with no backtracking and no state
//! beyond the borrowed context. Argument presence and type are checked
//! explicitly at every interpolation, plural, and element node; formatting
//! goes through the injected locale formatter, degrading as described on
//! each rule when none is present.

use crate::interpreter::context::EvalContext;
use crate::interpreter::error::{EvalError, EvalWarning};
use crate::interpreter::formatter::NumericValue;
use crate::parser::parse;
use crate::types::{
    ArgFormat, ArgName, CompiledMessage, NumberOptions, NumberStyle, PluralCategory, Rendered,
    Selector, Value,
};

/// Evaluate a compiled message to text or a rich value.
///
/// # Example
///
/// ```
/// use icumsg::{EvalContext, Rendered, evaluate, params, parse};
///
/// let message = parse("Hello, {name}!").unwrap();
/// let args = params! { "name" => "Alice" };
/// let ctx = EvalContext::new("en", &args);
/// assert_eq!(
///     evaluate(&message, &ctx).unwrap(),
///     Rendered::Text("Hello, Alice!".to_string()),
/// );
/// ```
pub fn evaluate<T>(
    message: &CompiledMessage,
    ctx: &EvalContext<'_, T>,
) -> Result<Rendered<T>, EvalError> {
    match message {
        CompiledMessage::PlainText(text) => Ok(Rendered::Text(text.clone())),
        CompiledMessage::Concat(parts) => evaluate_concat(parts, ctx),
        CompiledMessage::Var {
            name,
            format,
            subtract,
        } => evaluate_var(name, format, *subtract, ctx),
        CompiledMessage::Plural {
            name,
            subtract,
            branches,
            fallback,
        } => evaluate_plural(name, *subtract, branches, fallback, ctx),
        CompiledMessage::Element { name, message } => {
            evaluate_element(name, message.as_deref(), ctx)
        }
        CompiledMessage::Deferred { source, error } => {
            // Re-parse for a faithful, current error; if parsing now
            // unexpectedly succeeds, surface the stored error instead.
            match parse(source) {
                Err(current) => Err(EvalError::Parse(current)),
                Ok(_) => Err(EvalError::Parse(error.clone())),
            }
        }
    }
}

/// Evaluate a compiled message that must produce plain text.
pub fn format<T>(message: &CompiledMessage, ctx: &EvalContext<'_, T>) -> Result<String, EvalError> {
    match evaluate(message, ctx)? {
        Rendered::Text(text) => Ok(text),
        Rendered::Rich(_) => Err(EvalError::Evaluation {
            reason: "message produced rich content where plain text was required".to_string(),
        }),
    }
}

fn evaluate_concat<T>(
    parts: &[CompiledMessage],
    ctx: &EvalContext<'_, T>,
) -> Result<Rendered<T>, EvalError> {
    let mut results = Vec::with_capacity(parts.len());
    for part in parts {
        results.push(evaluate(part, ctx)?);
    }
    if results.iter().all(|result| matches!(result, Rendered::Text(_))) {
        let mut text = String::new();
        for result in results {
            if let Rendered::Text(part) = result {
                text.push_str(&part);
            }
        }
        return Ok(Rendered::Text(text));
    }
    let Some(collect) = ctx.collect() else {
        return Err(EvalError::Evaluation {
            reason: "rich content requires a collect callback".to_string(),
        });
    };
    // Merge adjacent text and drop empties so the host sees a minimal list.
    let mut merged: Vec<Rendered<T>> = Vec::new();
    for result in results {
        match result {
            Rendered::Text(part) if part.is_empty() => {}
            Rendered::Text(part) => {
                if let Some(Rendered::Text(last)) = merged.last_mut() {
                    last.push_str(&part);
                } else {
                    merged.push(Rendered::Text(part));
                }
            }
            rich => merged.push(rich),
        }
    }
    Ok(collect(merged))
}

fn evaluate_var<T>(
    name: &ArgName,
    arg_format: &ArgFormat,
    subtract: i64,
    ctx: &EvalContext<'_, T>,
) -> Result<Rendered<T>, EvalError> {
    let value = ctx
        .param(name)
        .ok_or_else(|| EvalError::MissingArgument { name: name.clone() })?;
    match arg_format {
        ArgFormat::String => match value {
            Value::String(s) => Ok(Rendered::Text(s.clone())),
            other => Err(type_error(name, "string", other)),
        },
        ArgFormat::Number(options) => {
            let number = numeric_value(name, value)?.subtract(subtract);
            Ok(Rendered::Text(format_number(number, options, ctx)?))
        }
        ArgFormat::DateTime(options) => {
            let Value::DateTime(instant) = value else {
                return Err(type_error(name, "date", value));
            };
            let Some(time_zone) = ctx.time_zone() else {
                return Err(EvalError::MissingArgument {
                    name: ArgName::Name("timeZone".to_string()),
                });
            };
            let Some(formatter) = ctx.formatter() else {
                return Err(EvalError::Evaluation {
                    reason: "date formatting requires a locale formatter".to_string(),
                });
            };
            let text = formatter.format_datetime(ctx.locale(), *instant, time_zone, options)?;
            Ok(Rendered::Text(text))
        }
    }
}

fn format_number<T>(
    value: NumericValue,
    options: &NumberOptions,
    ctx: &EvalContext<'_, T>,
) -> Result<String, EvalError> {
    if let Some(formatter) = ctx.formatter() {
        return Ok(formatter.format_number(ctx.locale(), value, options)?);
    }
    ctx.warn(&EvalWarning::FormatterUnavailable {
        what: "number formatting",
    });
    // Best-effort fallback, sound only for plain decimal with unset or
    // zero fraction digits.
    if options.style != NumberStyle::Decimal {
        return Err(EvalError::Evaluation {
            reason: "number styles beyond plain decimal require a locale formatter".to_string(),
        });
    }
    match (value, options.max_fraction_digits) {
        (NumericValue::Int(n), _) => Ok(n.to_string()),
        (NumericValue::Float(f), Some(0)) => Ok(f.round().to_string()),
        (NumericValue::Float(f), None) => Ok(f.to_string()),
        (NumericValue::Float(_), Some(_)) => Err(EvalError::Evaluation {
            reason: "fraction-digit formatting requires a locale formatter".to_string(),
        }),
    }
}

fn evaluate_plural<T>(
    name: &ArgName,
    subtract: i64,
    branches: &[(Selector, CompiledMessage)],
    fallback: &CompiledMessage,
    ctx: &EvalContext<'_, T>,
) -> Result<Rendered<T>, EvalError> {
    let value = ctx
        .param(name)
        .ok_or_else(|| EvalError::MissingArgument { name: name.clone() })?;
    let raw = numeric_value(name, value)?;
    let relative = raw.subtract(subtract);
    let category = match ctx.formatter() {
        Some(formatter) => formatter.plural_category(ctx.locale(), relative),
        None => {
            ctx.warn(&EvalWarning::FormatterUnavailable {
                what: "plural selection",
            });
            PluralCategory::Other
        }
    };
    // Exact selectors match the raw value, unaffected by the offset;
    // category selectors match the offset value's category.
    let chosen = branches
        .iter()
        .find_map(|(selector, message)| {
            let matches = match selector {
                Selector::Exact(n) => raw.equals_int(*n),
                Selector::Category(branch_category) => *branch_category == category,
            };
            matches.then_some(message)
        })
        .unwrap_or(fallback);
    evaluate(chosen, ctx)
}

fn evaluate_element<T>(
    name: &ArgName,
    message: Option<&CompiledMessage>,
    ctx: &EvalContext<'_, T>,
) -> Result<Rendered<T>, EvalError> {
    let value = ctx
        .param(name)
        .ok_or_else(|| EvalError::MissingArgument { name: name.clone() })?;
    let Value::Component(component) = value else {
        return Err(type_error(name, "component", value));
    };
    let Some(wrap) = ctx.wrap() else {
        return Err(EvalError::Evaluation {
            reason: "component placeholders require a wrap callback".to_string(),
        });
    };
    let child = match message {
        Some(child) => Some(evaluate(child, ctx)?),
        None => None,
    };
    Ok(wrap(component, child))
}

fn numeric_value<T>(name: &ArgName, value: &Value<T>) -> Result<NumericValue, EvalError> {
    match value {
        Value::Number(n) => Ok(NumericValue::Int(*n)),
        Value::Float(f) => Ok(NumericValue::Float(*f)),
        other => Err(type_error(name, "number", other)),
    }
}

fn type_error<T>(name: &ArgName, expected: &'static str, value: &Value<T>) -> EvalError {
    EvalError::ArgumentType {
        name: name.clone(),
        expected,
        actual: value.describe(),
    }
}

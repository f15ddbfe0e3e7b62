//! Tests for plain-text evaluation: interpolation, argument lookup, and
//! argument type checking.

use icumsg::{ArgName, EvalContext, EvalError, Rendered, Value, evaluate, format, params, parse};

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn interpolates_a_named_argument() {
    let message = parse("Hello, {name}!").unwrap();
    let params = params! { "name" => "Alice" };
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "Hello, Alice!");
}

#[test]
fn interpolates_positional_arguments() {
    let message = parse("{1} then {0}").unwrap();
    let params = params! { "0" => "first", "1" => "second" };
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "second then first");
}

#[test]
fn repeats_an_argument() {
    let message = parse("{x}{x}").unwrap();
    let params = params! { "x" => "ab" };
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "abab");
}

#[test]
fn formats_an_empty_message() {
    let message = parse("").unwrap();
    let params = params! {};
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "");
}

#[test]
fn keeps_a_literal_hash_in_plain_text() {
    let message = parse("issue #42").unwrap();
    let params = params! {};
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "issue #42");
}

#[test]
fn renders_quoted_syntax_literally() {
    let message = parse("use '{curly}' braces, I''m told").unwrap();
    let params = params! {};
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "use {curly} braces, I'm told");
}

#[test]
fn evaluate_returns_plain_text_for_text_messages() {
    let message = parse("Hello, {name}!").unwrap();
    let params = params! { "name" => "Bob" };
    let ctx = EvalContext::new("en", &params);
    let rendered: Rendered = evaluate(&message, &ctx).unwrap();
    assert_eq!(rendered, Rendered::Text("Hello, Bob!".to_string()));
}

#[test]
fn accepts_owned_strings_as_values() {
    let message = parse("{greeting}").unwrap();
    let params = params! { "greeting" => String::from("hi") };
    let ctx = EvalContext::new("en", &params);
    assert_eq!(format(&message, &ctx).unwrap(), "hi");
}

// =============================================================================
// Argument lookup failures
// =============================================================================

#[test]
fn missing_named_argument() {
    let message = parse("Hello, {name}!").unwrap();
    let params = params! {};
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "missing argument: name");
    let EvalError::MissingArgument { name } = err else {
        panic!("expected a missing-argument error");
    };
    assert_eq!(name, ArgName::Name("name".to_string()));
}

#[test]
fn missing_positional_argument() {
    let message = parse("{2}").unwrap();
    let params = params! { "0" => "a" };
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "missing argument: 2");
}

// =============================================================================
// Argument type checking
// =============================================================================

#[test]
fn string_argument_rejects_a_number() {
    let message = parse("{name}").unwrap();
    let params = params! { "name" => 5 };
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "argument name: expected string, got number (5)");
    assert!(
        matches!(err, EvalError::ArgumentType { .. }),
        "expected a type error, got: {err:?}"
    );
}

#[test]
fn number_argument_rejects_a_string() {
    let message = parse("{n,number}").unwrap();
    let params = params! { "n" => "five" };
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "argument n: expected number, got string (\"five\")"
    );
}

#[test]
fn plural_argument_rejects_a_string() {
    let message = parse("{n,plural,other{#}}").unwrap();
    let params = params! { "n" => "many" };
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "argument n: expected number, got string (\"many\")"
    );
}

#[test]
fn date_argument_rejects_a_number() {
    let message = parse("{d,date}").unwrap();
    let params = params! { "d" => 5 };
    let ctx = EvalContext::new("en", &params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "argument d: expected date, got number (5)");
}

// =============================================================================
// Context accessors
// =============================================================================

#[test]
fn context_exposes_locale_and_time_zone() {
    let params = params! {};
    let ctx = EvalContext::<()>::new("ru", &params).with_time_zone("Europe/Moscow");
    assert_eq!(ctx.locale(), "ru");
    assert_eq!(ctx.time_zone(), Some("Europe/Moscow"));
}

#[test]
fn context_looks_up_params_by_arg_name() {
    let params = params! { "x" => 7 };
    let ctx = EvalContext::<()>::new("en", &params);
    let value = ctx.param(&ArgName::Name("x".to_string())).unwrap();
    assert_eq!(value.as_number(), Some(7));
    assert!(ctx.param(&ArgName::Index(0)).is_none());
}

#[test]
fn values_report_their_type_names() {
    assert_eq!(Value::<()>::from("x").type_name(), "string");
    assert_eq!(Value::<()>::from(3).type_name(), "number");
    assert_eq!(Value::<()>::from(1.5).type_name(), "number");
}

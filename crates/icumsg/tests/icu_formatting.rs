#![cfg(feature = "icu")]

//! Tests for the ICU4X-backed [`LocaleFormatter`] implementation: number
//! formatting, date and time rendering, and plural category selection.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use icumsg::{
    EvalContext, IcuFormatter, LocaleFormatter, NumberOptions, NumericValue, PluralCategory,
    Value, format, params, parse,
};

// =============================================================================
// Number formatting
// =============================================================================

#[test]
fn formats_integers_with_locale_grouping() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::default();
    assert_eq!(
        formatter.format_number("en", NumericValue::Int(5), &options).unwrap(),
        "5"
    );
    assert_eq!(
        formatter.format_number("en", NumericValue::Int(12345), &options).unwrap(),
        "12,345"
    );
    assert_eq!(
        formatter.format_number("de", NumericValue::Int(12345), &options).unwrap(),
        "12.345"
    );
}

#[test]
fn formats_floats() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::default();
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(2.5), &options).unwrap(),
        "2.5"
    );
}

#[test]
fn integer_style_drops_the_fraction() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::integer();
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(3.7), &options).unwrap(),
        "4"
    );
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(3.2), &options).unwrap(),
        "3"
    );
    assert_eq!(
        formatter.format_number("en", NumericValue::Int(3), &options).unwrap(),
        "3"
    );
}

#[test]
fn percent_style_scales_by_one_hundred() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::percent();
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(0.5), &options).unwrap(),
        "50%"
    );
    assert_eq!(
        formatter.format_number("en", NumericValue::Int(2), &options).unwrap(),
        "200%"
    );
}

#[test]
fn fraction_digit_limit_truncates_but_never_pads() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::builder().max_fraction_digits(2).build();
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(3.14159), &options).unwrap(),
        "3.14"
    );
    assert_eq!(
        formatter.format_number("en", NumericValue::Float(1.5), &options).unwrap(),
        "1.5"
    );
}

#[test]
fn unparseable_locales_fall_back_to_english() {
    let formatter = IcuFormatter::new();
    let options = NumberOptions::default();
    assert_eq!(
        formatter
            .format_number("not a locale!!", NumericValue::Int(12345), &options)
            .unwrap(),
        "12,345"
    );
}

// =============================================================================
// Date and time formatting
// =============================================================================

fn utc_ctx(params: &HashMap<String, Value>) -> EvalContext<'_, ()> {
    EvalContext::new("en", params)
        .with_formatter(&IcuFormatter)
        .with_time_zone("UTC")
}

#[test]
fn date_presets_render() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    for (source, expected) in [
        ("{d,date}", "May 17, 2024"),
        ("{d,date,short}", "5/17/24"),
        ("{d,date,medium}", "May 17, 2024"),
        ("{d,date,long}", "May 17, 2024"),
        ("{d,date,full}", "Friday, May 17, 2024"),
    ] {
        let message = parse(source).unwrap();
        let ctx = utc_ctx(&params);
        assert_eq!(format(&message, &ctx).unwrap(), expected, "source {source}");
    }
}

#[test]
fn time_presets_render_the_local_time() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    let message = parse("{d,time,short}").unwrap();
    let ctx = utc_ctx(&params);
    let text = format(&message, &ctx).unwrap();
    // The day-period separator varies across CLDR versions; pin the digits.
    assert!(text.contains("2:30"), "unexpected time rendering: {text}");
}

#[test]
fn date_skeletons_render() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    for (source, expected) in [
        ("{d,date,::yMMMd}", "May 17, 2024"),
        ("{d,date,::yMd}", "5/17/24"),
        ("{d,time,::Hmm}", "14:30"),
    ] {
        let message = parse(source).unwrap();
        let ctx = utc_ctx(&params);
        assert_eq!(format(&message, &ctx).unwrap(), expected, "source {source}");
    }
}

#[test]
fn combined_skeleton_renders_date_and_time() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    let message = parse("{d,date,::yMMMdHmm}").unwrap();
    let ctx = utc_ctx(&params);
    let text = format(&message, &ctx).unwrap();
    assert!(text.contains("May 17, 2024"), "missing date part: {text}");
    assert!(text.contains("14:30"), "missing time part: {text}");
}

#[test]
fn time_zone_shifts_the_rendered_wall_clock() {
    // 01:30 UTC on the 18th is still the evening of the 17th in New York.
    let when = Utc.with_ymd_and_hms(2024, 5, 18, 1, 30, 0).unwrap();
    let params = params! { "d" => when };
    let date = parse("{d,date}").unwrap();
    let time = parse("{d,time,::Hmm}").unwrap();
    let ctx = EvalContext::new("en", &params)
        .with_formatter(&IcuFormatter)
        .with_time_zone("America/New_York");
    assert_eq!(format(&date, &ctx).unwrap(), "May 17, 2024");
    assert_eq!(format(&time, &ctx).unwrap(), "21:30");
}

#[test]
fn german_dates_use_dotted_numerals() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    let message = parse("{d,date}").unwrap();
    let ctx = EvalContext::new("de", &params)
        .with_formatter(&IcuFormatter)
        .with_time_zone("UTC");
    assert_eq!(format(&message, &ctx).unwrap(), "17.05.2024");
}

#[test]
fn unknown_time_zones_are_reported() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    let message = parse("{d,date}").unwrap();
    let ctx = EvalContext::new("en", &params)
        .with_formatter(&IcuFormatter)
        .with_time_zone("Mars/Olympus");
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "formatting failed: unknown time zone: Mars/Olympus");
}

#[test]
fn zone_only_skeletons_cannot_render() {
    let when = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap();
    let params = params! { "d" => when };
    let message = parse("{d,time,::zzzz}").unwrap();
    let ctx = utc_ctx(&params);
    let err = format(&message, &ctx).unwrap_err();
    assert_eq!(
        err.to_string(),
        "formatting failed: date skeleton has no renderable fields"
    );
}

// =============================================================================
// Plural categories
// =============================================================================

#[test]
fn selects_cldr_plural_categories() {
    let formatter = IcuFormatter::new();
    for (locale, value, expected) in [
        ("en", NumericValue::Int(1), PluralCategory::One),
        ("en", NumericValue::Int(0), PluralCategory::Other),
        ("en", NumericValue::Float(1.5), PluralCategory::Other),
        ("ru", NumericValue::Int(2), PluralCategory::Few),
        ("ru", NumericValue::Int(5), PluralCategory::Many),
        ("ru", NumericValue::Int(21), PluralCategory::One),
        ("ar", NumericValue::Int(2), PluralCategory::Two),
        ("ja", NumericValue::Int(1), PluralCategory::Other),
    ] {
        assert_eq!(
            formatter.plural_category(locale, value),
            expected,
            "locale {locale}, value {value:?}"
        );
    }
}

#[test]
fn fractional_values_never_collapse_to_integers() {
    let formatter = IcuFormatter::new();
    // Each of these would land on a different category if the fraction
    // were truncated away before selection.
    for (locale, value) in [("en", 1.5), ("ru", 21.5), ("ru", 2.5)] {
        assert_eq!(
            formatter.plural_category(locale, NumericValue::Float(value)),
            PluralCategory::Other,
            "locale {locale}, value {value}"
        );
    }
}

#[test]
fn whole_floats_select_like_integers() {
    let formatter = IcuFormatter::new();
    assert_eq!(
        formatter.plural_category("en", NumericValue::Float(1.0)),
        PluralCategory::One
    );
}

#[test]
fn underscore_locale_spellings_select_like_hyphenated_ones() {
    let formatter = IcuFormatter::new();
    assert_eq!(
        formatter.plural_category("ru_RU", NumericValue::Int(5)),
        PluralCategory::Many
    );
    assert_eq!(
        formatter.plural_category("ru-RU", NumericValue::Int(5)),
        PluralCategory::Many
    );
}

#[test]
fn malformed_locale_falls_back_to_english_rules() {
    let formatter = IcuFormatter::new();
    // Russian 5 is many; a tag that cannot parse at all uses English
    // rules instead, where 5 is other.
    assert_eq!(
        formatter.plural_category("not a locale!", NumericValue::Int(5)),
        PluralCategory::Other
    );
}

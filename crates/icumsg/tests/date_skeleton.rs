//! Integration tests for date skeleton parsing.
//!
//! Skeletons are run-length encoded field requests (`yMMMd`, `Hmm`). These
//! tests check that each letter run lands in the right field at the right
//! width.

use icumsg::{
    ArgFormat, CompiledMessage, DateTimeFields, DateTimeStyle, HourCycle, MonthWidth,
    NameWidth, NumericWidth, parse,
};

fn parse_fields(source: &str) -> DateTimeFields {
    let message = parse(source).unwrap();
    let CompiledMessage::Var { format, .. } = message else {
        panic!("expected a Var node");
    };
    let ArgFormat::DateTime(options) = format else {
        panic!("expected a date/time format");
    };
    let DateTimeStyle::Fields(fields) = options.style else {
        panic!("expected skeleton fields");
    };
    fields
}

// =============================================================================
// Date fields
// =============================================================================

#[test]
fn test_year_month_day() {
    let fields = parse_fields("{d,date,::yMMMd}");
    assert_eq!(
        fields,
        DateTimeFields::builder()
            .year(NumericWidth::Numeric)
            .month(MonthWidth::Short)
            .day(NumericWidth::Numeric)
            .build(),
    );
}

#[test]
fn test_two_digit_widths() {
    let fields = parse_fields("{d,date,::yyMMdd}");
    assert_eq!(fields.year, Some(NumericWidth::TwoDigit));
    assert_eq!(fields.month, Some(MonthWidth::TwoDigit));
    assert_eq!(fields.day, Some(NumericWidth::TwoDigit));
}

#[test]
fn test_month_widths() {
    assert_eq!(parse_fields("{d,date,::yM}").month, Some(MonthWidth::Numeric));
    assert_eq!(parse_fields("{d,date,::yMM}").month, Some(MonthWidth::TwoDigit));
    assert_eq!(parse_fields("{d,date,::yMMM}").month, Some(MonthWidth::Short));
    assert_eq!(parse_fields("{d,date,::yMMMM}").month, Some(MonthWidth::Long));
    assert_eq!(parse_fields("{d,date,::yMMMMM}").month, Some(MonthWidth::Narrow));
}

#[test]
fn test_standalone_month_letter() {
    assert_eq!(parse_fields("{d,date,::yLLL}").month, Some(MonthWidth::Short));
}

#[test]
fn test_weekday_widths() {
    assert_eq!(parse_fields("{d,date,::yMdE}").weekday, Some(NameWidth::Short));
    assert_eq!(parse_fields("{d,date,::yMdEEEE}").weekday, Some(NameWidth::Long));
    assert_eq!(parse_fields("{d,date,::yMdEEEEE}").weekday, Some(NameWidth::Narrow));
}

#[test]
fn test_era() {
    let fields = parse_fields("{d,date,::Gy}");
    assert_eq!(fields.era, Some(NameWidth::Short));
    assert_eq!(fields.year, Some(NumericWidth::Numeric));
    assert_eq!(parse_fields("{d,date,::GGGGy}").era, Some(NameWidth::Long));
}

// =============================================================================
// Time fields and hour cycles
// =============================================================================

#[test]
fn test_hour_letters_set_the_cycle() {
    assert_eq!(parse_fields("{d,time,::hm}").hour_cycle, Some(HourCycle::H12));
    assert_eq!(parse_fields("{d,time,::Hm}").hour_cycle, Some(HourCycle::H23));
    assert_eq!(parse_fields("{d,time,::Km}").hour_cycle, Some(HourCycle::H11));
    assert_eq!(parse_fields("{d,time,::km}").hour_cycle, Some(HourCycle::H24));
    // 'j' defers to the locale.
    assert_eq!(parse_fields("{d,time,::jm}").hour_cycle, None);
}

#[test]
fn test_hour_minute_second() {
    let fields = parse_fields("{d,time,::Hmmss}");
    assert_eq!(fields.hour, Some(NumericWidth::Numeric));
    assert_eq!(fields.minute, Some(NumericWidth::TwoDigit));
    assert_eq!(fields.second, Some(NumericWidth::TwoDigit));
}

#[test]
fn test_two_digit_hour() {
    let fields = parse_fields("{d,time,::hhmm}");
    assert_eq!(fields.hour, Some(NumericWidth::TwoDigit));
    assert_eq!(fields.hour_cycle, Some(HourCycle::H12));
}

#[test]
fn test_day_period_letter_is_ignored() {
    // 'a' is implied by the hour cycle and contributes no field on its own.
    let fields = parse_fields("{d,time,::hma}");
    assert_eq!(fields.hour, Some(NumericWidth::Numeric));
    assert_eq!(fields.minute, Some(NumericWidth::Numeric));
}

#[test]
fn test_time_zone_name() {
    assert_eq!(
        parse_fields("{d,time,::Hmz}").time_zone_name,
        Some(NameWidth::Short)
    );
    assert_eq!(
        parse_fields("{d,time,::Hmzzzz}").time_zone_name,
        Some(NameWidth::Long)
    );
}

// =============================================================================
// Mixed skeletons
// =============================================================================

#[test]
fn test_date_and_time_in_one_skeleton() {
    let fields = parse_fields("{d,date,::yMMMdHmm}");
    assert!(fields.year.is_some());
    assert!(fields.month.is_some());
    assert!(fields.day.is_some());
    assert_eq!(fields.hour, Some(NumericWidth::Numeric));
    assert_eq!(fields.minute, Some(NumericWidth::TwoDigit));
    assert_eq!(fields.hour_cycle, Some(HourCycle::H23));
}

#[test]
fn test_zone_only_skeleton_parses() {
    // Zone names are a recognized field, so this is not a parse error.
    let fields = parse_fields("{d,time,::zzzz}");
    assert_eq!(fields.time_zone_name, Some(NameWidth::Long));
    assert_eq!(fields.hour, None);
}

#[test]
fn test_letter_order_does_not_matter() {
    assert_eq!(parse_fields("{d,date,::yMMMd}"), parse_fields("{d,date,::dMMMy}"));
}

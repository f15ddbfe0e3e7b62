//! Locale-aware formatting backed by ICU4X.
//!
//! [`IcuFormatter`] is the batteries-included [`LocaleFormatter`]: numbers go
//! through `icu_decimal`, dates and times through `icu_datetime` field sets,
//! and plural selection through `icu_plurals`. All CLDR data is compiled in,
//! so construction never touches the filesystem.
//!
//! Plural rules are cached per thread per locale to avoid re-creating
//! `PluralRules` instances on every call. The cache is initialized lazily
//! on first access within each thread.

use std::cell::RefCell;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use fixed_decimal::{Decimal, FloatPrecision};
use icu_calendar::{Date, Iso};
use icu_datetime::DateTimeFormatter;
use icu_datetime::fieldsets::enums::{DateAndTimeFieldSet, DateFieldSet, TimeFieldSet};
use icu_datetime::fieldsets::{T, YMD, YMDE};
use icu_datetime::input::{DateTime as IcuDateTime, Time as IcuTime};
use icu_datetime::options::Length;
use icu_decimal::DecimalFormatter;
use icu_decimal::options::DecimalFormatterOptions;
use icu_locale_core::extensions::unicode::{key, value};
use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory as IcuPluralCategory, PluralRuleType, PluralRules};

use crate::interpreter::formatter::{FormatError, LocaleFormatter, NumericValue};
use crate::types::{
    DateTimeFields, DateTimeLength, DateTimeOptions, DateTimePart, DateTimeStyle, HourCycle,
    MonthWidth, NumberOptions, NumberStyle, PluralCategory,
};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by resolved locale tag.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// A [`LocaleFormatter`] backed by ICU4X's compiled CLDR data.
///
/// # Example
///
/// ```
/// use icumsg::{EvalContext, IcuFormatter, format, params, parse};
///
/// let message = parse("{count, plural, one {# item} other {# items}}").unwrap();
/// let formatter = IcuFormatter::new();
/// let args = params! { "count" => 12345 };
/// let ctx = EvalContext::new("en", &args).with_formatter(&formatter);
/// assert_eq!(format(&message, &ctx).unwrap(), "12,345 items");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuFormatter;

impl IcuFormatter {
    pub fn new() -> Self {
        IcuFormatter
    }
}

impl LocaleFormatter for IcuFormatter {
    fn format_number(
        &self,
        locale: &str,
        value: NumericValue,
        options: &NumberOptions,
    ) -> Result<String, FormatError> {
        let scaled = match options.style {
            NumberStyle::Decimal => value,
            NumberStyle::Percent => scale_to_percent(value),
        };
        let mut decimal = to_decimal(scaled)?;
        if let Some(digits) = options.max_fraction_digits {
            apply_max_fraction(&mut decimal, digits);
        }
        let formatter = DecimalFormatter::try_new(
            parse_locale(locale).into(),
            DecimalFormatterOptions::default(),
        )
        .map_err(|e| FormatError::new(format!("cannot build number formatter: {e}")))?;
        let text = formatter.format(&decimal).to_string();
        Ok(match options.style {
            NumberStyle::Decimal => text,
            // icu_decimal has no percent formatter, so the sign is attached
            // after rendering the scaled value.
            NumberStyle::Percent => format!("{text}%"),
        })
    }

    fn format_datetime(
        &self,
        locale: &str,
        value: DateTime<Utc>,
        time_zone: &str,
        options: &DateTimeOptions,
    ) -> Result<String, FormatError> {
        let tz: Tz = time_zone
            .parse()
            .map_err(|_| FormatError::new(format!("unknown time zone: {time_zone}")))?;
        let local = value.with_timezone(&tz).naive_local();
        let input = to_icu_datetime(&local)?;
        let (set, hour_cycle) = resolve_field_set(options)?;
        render(formatter_locale(locale, hour_cycle), set, &input)
    }

    fn plural_category(&self, locale: &str, value: NumericValue) -> PluralCategory {
        with_plural_rules(locale, |rules| {
            let category = match value {
                NumericValue::Int(n) => rules.category_for(n),
                NumericValue::Float(f) if f.fract() == 0.0 => rules.category_for(f as i64),
                // Fraction digits feed the plural operands, so 1.5 must not
                // collapse to the integer 1 before selection.
                NumericValue::Float(f) => match f.to_string().parse::<Decimal>() {
                    Ok(dec) => rules.category_for(&dec),
                    Err(_) => rules.category_for(f as i64),
                },
            };
            from_icu_category(category)
        })
        .unwrap_or(PluralCategory::Other)
    }
}

/// Run `f` against the cached `PluralRules` for a locale, building and
/// caching them on first use. Spellings that resolve to the same locale
/// share an entry. Returns `None` when no rules can be built.
fn with_plural_rules<R>(locale: &str, f: impl FnOnce(&PluralRules) -> R) -> Option<R> {
    let loc = parse_locale(locale);
    let tag = loc.to_string();
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(cached, _)| *cached == tag) {
            return Some(f(&entry.1));
        }
        let rules = PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()).ok()?;
        let result = f(&rules);
        cache.push((tag, rules));
        Some(result)
    })
}

/// Translate an ICU plural category to the engine's own enum.
fn from_icu_category(category: IcuPluralCategory) -> PluralCategory {
    match category {
        IcuPluralCategory::Zero => PluralCategory::Zero,
        IcuPluralCategory::One => PluralCategory::One,
        IcuPluralCategory::Two => PluralCategory::Two,
        IcuPluralCategory::Few => PluralCategory::Few,
        IcuPluralCategory::Many => PluralCategory::Many,
        IcuPluralCategory::Other => PluralCategory::Other,
    }
}

/// Parse a BCP-47 tag, accepting POSIX-style underscore separators and
/// falling back to English for malformed input.
fn parse_locale(tag: &str) -> Locale {
    let tag = tag.replace('_', "-");
    Locale::try_from_str(&tag).unwrap_or_else(|_| locale!("en"))
}

/// The locale handed to date formatters, with the skeleton's hour cycle
/// request carried as an `-u-hc-` extension keyword.
fn formatter_locale(tag: &str, hour_cycle: Option<HourCycle>) -> Locale {
    let mut loc = parse_locale(tag);
    if let Some(cycle) = hour_cycle {
        let hc = match cycle {
            HourCycle::H11 => value!("h11"),
            HourCycle::H12 => value!("h12"),
            HourCycle::H23 => value!("h23"),
            HourCycle::H24 => value!("h24"),
        };
        loc.extensions.unicode.keywords.set(key!("hc"), hc);
    }
    loc
}

fn scale_to_percent(value: NumericValue) -> NumericValue {
    match value {
        NumericValue::Int(n) => match n.checked_mul(100) {
            Some(scaled) => NumericValue::Int(scaled),
            None => NumericValue::Float(n as f64 * 100.0),
        },
        NumericValue::Float(f) => NumericValue::Float(f * 100.0),
    }
}

fn to_decimal(value: NumericValue) -> Result<Decimal, FormatError> {
    match value {
        NumericValue::Int(n) => Ok(Decimal::from(n)),
        NumericValue::Float(f) => Decimal::try_from_f64(f, FloatPrecision::RoundTrip)
            .map_err(|_| FormatError::new(format!("cannot format number: {f}"))),
    }
}

/// Round away fraction digits beyond the limit. Numbers already within the
/// limit pass through untouched rather than being padded.
fn apply_max_fraction(decimal: &mut Decimal, digits: u8) {
    let limit = -i16::from(digits);
    if *decimal.magnitude_range().start() < limit {
        decimal.round(limit);
    }
}

fn to_icu_datetime(local: &NaiveDateTime) -> Result<IcuDateTime<Iso>, FormatError> {
    let date = Date::try_new_iso(local.year(), local.month() as u8, local.day() as u8)
        .map_err(|_| FormatError::new(format!("date out of range: {local}")))?;
    let time = IcuTime::try_new(
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
        local.nanosecond(),
    )
    .map_err(|_| FormatError::new(format!("time out of range: {local}")))?;
    Ok(IcuDateTime { date, time })
}

/// A field set paired with the formatter type that renders it.
enum AnyFieldSet {
    Date(DateFieldSet),
    DateTime(DateAndTimeFieldSet),
    Time(TimeFieldSet),
}

/// Map compiled options onto the nearest ICU field set.
///
/// Presets translate directly. Skeletons are approximated: the month width
/// picks the length, seconds pick minute versus second precision, and a
/// weekday adds the `E` field on date-only skeletons.
fn resolve_field_set(
    options: &DateTimeOptions,
) -> Result<(AnyFieldSet, Option<HourCycle>), FormatError> {
    match &options.style {
        DateTimeStyle::Length(length) => {
            let len = icu_length(*length);
            let set = match options.part {
                DateTimePart::Date => {
                    if *length == DateTimeLength::Full {
                        AnyFieldSet::Date(DateFieldSet::YMDE(YMDE::for_length(len)))
                    } else {
                        AnyFieldSet::Date(DateFieldSet::YMD(YMD::for_length(len)))
                    }
                }
                DateTimePart::Time => {
                    let time = match length {
                        DateTimeLength::Short => T::hm(),
                        DateTimeLength::Medium | DateTimeLength::Long | DateTimeLength::Full => {
                            T::hms()
                        }
                    };
                    AnyFieldSet::Time(TimeFieldSet::T(time.with_length(len)))
                }
            };
            Ok((set, None))
        }
        DateTimeStyle::Fields(fields) => {
            let len = skeleton_length(fields);
            let set = if fields.has_date() && fields.has_time() {
                // The weekday is dropped when a time is present; combined
                // field sets cover the year-month-day shapes only.
                let ymd = YMD::for_length(len);
                let ymdt = if fields.second.is_some() {
                    ymd.with_time_hms()
                } else {
                    ymd.with_time_hm()
                };
                AnyFieldSet::DateTime(DateAndTimeFieldSet::YMDT(ymdt))
            } else if fields.has_date() {
                if fields.weekday.is_some() {
                    AnyFieldSet::Date(DateFieldSet::YMDE(YMDE::for_length(len)))
                } else {
                    AnyFieldSet::Date(DateFieldSet::YMD(YMD::for_length(len)))
                }
            } else if fields.has_time() {
                let time = if fields.second.is_some() { T::hms() } else { T::hm() };
                AnyFieldSet::Time(TimeFieldSet::T(time.with_length(len)))
            } else {
                return Err(FormatError::new("date skeleton has no renderable fields"));
            };
            Ok((set, fields.hour_cycle))
        }
    }
}

fn icu_length(length: DateTimeLength) -> Length {
    match length {
        DateTimeLength::Short => Length::Short,
        DateTimeLength::Medium => Length::Medium,
        DateTimeLength::Long | DateTimeLength::Full => Length::Long,
    }
}

fn skeleton_length(fields: &DateTimeFields) -> Length {
    match fields.month {
        Some(MonthWidth::Long | MonthWidth::Narrow) => Length::Long,
        Some(MonthWidth::Short) | None => Length::Medium,
        Some(MonthWidth::Numeric | MonthWidth::TwoDigit) => Length::Short,
    }
}

fn render(
    locale: Locale,
    set: AnyFieldSet,
    input: &IcuDateTime<Iso>,
) -> Result<String, FormatError> {
    match set {
        AnyFieldSet::Date(set) => {
            let formatter = DateTimeFormatter::<DateFieldSet>::try_new(locale.into(), set)
                .map_err(|e| FormatError::new(format!("cannot build date formatter: {e}")))?;
            Ok(formatter.format(input).to_string())
        }
        AnyFieldSet::DateTime(set) => {
            let formatter = DateTimeFormatter::<DateAndTimeFieldSet>::try_new(locale.into(), set)
                .map_err(|e| FormatError::new(format!("cannot build date formatter: {e}")))?;
            Ok(formatter.format(input).to_string())
        }
        AnyFieldSet::Time(set) => {
            let formatter = DateTimeFormatter::<TimeFieldSet>::try_new(locale.into(), set)
                .map_err(|e| FormatError::new(format!("cannot build time formatter: {e}")))?;
            Ok(formatter.format(input).to_string())
        }
    }
}

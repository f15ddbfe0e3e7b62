use bon::Builder;

/// Compiled formatting options for a date or time argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeOptions {
    /// Whether the argument was written as `date` or `time`.
    pub part: DateTimePart,

    /// Preset length or explicit skeleton-derived fields.
    pub style: DateTimeStyle,
}

impl DateTimeOptions {
    /// Options for an argument with no explicit style: the medium preset.
    pub fn new(part: DateTimePart) -> Self {
        DateTimeOptions {
            part,
            style: DateTimeStyle::Length(DateTimeLength::Medium),
        }
    }
}

/// Which calendar half a `DateTimeOptions` preset renders.
///
/// Only meaningful for preset lengths; an explicit skeleton decides its own
/// fields regardless of whether it was written after `date` or `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimePart {
    Date,
    Time,
}

/// Either a preset length or a skeleton-derived field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// A named preset (`{d,date,long}`).
    Length(DateTimeLength),
    /// Fields compiled from a `::skeleton` style.
    Fields(DateTimeFields),
}

/// Preset lengths accepted after `date` and `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeLength {
    Short,
    Medium,
    Long,
    Full,
}

impl DateTimeLength {
    /// Style keywords accepted by the grammar, used for typo suggestions.
    pub(crate) const KEYWORDS: &'static [&'static str] =
        &["short", "medium", "long", "full"];

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "short" => Some(DateTimeLength::Short),
            "medium" => Some(DateTimeLength::Medium),
            "long" => Some(DateTimeLength::Long),
            "full" => Some(DateTimeLength::Full),
            _ => None,
        }
    }
}

/// The field set compiled from a date skeleton such as `yMMMd` or `Hm`.
///
/// Each field is `None` when its letter does not appear in the skeleton.
/// An explicit builder is provided for composing field sets without
/// grammar source.
///
/// # Example
///
/// ```
/// use icumsg::{DateTimeFields, MonthWidth, NumericWidth};
///
/// let fields = DateTimeFields::builder()
///     .year(NumericWidth::Numeric)
///     .month(MonthWidth::Short)
///     .day(NumericWidth::Numeric)
///     .build();
/// assert_eq!(fields.month, Some(MonthWidth::Short));
/// assert_eq!(fields.hour, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Builder)]
pub struct DateTimeFields {
    pub era: Option<NameWidth>,
    pub year: Option<NumericWidth>,
    pub month: Option<MonthWidth>,
    pub day: Option<NumericWidth>,
    pub weekday: Option<NameWidth>,
    pub hour: Option<NumericWidth>,
    pub minute: Option<NumericWidth>,
    pub second: Option<NumericWidth>,
    pub time_zone_name: Option<NameWidth>,

    /// Set by the hour letters `h`, `H`, `K`, `k`; `j` leaves it `None`
    /// for the locale default.
    pub hour_cycle: Option<HourCycle>,
}

impl DateTimeFields {
    /// Whether the skeleton contributed any date field.
    pub fn has_date(&self) -> bool {
        self.era.is_some()
            || self.year.is_some()
            || self.month.is_some()
            || self.day.is_some()
            || self.weekday.is_some()
    }

    /// Whether the skeleton contributed any time field.
    pub fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    /// Whether the skeleton contributed any field at all.
    pub fn is_empty(&self) -> bool {
        !self.has_date() && !self.has_time() && self.time_zone_name.is_none()
    }
}

/// Width of a numeric field: `d` renders numeric, `dd` two-digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericWidth {
    Numeric,
    TwoDigit,
}

/// Width of a named field such as a weekday or era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWidth {
    Short,
    Long,
    Narrow,
}

/// Width of a month field, which can render as a number or a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthWidth {
    Numeric,
    TwoDigit,
    Short,
    Long,
    Narrow,
}

/// The hour cycle requested by a skeleton's hour letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    /// `K`: hours 0-11 with a day period.
    H11,
    /// `h`: hours 1-12 with a day period.
    H12,
    /// `H`: hours 0-23.
    H23,
    /// `k`: hours 1-24.
    H24,
}

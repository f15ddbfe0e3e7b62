//! Date skeleton compilation.
//!
//! A skeleton such as `yMMMd` or `Hm` is a run-length encoding of date and
//! time fields: each maximal run of one repeated letter selects a field,
//! and the run length selects its width. Unknown letters and out-of-range
//! runs are invalid; a skeleton whose runs are all recognized but
//! contribute no field (only day-period markers) is rejected separately so
//! the two failure modes stay distinguishable.

use crate::parser::error::ParseError;
use crate::types::{DateTimeFields, HourCycle, MonthWidth, NameWidth, NumericWidth};

/// Compile a skeleton string into an explicit field set.
pub fn parse_skeleton(skeleton: &str) -> Result<DateTimeFields, ParseError> {
    let mut fields = DateTimeFields::default();
    let mut rest = skeleton;
    while let Some(letter) = rest.chars().next() {
        let count = rest.chars().take_while(|&c| c == letter).count();
        rest = &rest[letter.len_utf8() * count..];
        if !apply_run(&mut fields, letter, count) {
            return Err(ParseError::InvalidSkeleton {
                skeleton: skeleton.to_string(),
            });
        }
    }
    if fields.is_empty() {
        return Err(ParseError::InsufficientFields {
            skeleton: skeleton.to_string(),
        });
    }
    Ok(fields)
}

/// Apply one letter run to the field set. Returns false for an
/// unrecognized letter or repetition count.
fn apply_run(fields: &mut DateTimeFields, letter: char, count: usize) -> bool {
    match (letter, count) {
        ('G', 1..=3) => fields.era = Some(NameWidth::Short),
        ('G', 4) => fields.era = Some(NameWidth::Long),
        ('G', 5) => fields.era = Some(NameWidth::Narrow),
        ('y', 2) => fields.year = Some(NumericWidth::TwoDigit),
        ('y', _) => fields.year = Some(NumericWidth::Numeric),
        ('M' | 'L', 1) => fields.month = Some(MonthWidth::Numeric),
        ('M' | 'L', 2) => fields.month = Some(MonthWidth::TwoDigit),
        ('M' | 'L', 3) => fields.month = Some(MonthWidth::Short),
        ('M' | 'L', 4) => fields.month = Some(MonthWidth::Long),
        ('M' | 'L', 5) => fields.month = Some(MonthWidth::Narrow),
        ('d', 1) => fields.day = Some(NumericWidth::Numeric),
        ('d', 2) => fields.day = Some(NumericWidth::TwoDigit),
        ('E', 1..=3) => fields.weekday = Some(NameWidth::Short),
        ('E', 4) => fields.weekday = Some(NameWidth::Long),
        ('E', 5) => fields.weekday = Some(NameWidth::Narrow),
        ('h' | 'H' | 'K' | 'k' | 'j', 1 | 2) => {
            fields.hour = Some(if count == 2 {
                NumericWidth::TwoDigit
            } else {
                NumericWidth::Numeric
            });
            fields.hour_cycle = match letter {
                'h' => Some(HourCycle::H12),
                'H' => Some(HourCycle::H23),
                'K' => Some(HourCycle::H11),
                'k' => Some(HourCycle::H24),
                // 'j' requests the locale default
                _ => None,
            };
        }
        ('m', 1) => fields.minute = Some(NumericWidth::Numeric),
        ('m', 2) => fields.minute = Some(NumericWidth::TwoDigit),
        ('s', 1) => fields.second = Some(NumericWidth::Numeric),
        ('s', 2) => fields.second = Some(NumericWidth::TwoDigit),
        ('z', 1..=3) => fields.time_zone_name = Some(NameWidth::Short),
        ('z', 4) => fields.time_zone_name = Some(NameWidth::Long),
        // Day period markers are tolerated but the hour field drives them.
        ('a', 1..=5) => {}
        _ => return false,
    }
    true
}

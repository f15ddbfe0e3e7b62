/// A CLDR plural category.
///
/// Different languages bucket counts differently: English uses "one" and
/// "other", Russian adds "few" and "many", and Arabic uses all six. The
/// category for a given count and locale is decided by the injected
/// [`LocaleFormatter`](crate::LocaleFormatter); `Other` is also the
/// degradation default when no formatter is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Parse a branch selector keyword. Returns `None` for `other` and for
    /// anything that is not a category.
    pub(crate) fn from_selector(keyword: &str) -> Option<Self> {
        match keyword {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            _ => None,
        }
    }

    /// The CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

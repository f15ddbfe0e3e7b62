use serde::{Deserialize, Serialize};

/// The name of a message argument.
///
/// ICU messages address arguments either by name (`{count}`) or by
/// position (`{0}`). Tag pairs (`<a>...</a>`) must agree on both the form
/// and the spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgName {
    /// A named argument matching `[A-Za-z_][A-Za-z0-9_]*`.
    Name(String),
    /// A positional argument, a non-negative integer.
    Index(u64),
}

impl ArgName {
    /// The key under which this argument is looked up in a parameter map.
    ///
    /// Positional arguments use their decimal representation, so `{0}` is
    /// supplied as the `"0"` entry of the map.
    pub fn key(&self) -> String {
        match self {
            ArgName::Name(name) => name.clone(),
            ArgName::Index(index) => index.to_string(),
        }
    }
}

impl From<&str> for ArgName {
    fn from(s: &str) -> Self {
        ArgName::Name(s.to_string())
    }
}

impl From<String> for ArgName {
    fn from(s: String) -> Self {
        ArgName::Name(s)
    }
}

impl From<u64> for ArgName {
    fn from(index: u64) -> Self {
        ArgName::Index(index)
    }
}

impl From<usize> for ArgName {
    fn from(index: usize) -> Self {
        ArgName::Index(index as u64)
    }
}

impl std::fmt::Display for ArgName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgName::Name(name) => write!(f, "{name}"),
            ArgName::Index(index) => write!(f, "{index}"),
        }
    }
}

//! Parse error types for the message grammar.
//!
//! Errors carry symbolic context only: the offending lexeme and the set of
//! token kinds that would have been accepted. There are no source offsets;
//! the message text itself is the stable contract and several strings here
//! are asserted on exactly by callers.

use thiserror::Error;

use crate::types::ArgName;

/// An error raised while parsing a message source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token outside the expected set, including EOF inside a construct.
    #[error("Unexpected token {found} (expected {expected})")]
    UnexpectedToken { found: String, expected: String },

    /// Whitespace at a point the grammar forbids it, such as directly
    /// after `=` in an exact selector or around a tag-closing `/`.
    #[error("Unexpected whitespace before {token}")]
    UnexpectedWhitespace { token: String },

    /// EOF inside a quoted span.
    #[error("Unclosed quoted string")]
    UnclosedQuote,

    /// A legacy ICU argument type this grammar deliberately rejects.
    #[error("{arg_type} is not supported")]
    UnsupportedType { arg_type: String },

    /// An argument type outside the grammar entirely.
    #[error("Invalid argument type: {arg_type}{}", format_suggestions(suggestions))]
    InvalidType {
        arg_type: String,
        suggestions: Vec<String>,
    },

    /// An argument style outside the per-type allow-list.
    #[error("Invalid {arg_type} style: {style}{}", format_suggestions(suggestions))]
    InvalidStyle {
        arg_type: &'static str,
        style: String,
        suggestions: Vec<String>,
    },

    /// A skeleton containing an unrecognized letter or repetition run.
    #[error("Invalid date skeleton: {skeleton}")]
    InvalidSkeleton { skeleton: String },

    /// A skeleton whose runs were all recognized but produced no field.
    #[error("Insufficient fields in date skeleton: {skeleton}")]
    InsufficientFields { skeleton: String },

    /// A plural selector keyword that is not a plural category.
    #[error("Invalid plural selector: {selector}{}", format_suggestions(suggestions))]
    InvalidSelector {
        selector: String,
        suggestions: Vec<String>,
    },

    /// The same selector appearing twice within one plural construct.
    #[error("Duplicate selector {selector}")]
    DuplicateSelector { selector: String },

    /// A plural construct whose final branch is not the `other` branch.
    #[error("Last selector should be other")]
    LastSelectorNotOther,

    /// A `#` placeholder outside any plural branch.
    #[error("Unexpected '#' outside of a plural branch")]
    StrayOctothorpe,

    /// A tag closed under a different name than it was opened with.
    #[error("Mismatched tag: <{open}> was closed with </{close}>")]
    MismatchedTag { open: ArgName, close: ArgName },

    /// A numeric literal too large to represent.
    #[error("Invalid number: {lexeme}")]
    InvalidNumber { lexeme: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// Allows distance 1 for names of three characters or fewer and distance 2
/// for longer names, returning at most three candidates, closest first.
pub(crate) fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

//! Evaluation error and warning types.

use thiserror::Error;

use crate::interpreter::formatter::FormatError;
use crate::parser::ParseError;
use crate::types::ArgName;

/// An error raised while evaluating a compiled message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A structurally valid message evaluated in a context that cannot
    /// host it, such as rich content without a `collect` callback.
    #[error("cannot evaluate message: {reason}")]
    Evaluation { reason: String },

    /// A required argument was not supplied.
    ///
    /// Also raised with the name `timeZone` when a date or time argument
    /// is evaluated in a context without a time zone.
    #[error("missing argument: {name}")]
    MissingArgument { name: ArgName },

    /// An argument was supplied with the wrong runtime type.
    #[error("argument {name}: expected {expected}, got {actual}")]
    ArgumentType {
        name: ArgName,
        expected: &'static str,
        actual: String,
    },

    /// The locale formatter failed.
    #[error("formatting failed: {0}")]
    Format(#[from] FormatError),

    /// A deferred source string failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A non-fatal problem reported through the context's warning sink.
///
/// Warnings fire when evaluation continues with an approximation instead
/// of failing; they never replace a missing- or mistyped-argument error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalWarning {
    /// No locale formatter was injected where one was wanted.
    FormatterUnavailable {
        /// What degraded: "number formatting" or "plural selection".
        what: &'static str,
    },
}

impl std::fmt::Display for EvalWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalWarning::FormatterUnavailable { what } => {
                write!(f, "no locale formatter available for {what}; using a fallback")
            }
        }
    }
}

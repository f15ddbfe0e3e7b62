//! Message evaluator for compiled messages.
//!
//! This module provides the evaluation engine that takes compiled messages
//! and produces formatted strings or host-defined rich values. It resolves
//! arguments, applies plural selection, and delegates locale formatting to
//! an injected [`LocaleFormatter`].

mod context;
mod error;
mod evaluator;
mod formatter;
#[cfg(feature = "icu")]
mod icu;

pub use context::{CollectFn, EvalContext, WarningSink, WrapFn};
pub use error::{EvalError, EvalWarning};
pub use evaluator::{evaluate, format};
pub use formatter::{FormatError, LocaleFormatter, NumericValue};
#[cfg(feature = "icu")]
pub use icu::IcuFormatter;

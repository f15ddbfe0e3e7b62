//! Compiled message IR.
//!
//! These types are the interchange format between the parser, direct
//! message composition, caching, and the evaluator. They are pure data:
//! construction performs the only logic (flattening and merging), and a
//! compiled message is never mutated afterwards.

use crate::parser::{ParseError, parse};
use crate::types::arg_name::ArgName;
use crate::types::datetime::DateTimeOptions;
use crate::types::number::NumberOptions;
use crate::types::plural::PluralCategory;

/// A compiled message, ready for evaluation.
///
/// Produced by [`parse`] or composed directly from these variants. The
/// evaluator treats both origins identically.
///
/// # Example
///
/// ```
/// use icumsg::{CompiledMessage, parse};
///
/// let message = parse("Hello, {name}!").unwrap();
/// assert_eq!(
///     message,
///     CompiledMessage::concat([
///         CompiledMessage::text("Hello, "),
///         CompiledMessage::Var {
///             name: "name".into(),
///             format: icumsg::ArgFormat::String,
///             subtract: 0,
///         },
///         CompiledMessage::text("!"),
///     ]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledMessage {
    /// Literal text with all quoting already resolved.
    PlainText(String),

    /// An ordered sequence of parts.
    ///
    /// Invariants, enforced by [`CompiledMessage::concat`]: never empty,
    /// never a single element, never nested, no empty or adjacent
    /// `PlainText` parts.
    Concat(Vec<CompiledMessage>),

    /// An interpolation slot.
    Var {
        name: ArgName,
        format: ArgFormat,
        /// Subtracted from the numeric value before formatting. Always 0
        /// except for the `#` placeholder of a plural branch with an
        /// `offset:`, which carries the enclosing offset here.
        subtract: i64,
    },

    /// A plural construct.
    Plural {
        name: ArgName,
        /// The `offset:` value, subtracted before category selection but
        /// not before exact `=N` matching.
        subtract: i64,
        /// Branches in source order. Selectors are unique; `other` is
        /// never among them.
        branches: Vec<(Selector, CompiledMessage)>,
        /// The mandatory lexical `other` branch.
        fallback: Box<CompiledMessage>,
    },

    /// A markup placeholder: `<a>...</a>` or self-closing `<br/>`.
    Element {
        name: ArgName,
        /// `None` for self-closing tags.
        message: Option<Box<CompiledMessage>>,
    },

    /// A source string that failed to parse, accepted as a message anyway.
    ///
    /// Produced only by [`CompiledMessage::from_source`]. Evaluating this
    /// variant re-parses the source and surfaces the parse error then.
    Deferred { source: String, error: ParseError },
}

impl CompiledMessage {
    /// Create a literal text message.
    pub fn text(text: impl Into<String>) -> CompiledMessage {
        CompiledMessage::PlainText(text.into())
    }

    /// Concatenate messages, maintaining the `Concat` invariants.
    ///
    /// Nested concatenations are flattened, adjacent literal text is
    /// merged, and empty text is dropped. An empty sequence reduces to
    /// `PlainText("")` and a single part reduces to that part.
    ///
    /// # Example
    ///
    /// ```
    /// use icumsg::CompiledMessage;
    ///
    /// let message = CompiledMessage::concat([
    ///     CompiledMessage::text("a"),
    ///     CompiledMessage::text(""),
    ///     CompiledMessage::text("b"),
    /// ]);
    /// assert_eq!(message, CompiledMessage::text("ab"));
    /// ```
    pub fn concat(parts: impl IntoIterator<Item = CompiledMessage>) -> CompiledMessage {
        let mut flat = Vec::new();
        for part in parts {
            push_part(&mut flat, part);
        }
        match flat.len() {
            0 => CompiledMessage::PlainText(String::new()),
            1 => flat.remove(0),
            _ => CompiledMessage::Concat(flat),
        }
    }

    /// Accept a raw source string as a message without failing.
    ///
    /// Compatibility constructor for call sites that treat plain strings
    /// and messages interchangeably: a string that parses becomes its
    /// compiled form, and one that does not becomes a [`Deferred`] node
    /// whose parse error surfaces on first evaluation instead.
    ///
    /// [`Deferred`]: CompiledMessage::Deferred
    pub fn from_source(source: impl Into<String>) -> CompiledMessage {
        let source = source.into();
        match parse(&source) {
            Ok(message) => message,
            Err(error) => CompiledMessage::Deferred { source, error },
        }
    }
}

impl From<&str> for CompiledMessage {
    fn from(source: &str) -> Self {
        CompiledMessage::from_source(source)
    }
}

impl From<String> for CompiledMessage {
    fn from(source: String) -> Self {
        CompiledMessage::from_source(source)
    }
}

fn push_part(flat: &mut Vec<CompiledMessage>, part: CompiledMessage) {
    match part {
        CompiledMessage::Concat(children) => {
            for child in children {
                push_part(flat, child);
            }
        }
        CompiledMessage::PlainText(text) if text.is_empty() => {}
        CompiledMessage::PlainText(text) => {
            if let Some(CompiledMessage::PlainText(last)) = flat.last_mut() {
                last.push_str(&text);
            } else {
                flat.push(CompiledMessage::PlainText(text));
            }
        }
        other => flat.push(other),
    }
}

/// How an interpolation slot formats its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgFormat {
    /// Substitute a string argument as-is: `{name}`.
    String,
    /// Format a numeric argument: `{n,number}` and friends.
    Number(NumberOptions),
    /// Format a timestamp argument: `{d,date}` / `{d,time}`.
    DateTime(DateTimeOptions),
}

/// The matching key of a plural branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Matches the raw argument value exactly, unaffected by `offset:`.
    Exact(i64),
    /// Matches the computed plural category of the offset value.
    Category(PluralCategory),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Exact(n) => write!(f, "={n}"),
            Selector::Category(category) => write!(f, "{category}"),
        }
    }
}

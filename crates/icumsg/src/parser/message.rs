//! Recursive-descent grammar for ICU message source strings.
//!
//! ```text
//! message    := (text | '{' argument '}' | '#' | tag)*
//! argument   := argName (',' argType (',' argStyle)?)?
//! argType    := 'number' | 'date' | 'time' | 'plural'
//! plural     := ('offset:' number)? (selector '{' message '}')+
//! selector   := identifier | '=' number
//! tag        := '<' argName '>' message '</' argName '>' | '<' argName '/>'
//! ```
//!
//! All validation happens here, at parse time: rejected legacy argument
//! types, per-type style allow-lists, unique selectors with a final
//! `other` branch, matching tag names, and the whitespace restrictions
//! after `=` and around a tag-closing `/`. The parser fails fast and never
//! returns partial IR.

use crate::parser::cursor::{Cursor, Token, TokenKind};
use crate::parser::error::{ParseError, compute_suggestions};
use crate::parser::skeleton::parse_skeleton;
use crate::types::{
    ArgFormat, ArgName, CompiledMessage, DateTimeLength, DateTimeOptions, DateTimePart,
    DateTimeStyle, NumberOptions, PluralCategory, Selector,
};

/// Argument types the grammar accepts, used for typo suggestions.
const ARG_TYPES: &[&str] = &["number", "date", "time", "plural"];

/// Number styles the grammar accepts beyond the plain default.
const NUMBER_STYLES: &[&str] = &["integer", "percent"];

/// Selector keywords, including the mandatory fallback keyword.
const SELECTOR_KEYWORDS: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Parse a message source string into its compiled form.
///
/// Fast path: a source containing none of `'`, `{`, `}`, `<` is returned
/// as literal text without running the grammar. (`#` is deliberately not
/// in that set, so a brace-free message keeps a literal `#`.)
///
/// # Example
///
/// ```
/// use icumsg::{CompiledMessage, parse};
///
/// assert_eq!(parse("I''m").unwrap(), CompiledMessage::text("I'm"));
/// assert!(parse("{n,plural,one{x}}").is_err());
/// ```
pub fn parse(source: &str) -> Result<CompiledMessage, ParseError> {
    if !source.contains(['\'', '{', '}', '<']) {
        return Ok(CompiledMessage::PlainText(source.to_string()));
    }
    let mut cursor = Cursor::new(source);
    parse_message(&mut cursor, &Terminator::Eof, None)
}

/// What ends the message production currently being parsed.
enum Terminator<'n> {
    /// The top-level message, ending at EOF.
    Eof,
    /// A plural branch body, ending at `}`.
    Brace,
    /// A tag child, ending at the matching closing tag.
    Tag(&'n ArgName),
}

impl Terminator<'_> {
    /// How this terminator reads inside an `(expected ...)` list.
    fn describe(&self) -> String {
        match self {
            Terminator::Eof => "EOF".to_string(),
            Terminator::Brace => "'}'".to_string(),
            Terminator::Tag(name) => format!("'</{name}>'"),
        }
    }
}

/// The plural construct enclosing the current message production, bound
/// by `#` placeholders within it.
struct PluralContext<'n> {
    name: &'n ArgName,
    subtract: i64,
}

fn parse_message(
    cursor: &mut Cursor<'_>,
    terminator: &Terminator<'_>,
    plural: Option<&PluralContext<'_>>,
) -> Result<CompiledMessage, ParseError> {
    let mut parts = Vec::new();
    loop {
        let text = cursor.scan_text()?;
        if !text.is_empty() {
            parts.push(CompiledMessage::PlainText(text));
        }
        match cursor.peek_char() {
            None => {
                if let Terminator::Eof = terminator {
                    break;
                }
                return Err(unexpected_end("EOF", terminator));
            }
            Some('{') => {
                cursor.expect(TokenKind::OpenBrace)?;
                parts.push(parse_argument(cursor)?);
                cursor.expect(TokenKind::CloseBrace)?;
            }
            Some('}') => {
                if let Terminator::Brace = terminator {
                    break;
                }
                return Err(unexpected_end("'}'", terminator));
            }
            Some('#') => {
                let Some(context) = plural else {
                    return Err(ParseError::StrayOctothorpe);
                };
                cursor.expect(TokenKind::Octothorpe)?;
                parts.push(CompiledMessage::Var {
                    name: context.name.clone(),
                    format: ArgFormat::Number(NumberOptions::default()),
                    subtract: context.subtract,
                });
            }
            // scan_text stops only at syntax characters, so this is '<'
            Some(_) => {
                if cursor.at_closing_tag() {
                    if let Terminator::Tag(_) = terminator {
                        break;
                    }
                    return Err(unexpected_end("'</'", terminator));
                }
                parts.push(parse_tag(cursor, plural)?);
            }
        }
    }
    Ok(CompiledMessage::concat(parts))
}

fn unexpected_end(found: &str, terminator: &Terminator<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        found: found.to_string(),
        expected: terminator.describe(),
    }
}

/// Parse the inside of a `{...}` argument. The braces themselves belong
/// to the caller.
fn parse_argument(cursor: &mut Cursor<'_>) -> Result<CompiledMessage, ParseError> {
    let name = parse_arg_name(cursor)?;
    let next = cursor.peek(&[TokenKind::Comma, TokenKind::CloseBrace])?;
    if next.kind == TokenKind::CloseBrace {
        return Ok(CompiledMessage::Var {
            name,
            format: ArgFormat::String,
            subtract: 0,
        });
    }
    cursor.advance(&next);
    let arg_type = cursor.expect(TokenKind::Identifier)?;
    match arg_type.lexeme {
        "number" => parse_number_format(cursor, name),
        "date" => parse_datetime_format(cursor, name, DateTimePart::Date),
        "time" => parse_datetime_format(cursor, name, DateTimePart::Time),
        "plural" => parse_plural(cursor, name),
        "spellout" | "ordinal" | "duration" | "choice" | "select" | "selectordinal" => {
            Err(ParseError::UnsupportedType {
                arg_type: arg_type.lexeme.to_string(),
            })
        }
        other => Err(ParseError::InvalidType {
            arg_type: other.to_string(),
            suggestions: compute_suggestions(other, ARG_TYPES),
        }),
    }
}

fn parse_arg_name(cursor: &mut Cursor<'_>) -> Result<ArgName, ParseError> {
    let token = cursor.peek(&[TokenKind::Identifier, TokenKind::Number])?;
    cursor.advance(&token);
    arg_name_from(&token)
}

/// Like [`parse_arg_name`] but rejecting preceding whitespace, for the
/// name of a closing tag.
fn parse_arg_name_adjacent(cursor: &mut Cursor<'_>) -> Result<ArgName, ParseError> {
    let token = cursor.peek(&[TokenKind::Identifier, TokenKind::Number])?;
    if token.preceded_by_whitespace {
        return Err(ParseError::UnexpectedWhitespace {
            token: token.lexeme.to_string(),
        });
    }
    cursor.advance(&token);
    arg_name_from(&token)
}

fn arg_name_from(token: &Token<'_>) -> Result<ArgName, ParseError> {
    if token.kind == TokenKind::Number {
        token
            .lexeme
            .parse::<u64>()
            .map(ArgName::Index)
            .map_err(|_| ParseError::InvalidNumber {
                lexeme: token.lexeme.to_string(),
            })
    } else {
        Ok(ArgName::Name(token.lexeme.to_string()))
    }
}

fn parse_number_format(
    cursor: &mut Cursor<'_>,
    name: ArgName,
) -> Result<CompiledMessage, ParseError> {
    let mut options = NumberOptions::default();
    let next = cursor.peek(&[TokenKind::Comma, TokenKind::CloseBrace])?;
    if next.kind == TokenKind::Comma {
        cursor.advance(&next);
        let style = cursor.expect(TokenKind::Identifier)?;
        options = match style.lexeme {
            "integer" => NumberOptions::integer(),
            "percent" => NumberOptions::percent(),
            other => {
                return Err(ParseError::InvalidStyle {
                    arg_type: "number",
                    style: other.to_string(),
                    suggestions: compute_suggestions(other, NUMBER_STYLES),
                });
            }
        };
    }
    Ok(CompiledMessage::Var {
        name,
        format: ArgFormat::Number(options),
        subtract: 0,
    })
}

fn parse_datetime_format(
    cursor: &mut Cursor<'_>,
    name: ArgName,
    part: DateTimePart,
) -> Result<CompiledMessage, ParseError> {
    let mut options = DateTimeOptions::new(part);
    let next = cursor.peek(&[TokenKind::Comma, TokenKind::CloseBrace])?;
    if next.kind == TokenKind::Comma {
        cursor.advance(&next);
        let style_start = cursor.peek(&[TokenKind::Colon, TokenKind::Identifier])?;
        cursor.advance(&style_start);
        if style_start.kind == TokenKind::Colon {
            cursor.expect_adjacent(TokenKind::Colon)?;
            let skeleton = cursor.expect_adjacent(TokenKind::Identifier)?;
            options.style = DateTimeStyle::Fields(parse_skeleton(skeleton.lexeme)?);
        } else {
            match DateTimeLength::from_keyword(style_start.lexeme) {
                Some(length) => options.style = DateTimeStyle::Length(length),
                None => {
                    return Err(ParseError::InvalidStyle {
                        arg_type: match part {
                            DateTimePart::Date => "date",
                            DateTimePart::Time => "time",
                        },
                        style: style_start.lexeme.to_string(),
                        suggestions: compute_suggestions(
                            style_start.lexeme,
                            DateTimeLength::KEYWORDS,
                        ),
                    });
                }
            }
        }
    }
    Ok(CompiledMessage::Var {
        name,
        format: ArgFormat::DateTime(options),
        subtract: 0,
    })
}

/// A branch key as written: either a real selector or the `other`
/// fallback keyword.
enum BranchKey {
    Other,
    Selector(Selector),
}

fn parse_plural(cursor: &mut Cursor<'_>, name: ArgName) -> Result<CompiledMessage, ParseError> {
    // A plural without branches fails here: the style is mandatory.
    cursor.expect(TokenKind::Comma)?;

    let mut subtract = 0;
    let first = cursor.peek(&[TokenKind::Offset, TokenKind::Identifier, TokenKind::Equals])?;
    if first.kind == TokenKind::Offset {
        cursor.advance(&first);
        let number = cursor.expect(TokenKind::Number)?;
        subtract = parse_i64(&number)?;
    }
    // Branches bind their '#' to this plural, shadowing any enclosing one.
    let context = PluralContext {
        name: &name,
        subtract,
    };

    let mut branches: Vec<(Selector, CompiledMessage)> = Vec::new();
    let mut fallback = None;
    let mut last_was_other = false;
    loop {
        let token = if branches.is_empty() && fallback.is_none() {
            // At least one branch is required.
            cursor.peek(&[TokenKind::Identifier, TokenKind::Equals])?
        } else {
            cursor.peek(&[
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::CloseBrace,
            ])?
        };
        if token.kind == TokenKind::CloseBrace {
            break;
        }
        let key = parse_branch_key(cursor, &token)?;
        cursor.expect(TokenKind::OpenBrace)?;
        let body = parse_message(cursor, &Terminator::Brace, Some(&context))?;
        cursor.expect(TokenKind::CloseBrace)?;
        match key {
            BranchKey::Other => {
                if fallback.is_some() {
                    return Err(ParseError::DuplicateSelector {
                        selector: "other".to_string(),
                    });
                }
                fallback = Some(body);
                last_was_other = true;
            }
            BranchKey::Selector(selector) => {
                if branches.iter().any(|(existing, _)| *existing == selector) {
                    return Err(ParseError::DuplicateSelector {
                        selector: selector.to_string(),
                    });
                }
                branches.push((selector, body));
                last_was_other = false;
            }
        }
    }

    let Some(fallback) = fallback else {
        return Err(ParseError::LastSelectorNotOther);
    };
    if !last_was_other {
        return Err(ParseError::LastSelectorNotOther);
    }
    Ok(CompiledMessage::Plural {
        name,
        subtract,
        branches,
        fallback: Box::new(fallback),
    })
}

fn parse_branch_key<'a>(
    cursor: &mut Cursor<'a>,
    token: &Token<'a>,
) -> Result<BranchKey, ParseError> {
    if token.kind == TokenKind::Equals {
        cursor.advance(token);
        // No whitespace between '=' and its number.
        let number = cursor.expect_adjacent(TokenKind::Number)?;
        return Ok(BranchKey::Selector(Selector::Exact(parse_i64(&number)?)));
    }
    cursor.advance(token);
    if token.lexeme == "other" {
        return Ok(BranchKey::Other);
    }
    match PluralCategory::from_selector(token.lexeme) {
        Some(category) => Ok(BranchKey::Selector(Selector::Category(category))),
        None => Err(ParseError::InvalidSelector {
            selector: token.lexeme.to_string(),
            suggestions: compute_suggestions(token.lexeme, SELECTOR_KEYWORDS),
        }),
    }
}

fn parse_i64(token: &Token<'_>) -> Result<i64, ParseError> {
    token
        .lexeme
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            lexeme: token.lexeme.to_string(),
        })
}

fn parse_tag(
    cursor: &mut Cursor<'_>,
    plural: Option<&PluralContext<'_>>,
) -> Result<CompiledMessage, ParseError> {
    cursor.expect(TokenKind::OpenAngle)?;
    let name = parse_arg_name(cursor)?;
    let next = cursor.peek(&[TokenKind::CloseAngle, TokenKind::Slash])?;
    if next.kind == TokenKind::Slash {
        // No whitespace around the '/' of a self-closing tag.
        cursor.expect_adjacent(TokenKind::Slash)?;
        cursor.expect_adjacent(TokenKind::CloseAngle)?;
        return Ok(CompiledMessage::Element {
            name,
            message: None,
        });
    }
    cursor.advance(&next);
    let child = parse_message(cursor, &Terminator::Tag(&name), plural)?;
    cursor.expect(TokenKind::OpenAngle)?;
    cursor.expect_adjacent(TokenKind::Slash)?;
    let close = parse_arg_name_adjacent(cursor)?;
    cursor.expect(TokenKind::CloseAngle)?;
    if close != name {
        return Err(ParseError::MismatchedTag { open: name, close });
    }
    Ok(CompiledMessage::Element {
        name,
        message: Some(Box::new(child)),
    })
}

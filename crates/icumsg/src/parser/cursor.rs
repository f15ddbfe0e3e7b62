//! Scanning cursor over a message source string.
//!
//! The cursor owns the read position and everything lexical: raw-text
//! scanning with the ICU quoting rules resolved inline, token
//! classification with whitespace tracking, and expected-set errors. The
//! grammar in [`super::message`] never touches the source directly.

use crate::parser::error::ParseError;

/// Characters that end a run of plain text outside a quoted span.
const SYNTAX_CHARS: [char; 5] = ['\'', '{', '}', '#', '<'];

/// Characters a quote must precede to open a quoted span. A `'` before
/// anything else is a literal apostrophe.
const QUOTABLE_CHARS: [char; 5] = ['{', '}', '#', '|', '<'];

/// The kind of a classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// `[0-9]+`
    Number,
    /// The literal `offset:`, classified as one token.
    Offset,
    Comma,
    OpenBrace,
    CloseBrace,
    Octothorpe,
    OpenAngle,
    CloseAngle,
    Slash,
    Equals,
    Colon,
    Eof,
    /// Any character that fits no other kind. Never part of an expected
    /// set, so matching one always produces an error.
    Unknown,
}

impl TokenKind {
    /// How this kind reads inside an `(expected ...)` list.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Offset => "'offset:'",
            TokenKind::Comma => "','",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::Octothorpe => "'#'",
            TokenKind::OpenAngle => "'<'",
            TokenKind::CloseAngle => "'>'",
            TokenKind::Slash => "'/'",
            TokenKind::Equals => "'='",
            TokenKind::Colon => "':'",
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "character",
        }
    }
}

/// A classified token. Produced by [`Cursor::peek`]; consuming it is a
/// separate [`Cursor::advance`] so the grammar can look ahead freely.
#[derive(Debug, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    /// Whether whitespace was skipped before this token. Checked at the
    /// grammar points that forbid it.
    pub preceded_by_whitespace: bool,
    /// Byte position just past the token, used by `advance`.
    end: usize,
}

impl Token<'_> {
    /// How this token reads as the offending token of an error.
    pub fn display(&self) -> String {
        if self.kind == TokenKind::Eof {
            "EOF".to_string()
        } else {
            format!("'{}'", self.lexeme)
        }
    }
}

/// A read position within a message source string.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor { source, pos: 0 }
    }

    /// The next raw character, without any whitespace skipping.
    pub fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Whether the cursor rests on the start of a closing tag (`<` then,
    /// possibly after illegal whitespace, `/`). Used by the message loop
    /// to decide between opening a tag and returning to its caller.
    pub fn at_closing_tag(&self) -> bool {
        let Some(rest) = self.source[self.pos..].strip_prefix('<') else {
            return false;
        };
        rest.trim_start().starts_with('/')
    }

    /// Classify the next meaningful token and require its kind to be in
    /// `expected`, without consuming anything.
    pub fn peek(&self, expected: &[TokenKind]) -> Result<Token<'a>, ParseError> {
        let token = self.classify();
        if expected.contains(&token.kind) {
            Ok(token)
        } else {
            Err(ParseError::UnexpectedToken {
                found: token.display(),
                expected: describe_set(expected),
            })
        }
    }

    /// Move past a previously peeked token.
    pub fn advance(&mut self, token: &Token<'a>) {
        self.pos = token.end;
    }

    /// Peek a token of `kind` and consume it.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        let token = self.peek(&[kind])?;
        self.advance(&token);
        Ok(token)
    }

    /// Like [`Cursor::expect`], but whitespace before the token is an
    /// error rather than skipped.
    pub fn expect_adjacent(&mut self, kind: TokenKind) -> Result<Token<'a>, ParseError> {
        let token = self.peek(&[kind])?;
        if token.preceded_by_whitespace {
            return Err(ParseError::UnexpectedWhitespace {
                token: token.lexeme.to_string(),
            });
        }
        self.advance(&token);
        Ok(token)
    }

    /// Consume a maximal run of literal text, resolving the quoting rules.
    ///
    /// Stops at `{`, `}`, `#`, `<`, or EOF; the stopping character is not
    /// consumed. Quotes are handled inline: `''` is one literal `'`; a `'`
    /// before one of `{ } # | <` opens a span in which those characters
    /// are ordinary text until the next single `'`; any other `'` is
    /// literal. EOF inside a quoted span is an error.
    pub fn scan_text(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            let rest = &self.source[self.pos..];
            let run = rest.find(SYNTAX_CHARS).unwrap_or(rest.len());
            text.push_str(&rest[..run]);
            self.pos += run;
            if !self.source[self.pos..].starts_with('\'') {
                break;
            }
            self.pos += 1;
            let after = &self.source[self.pos..];
            if after.starts_with('\'') {
                text.push('\'');
                self.pos += 1;
            } else if after.starts_with(QUOTABLE_CHARS) {
                self.scan_quoted(&mut text)?;
            } else {
                text.push('\'');
            }
        }
        Ok(text)
    }

    /// Consume the interior of a quoted span, up to and including its
    /// closing `'`. A doubled `''` inside the span is one literal `'`.
    fn scan_quoted(&mut self, text: &mut String) -> Result<(), ParseError> {
        loop {
            let rest = &self.source[self.pos..];
            let Some(quote) = rest.find('\'') else {
                return Err(ParseError::UnclosedQuote);
            };
            text.push_str(&rest[..quote]);
            self.pos += quote + 1;
            if self.source[self.pos..].starts_with('\'') {
                text.push('\'');
                self.pos += 1;
            } else {
                return Ok(());
            }
        }
    }

    fn classify(&self) -> Token<'a> {
        let rest = &self.source[self.pos..];
        let trimmed = rest.trim_start();
        let preceded_by_whitespace = trimmed.len() < rest.len();
        let start = self.pos + (rest.len() - trimmed.len());

        if trimmed.starts_with("offset:") {
            return Token {
                kind: TokenKind::Offset,
                lexeme: &trimmed[..7],
                preceded_by_whitespace,
                end: start + 7,
            };
        }

        let Some(first) = trimmed.chars().next() else {
            return Token {
                kind: TokenKind::Eof,
                lexeme: "",
                preceded_by_whitespace,
                end: start,
            };
        };

        let (kind, len) = match first {
            'A'..='Z' | 'a'..='z' | '_' => {
                let len = trimmed
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(trimmed.len());
                (TokenKind::Identifier, len)
            }
            '0'..='9' => {
                let len = trimmed
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(trimmed.len());
                (TokenKind::Number, len)
            }
            ',' => (TokenKind::Comma, 1),
            '{' => (TokenKind::OpenBrace, 1),
            '}' => (TokenKind::CloseBrace, 1),
            '#' => (TokenKind::Octothorpe, 1),
            '<' => (TokenKind::OpenAngle, 1),
            '>' => (TokenKind::CloseAngle, 1),
            '/' => (TokenKind::Slash, 1),
            '=' => (TokenKind::Equals, 1),
            ':' => (TokenKind::Colon, 1),
            _ => (TokenKind::Unknown, first.len_utf8()),
        };

        Token {
            kind,
            lexeme: &trimmed[..len],
            preceded_by_whitespace,
            end: start + len,
        }
    }
}

/// Join kind descriptions for an `(expected ...)` list.
fn describe_set(expected: &[TokenKind]) -> String {
    expected
        .iter()
        .map(|kind| kind.describe())
        .collect::<Vec<_>>()
        .join(", ")
}

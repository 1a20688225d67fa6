//! Tokenizer for the tag syntax.
//!
//! Longest match wins among the fixed delimiters (`</`, `/>`, `<`, `>`,
//! `[`, `]`, `=`), quoted strings and bare identifiers. Whitespace and
//! `<!-- ... -->` comments are skipped.

use std::fmt;
use std::ops::Range;

use logos::{FilterResult, Logos};
use thiserror::Error;

use crate::position::{LineIndex, Position};

/// Why the lexer rejected its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[default]
    #[error("unrecognized character")]
    UnrecognizedCharacter,

    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("unterminated comment")]
    UnterminatedComment,

    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
}

/// A lexical error at a byte offset of the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    pub offset: usize,
    pub position: Position,
    pub kind: LexErrorKind,
}

/// Token classification.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// `</`
    #[token("</")]
    LSlashAngle,
    /// `/>`
    #[token("/>")]
    SlashRAngle,
    /// `<`
    #[token("<")]
    LAngle,
    /// `>`
    #[token(">")]
    RAngle,
    /// `[`
    #[token("[")]
    LSquare,
    /// `]`
    #[token("]")]
    RSquare,
    /// `=`
    #[token("=")]
    Equal,
    /// String literal; carries the decoded contents.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(strip_quotes(lex.slice(), 1)))]
    #[regex(r#"r"[^"]*""#, |lex| strip_quotes(lex.slice(), 2).to_string())]
    #[regex(r#""([^"\\]|\\.)*\\?"#, unterminated_string)]
    #[regex(r#"r"[^"]*"#, unterminated_string)]
    String(String),
    /// Bare identifier, classified later by the parser.
    #[regex(r#"[^<>\[\]{}=/"\s]+"#)]
    Identifier,
    /// `<!-- ... -->`, never emitted.
    #[token("<!--", skip_comment)]
    Comment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LSlashAngle => f.write_str("`</`"),
            TokenKind::SlashRAngle => f.write_str("`/>`"),
            TokenKind::LAngle => f.write_str("`<`"),
            TokenKind::RAngle => f.write_str("`>`"),
            TokenKind::LSquare => f.write_str("`[`"),
            TokenKind::RSquare => f.write_str("`]`"),
            TokenKind::Equal => f.write_str("`=`"),
            TokenKind::String(_) => f.write_str("string"),
            TokenKind::Identifier => f.write_str("identifier"),
            TokenKind::Comment => f.write_str("comment"),
        }
    }
}

/// A classified token with its raw text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, quotes and prefixes included.
    pub text: String,
    pub span: Range<usize>,
    pub position: Position,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::String(_) | TokenKind::Identifier => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Lazy token stream over a source string.
///
/// Yields `Err` once on the first lexical error and then stops.
pub struct Tokens<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    lines: LineIndex<'a>,
    failed: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.inner.next()?;
        let span = self.inner.span();
        let position = self.lines.position(span.start);
        match result {
            Ok(kind) => Some(Ok(Token {
                kind,
                text: self.inner.slice().to_string(),
                span,
                position,
            })),
            Err(kind) => {
                self.failed = true;
                Some(Err(LexError {
                    offset: span.start,
                    position,
                    kind,
                }))
            }
        }
    }
}

/// Start tokenizing `source`. Each call restarts from the beginning.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        inner: TokenKind::lexer(source),
        lines: LineIndex::new(source),
        failed: false,
    }
}

/// Tokenize all of `source`, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize(source).collect()
}

fn strip_quotes(slice: &str, prefix: usize) -> &str {
    &slice[prefix..slice.len() - 1]
}

fn unescape(raw: &str) -> Result<String, LexErrorKind> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        // The regex guarantees a character after every backslash.
        let escaped = chars.next().unwrap_or('\\');
        out.push(match escaped {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            other => return Err(LexErrorKind::InvalidEscape(other)),
        });
    }
    Ok(out)
}

/// A string that reaches end of input (or a bare backslash) before its
/// closing quote. Always shorter than a complete string at the same offset.
fn unterminated_string(_: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> FilterResult<(), LexErrorKind> {
    match lex.remainder().find("-->") {
        Some(end) => {
            lex.bump(end + "-->".len());
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(LexErrorKind::UnterminatedComment)
        }
    }
}

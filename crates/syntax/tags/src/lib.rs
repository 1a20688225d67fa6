//! Lexer and parser for the LTNS tag syntax.
//!
//! Source text is a sequence of terms. A term is an element
//! (`<name attr=value>children</name>` or `<name attr=value/>`), a list
//! literal (`[a b c]`), a string (`"text"`, or raw `r"text"`), or a bare
//! identifier, which is classified into the most specific literal it can
//! represent (integer, float, complex, `:keyword`, or symbol).
//!
//! ```text
//! <print sep=", ">"Hello" [1 2.5 3j] :done</print>
//! ```

mod lexer;
mod literal;
mod node;
mod parser;
mod position;

pub use lexer::{lex, tokenize, LexError, LexErrorKind, Token, TokenKind, Tokens};
pub use node::{Base, Element, Integer, Node};
pub use parser::{parse, parse_tokens, parse_with, ParseError, ParseOptions, MAX_DEPTH};
pub use position::Position;

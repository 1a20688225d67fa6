//! Recursive-descent parser over the token stream.
//!
//! ```text
//! program    := term*
//! term       := element | list | STRING | IDENTIFIER
//! element    := '<' IDENTIFIER attributes ( '/>' | '>' term* '</' IDENTIFIER '>' )
//! attributes := ( IDENTIFIER '=' term )*
//! list       := '[' term* ']'
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::lexer::{lex, LexError, Token, TokenKind};
use crate::literal::{classify, IntegerOutOfRange};
use crate::node::{Element, Node};
use crate::Position;

/// Errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("{position}: unexpected {token}, expected {expected}", position = .token.position)]
    UnexpectedToken { token: Token, expected: &'static str },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("{position}: closing tag </{close}> does not match <{open}>")]
    MismatchedTag {
        open: String,
        close: String,
        position: Position,
    },

    #[error("{position}: integer literal `{text}` is out of range")]
    IntegerOutOfRange { text: String, position: Position },

    #[error("{position}: nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: Position },
}

impl ParseError {
    /// Source position of the failure, when there is one.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Lex(err) => Some(err.position),
            ParseError::UnexpectedToken { token, .. } => Some(token.position),
            ParseError::UnexpectedEof { .. } => None,
            ParseError::MismatchedTag { position, .. }
            | ParseError::IntegerOutOfRange { position, .. }
            | ParseError::NestingTooDeep { position, .. } => Some(*position),
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject elements whose closing tag name differs from the opening one.
    ///
    /// Off by default: `<a>1</b>` is accepted and matched by nesting only.
    pub strict_tags: bool,
}

/// Maximum nesting of elements and lists.
pub const MAX_DEPTH: usize = 256;

/// Parse source text with default options.
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_with(source, ParseOptions::default())
}

/// Parse source text.
pub fn parse_with(source: &str, options: ParseOptions) -> Result<Vec<Node>, ParseError> {
    let tokens = lex(source)?;
    parse_tokens(&tokens, options)
}

/// Parse an already tokenized program.
pub fn parse_tokens(tokens: &[Token], options: ParseOptions) -> Result<Vec<Node>, ParseError> {
    Parser {
        tokens,
        pos: 0,
        depth: 0,
        options,
    }
    .parse_program()
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    options: ParseOptions,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self, expected: &'static str) -> Result<&'t Token, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<&'t Token, ParseError> {
        let token = self.next(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }

    fn expect_identifier(&mut self, expected: &'static str) -> Result<&'t Token, ParseError> {
        self.expect(TokenKind::Identifier, expected)
    }

    fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        while self.peek().is_some() {
            nodes.push(self.parse_term()?);
        }
        Ok(nodes)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let token = self.peek().ok_or(ParseError::UnexpectedEof { expected: "a term" })?;
        match &token.kind {
            TokenKind::LAngle => self.nested(token, Self::parse_element),
            TokenKind::LSquare => self.nested(token, Self::parse_list),
            TokenKind::String(value) => {
                self.pos += 1;
                Ok(Node::String(value.clone()))
            }
            TokenKind::Identifier => {
                self.pos += 1;
                classify(&token.text).map_err(|IntegerOutOfRange| ParseError::IntegerOutOfRange {
                    text: token.text.clone(),
                    position: token.position,
                })
            }
            _ => Err(unexpected(token, "a term")),
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested(
        &mut self,
        token: &Token,
        parse: impl FnOnce(&mut Self) -> Result<Node, ParseError>,
    ) -> Result<Node, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH,
                position: token.position,
            });
        }
        self.depth += 1;
        let node = parse(self);
        self.depth -= 1;
        node
    }

    fn parse_element(&mut self) -> Result<Node, ParseError> {
        let open = self.expect(TokenKind::LAngle, "`<`")?;
        let name = self.expect_identifier("a tag name")?;
        let attributes = self.parse_attributes()?;
        let mut element = Element {
            name: name.text.clone(),
            attributes,
            children: Vec::new(),
            position: open.position,
        };

        let token = self.next("`>` or `/>`")?;
        match token.kind {
            TokenKind::SlashRAngle => return Ok(Node::Element(element)),
            TokenKind::RAngle => {}
            _ => return Err(unexpected(token, "`>` or `/>`")),
        }

        loop {
            match self.peek() {
                Some(token) if token.kind == TokenKind::LSlashAngle => break,
                Some(_) => element.children.push(self.parse_term()?),
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: "a closing tag",
                    });
                }
            }
        }

        let close = self.expect(TokenKind::LSlashAngle, "`</`")?;
        let close_name = self.expect_identifier("a closing tag name")?;
        self.expect(TokenKind::RAngle, "`>`")?;

        if self.options.strict_tags && close_name.text != element.name {
            return Err(ParseError::MismatchedTag {
                open: element.name,
                close: close_name.text.clone(),
                position: close.position,
            });
        }

        Ok(Node::Element(element))
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, Node>, ParseError> {
        let mut attributes = IndexMap::new();
        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Identifier {
                break;
            }
            self.pos += 1;
            self.expect(TokenKind::Equal, "`=` after attribute name")?;
            let value = self.parse_term()?;
            attributes.insert(token.text.clone(), value);
        }
        Ok(attributes)
    }

    fn parse_list(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LSquare, "`[`")?;
        let mut items = Vec::new();
        loop {
            match self.peek() {
                Some(token) if token.kind == TokenKind::RSquare => {
                    self.pos += 1;
                    return Ok(Node::List(items));
                }
                Some(_) => items.push(self.parse_term()?),
                None => return Err(ParseError::UnexpectedEof { expected: "`]`" }),
            }
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        token: token.clone(),
        expected,
    }
}

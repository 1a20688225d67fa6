//! Compiler errors.

use std::fmt;

use rhizome_ltns_syntax_tags::{Element, ParseError, Position};
use thiserror::Error;

/// A compile failure attributed to one element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: <{tag}>: {kind}")]
pub struct CompileError {
    /// Name of the offending tag.
    pub tag: String,
    pub position: Position,
    pub kind: CompileErrorKind,
}

impl CompileError {
    pub(crate) fn new(element: &Element, kind: CompileErrorKind) -> Self {
        Self {
            tag: element.name.clone(),
            position: element.position,
            kind,
        }
    }
}

/// What went wrong while compiling an element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    #[error("invalid argument count: expected {expected}, got {got}")]
    InvalidArgCount { expected: Arity, got: usize },

    #[error("unexpected attribute `{0}`")]
    UnexpectedAttribute(String),

    #[error("parameter list must be a list literal, got {0}")]
    ParamsNotList(&'static str),

    #[error("parameter must be a symbol, got {0}")]
    InvalidParameter(&'static str),

    #[error("`&` must be followed by a rest parameter name")]
    MissingRestName,

    #[error("only one rest parameter name may follow `&`")]
    ExtraRestName,

    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),
}

/// Accepted number of positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    /// `None` for variadic forms.
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn accepts(self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Errors from the whole source-to-program pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("compile error: {0}")]
    Compile(#[from] CompileError),
}

impl Error {
    /// Source position of the failure, when there is one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Parse(err) => err.position(),
            Error::Compile(err) => Some(err.position),
        }
    }
}

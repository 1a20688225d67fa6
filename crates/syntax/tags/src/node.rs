//! Syntax tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Position;

/// A syntax-tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// `<name attr=value>children</name>`
    Element(Element),
    /// Free identifier resolved by the backend.
    Symbol(String),
    /// `:text`, stored without the colon.
    Keyword(String),
    /// String literal contents.
    String(String),
    Integer(Integer),
    Float(f64),
    Complex { re: f64, im: f64 },
    /// `[ ... ]`
    List(Vec<Node>),
}

impl Node {
    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Node::Keyword(text.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::String(value.into())
    }

    /// Decimal integer.
    pub fn integer(value: i64) -> Self {
        Node::Integer(Integer {
            value,
            base: Base::Decimal,
        })
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Short description of the node kind for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Symbol(_) => "symbol",
            Node::Keyword(_) => "keyword",
            Node::String(_) => "string",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::Complex { .. } => "complex",
            Node::List(_) => "list",
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A tag with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, Node>,
    pub children: Vec<Node>,
    /// Position of the opening `<`.
    pub position: Position,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
            position: Position::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Add an attribute. A repeated key keeps its first position and takes
    /// the new value.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Integer literal with the base it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integer {
    pub value: i64,
    pub base: Base,
}

/// Radix of an integer literal, inferred from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }
}

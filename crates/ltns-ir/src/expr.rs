//! Expression nodes.

use serde::{Deserialize, Serialize};

/// Name of the backend callable that constructs keyword values.
///
/// Keywords are not strings: `:hello` compiles to `Keyword("hello")`, which
/// the backend must resolve to something that compares unequal to `"hello"`.
pub const KEYWORD_CONSTRUCTOR: &str = "Keyword";

/// A value-producing expression.
///
/// Expressions are side-effect-order preserving: arguments are evaluated
/// left to right, positional arguments before keyword arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Reference to a name resolved by the backend.
    Name(String),
    /// String literal.
    Str(String),
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Float(f64),
    /// Complex literal.
    Complex { re: f64, im: f64 },
    /// The canonical "no value".
    None,
    /// Sequence construction.
    List(Vec<Expr>),
    /// Function invocation.
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<KeywordArg>,
    },
    /// Binary arithmetic or bitwise operation.
    BinOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Conditional expression: `then` if `test` holds, otherwise `orelse`.
    IfExp {
        test: Box<Expr>,
        then: Box<Expr>,
        orelse: Box<Expr>,
    },
    /// Anonymous function whose body is a single expression.
    Lambda { params: Params, body: Box<Expr> },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    /// Keyword construction: `Keyword("<text>")`.
    pub fn keyword(text: impl Into<String>) -> Self {
        Expr::call(Expr::name(KEYWORD_CONSTRUCTOR), vec![Expr::str(text)])
    }

    /// Call with positional arguments only.
    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
            keywords: Vec::new(),
        }
    }

    /// Call with positional and keyword arguments.
    pub fn call_with_keywords(func: Expr, args: Vec<Expr>, keywords: Vec<KeywordArg>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
            keywords,
        }
    }

    pub fn binop(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn if_exp(test: Expr, then: Expr, orelse: Expr) -> Self {
        Expr::IfExp {
            test: Box::new(test),
            then: Box::new(then),
            orelse: Box::new(orelse),
        }
    }

    pub fn lambda(params: Params, body: Expr) -> Self {
        Expr::Lambda {
            params,
            body: Box::new(body),
        }
    }

    /// Returns the name if this is a [`Expr::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is a call of `name` with no arguments.
    pub fn is_nullary_call_of(&self, name: &str) -> bool {
        matches!(
            self,
            Expr::Call { func, args, keywords }
                if args.is_empty() && keywords.is_empty() && func.as_name() == Some(name)
        )
    }
}

/// `name=value` argument of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordArg {
    pub name: String,
    pub value: Expr,
}

impl KeywordArg {
    pub fn new(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Binary operators supported by the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
}

impl BinOp {
    /// Infix spelling used when rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::LShift => "<<",
            BinOp::RShift => ">>",
            BinOp::BitOr => "|",
            BinOp::BitXor => "^",
            BinOp::BitAnd => "&",
        }
    }
}

/// Parameter list of a function or lambda.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Ordinary positional parameters, in order.
    pub positional: Vec<String>,
    /// Variadic parameter receiving the remaining positional arguments.
    pub rest: Option<String>,
    /// Keyword parameters with their default values.
    pub keywords: Vec<KeywordParam>,
}

impl Params {
    pub fn new(positional: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            positional: positional.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_rest(mut self, rest: impl Into<String>) -> Self {
        self.rest = Some(rest.into());
        self
    }

    pub fn with_keyword(mut self, name: impl Into<String>, default: Expr) -> Self {
        self.keywords.push(KeywordParam {
            name: name.into(),
            default,
        });
        self
    }

    /// True for a parameter list that accepts no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.rest.is_none() && self.keywords.is_empty()
    }

    /// All bound names: positional, then rest, then keywords.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positional
            .iter()
            .map(String::as_str)
            .chain(self.rest.as_deref())
            .chain(self.keywords.iter().map(|kw| kw.name.as_str()))
    }
}

/// Keyword parameter with a default value expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordParam {
    pub name: String,
    pub default: Expr,
}

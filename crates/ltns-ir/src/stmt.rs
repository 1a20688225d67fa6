//! Statement nodes and whole programs.

use serde::{Deserialize, Serialize};

use crate::{Expr, Params};

/// A side-effecting step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// Evaluate an expression for its effect and discard the value.
    Expr(Expr),
    /// Bind `value` to the local variable `target`.
    Assign { target: String, value: Expr },
    /// Named function definition.
    FunctionDef {
        name: String,
        params: Params,
        body: Vec<Stmt>,
    },
    /// Statement-level conditional.
    If {
        test: Expr,
        then: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    /// Return from the enclosing function.
    Return(Expr),
}

impl Stmt {
    pub fn assign(target: impl Into<String>, value: Expr) -> Self {
        Stmt::Assign {
            target: target.into(),
            value,
        }
    }

    pub fn function_def(name: impl Into<String>, params: Params, body: Vec<Stmt>) -> Self {
        Stmt::FunctionDef {
            name: name.into(),
            params,
            body,
        }
    }

    /// Name introduced into the enclosing scope, if any.
    pub fn defined_name(&self) -> Option<&str> {
        match self {
            Stmt::Assign { target, .. } => Some(target),
            Stmt::FunctionDef { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// A complete program: steps executed in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

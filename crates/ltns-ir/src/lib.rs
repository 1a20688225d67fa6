//! Target IR for compiled LTNS programs.
//!
//! The LTNS source language is made entirely of expressions. The targets it
//! is handed to are not: they distinguish statements (function definitions,
//! assignments, `if`/`else`, `return`) from expressions. This crate defines
//! that statement/expression representation, which sits between the
//! compiler and whatever backend executes the program.
//!
//! # Shape
//!
//! A [`Program`] is an ordered list of [`Stmt`]s. Statements nest
//! expressions ([`Expr`]); expressions never contain statements, except
//! through a synthesized function that is defined by a statement and then
//! called by name.
//!
//! Example, rendered with [`std::fmt::Display`]:
//! ```text
//! def _temp_func_1():
//!     if ready:
//!         print("go")
//!         _temp_var_2 = 1
//!     else:
//!         _temp_var_2 = 0
//!     return _temp_var_2
//! print(_temp_func_1())
//! ```

mod expr;
mod render;
mod stmt;
mod validation;

pub use expr::{BinOp, Expr, KeywordArg, KeywordParam, Params, KEYWORD_CONSTRUCTOR};
pub use stmt::{Program, Stmt};
pub use validation::{validate, ValidationError};

#[cfg(test)]
mod tests;

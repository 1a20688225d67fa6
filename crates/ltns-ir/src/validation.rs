//! Structural validation of programs.

use std::collections::HashSet;

use crate::{Expr, Params, Program, Stmt};
use thiserror::Error;

/// Errors that can occur during validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("return outside of a function body")]
    ReturnOutsideFunction,

    #[error("empty identifier")]
    EmptyIdentifier,

    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),
}

/// Validate a program for structural correctness.
///
/// This performs basic validation:
/// - `return` only appears inside function bodies
/// - Names, assignment targets and parameters are non-empty
/// - Parameter names are unique within one parameter list
///
/// Note: This does NOT resolve names. Free names are the backend's concern.
pub fn validate(program: &Program) -> Result<(), ValidationError> {
    validate_block(&program.body, false)
}

fn validate_block(stmts: &[Stmt], in_function: bool) -> Result<(), ValidationError> {
    for stmt in stmts {
        validate_stmt(stmt, in_function)?;
    }
    Ok(())
}

fn validate_stmt(stmt: &Stmt, in_function: bool) -> Result<(), ValidationError> {
    if stmt.defined_name().is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyIdentifier);
    }

    match stmt {
        Stmt::Expr(expr) => validate_expr(expr),
        Stmt::Assign { value, .. } => validate_expr(value),
        Stmt::FunctionDef { params, body, .. } => {
            validate_params(params)?;
            validate_block(body, true)
        }
        Stmt::If { test, then, orelse } => {
            validate_expr(test)?;
            validate_block(then, in_function)?;
            validate_block(orelse, in_function)
        }
        Stmt::Return(value) => {
            if !in_function {
                return Err(ValidationError::ReturnOutsideFunction);
            }
            validate_expr(value)
        }
    }
}

fn validate_expr(expr: &Expr) -> Result<(), ValidationError> {
    match expr {
        Expr::Name(name) if name.is_empty() => Err(ValidationError::EmptyIdentifier),
        Expr::Name(_)
        | Expr::Str(_)
        | Expr::Int(_)
        | Expr::Float(_)
        | Expr::Complex { .. }
        | Expr::None => Ok(()),
        Expr::List(items) => items.iter().try_for_each(validate_expr),
        Expr::Call {
            func,
            args,
            keywords,
        } => {
            validate_expr(func)?;
            args.iter().try_for_each(validate_expr)?;
            for keyword in keywords {
                if keyword.name.is_empty() {
                    return Err(ValidationError::EmptyIdentifier);
                }
                validate_expr(&keyword.value)?;
            }
            Ok(())
        }
        Expr::BinOp { left, right, .. } => {
            validate_expr(left)?;
            validate_expr(right)
        }
        Expr::IfExp { test, then, orelse } => {
            validate_expr(test)?;
            validate_expr(then)?;
            validate_expr(orelse)
        }
        Expr::Lambda { params, body } => {
            validate_params(params)?;
            validate_expr(body)
        }
    }
}

fn validate_params(params: &Params) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in params.names() {
        if name.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateParameter(name.to_string()));
        }
    }
    params
        .keywords
        .iter()
        .try_for_each(|kw| validate_expr(&kw.default))
}

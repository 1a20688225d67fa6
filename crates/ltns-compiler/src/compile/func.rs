//! Function construction: `<fn* key=default>[params] body...</fn*>`.
//!
//! The first child is the parameter list, the remaining children are the
//! body, compiled as a sequence. Attributes declare keyword parameters and
//! their default values; defaults are evaluated where the function is
//! constructed.
//!
//! A pure body becomes a lambda. A body with steps becomes a synthesized
//! `def _temp_func_N` ending in `return <value>`, and the form's value is
//! the function's name. In neither case is the function called.

use std::collections::HashSet;

use rhizome_ltns_ir::{Expr, KeywordParam, Params, Stmt};
use rhizome_ltns_syntax_tags::{Element, Node};

use super::{seq, Compiler};
use crate::{Arity, CompileError, CompileErrorKind, Fragment};

/// Marker in a parameter list introducing the rest parameter.
pub(crate) const REST_MARKER: &str = "&";

pub(crate) fn compile_fn(
    compiler: &mut Compiler,
    element: &Element,
) -> Result<Fragment, CompileError> {
    let Some((params, body)) = element.children.split_first() else {
        return Err(CompileError::new(
            element,
            CompileErrorKind::InvalidArgCount {
                expected: Arity::at_least(2),
                got: 0,
            },
        ));
    };
    let Node::List(entries) = params else {
        return Err(CompileError::new(
            element,
            CompileErrorKind::ParamsNotList(params.kind_name()),
        ));
    };
    let mut params = parse_params(element, entries)?;

    let defaults = compiler.compile_attributes(&element.attributes)?;
    let body = seq::compile_sequence(compiler, body)?.ok_or_else(|| {
        CompileError::new(
            element,
            CompileErrorKind::InvalidArgCount {
                expected: Arity::at_least(2),
                got: 1,
            },
        )
    })?;

    let (mut steps, defaults) = defaults.into_parts();
    params.keywords = defaults
        .into_iter()
        .map(|arg| KeywordParam {
            name: arg.name,
            default: arg.value,
        })
        .collect();
    check_unique(element, &params)?;

    if body.is_pure() {
        return Ok(Fragment::new(steps, Expr::lambda(params, body.value)));
    }

    let name = compiler.temps().func_name();
    let (mut body_steps, value) = body.into_parts();
    body_steps.push(Stmt::Return(value));
    steps.push(Stmt::function_def(&name, params, body_steps));
    Ok(Fragment::new(steps, Expr::name(name)))
}

/// Positional names, then optionally `&` and exactly one rest name.
fn parse_params(element: &Element, entries: &[Node]) -> Result<Params, CompileError> {
    let error = |kind: CompileErrorKind| CompileError::new(element, kind);
    let mut params = Params::default();
    let mut entries = entries.iter();
    while let Some(entry) = entries.next() {
        let name = symbol(entry).map_err(error)?;
        if name != REST_MARKER {
            params.positional.push(name.to_string());
            continue;
        }
        let rest = entries
            .next()
            .ok_or(CompileErrorKind::MissingRestName)
            .and_then(symbol)
            .map_err(error)?;
        if rest == REST_MARKER {
            return Err(error(CompileErrorKind::MissingRestName));
        }
        if entries.next().is_some() {
            return Err(error(CompileErrorKind::ExtraRestName));
        }
        params.rest = Some(rest.to_string());
    }
    Ok(params)
}

fn symbol(node: &Node) -> Result<&str, CompileErrorKind> {
    match node {
        Node::Symbol(name) => Ok(name),
        other => Err(CompileErrorKind::InvalidParameter(other.kind_name())),
    }
}

fn check_unique(element: &Element, params: &Params) -> Result<(), CompileError> {
    let mut seen = HashSet::new();
    for name in params.names() {
        if !seen.insert(name) {
            return Err(CompileError::new(
                element,
                CompileErrorKind::DuplicateParameter(name.to_string()),
            ));
        }
    }
    Ok(())
}

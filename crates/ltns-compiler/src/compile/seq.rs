//! Sequencing: `<do>`.

use rhizome_ltns_syntax_tags::{Element, Node};

use super::Compiler;
use crate::{Arity, CompileError, CompileErrorKind, Fragment};

/// Compile `nodes` left to right as a sequence.
///
/// Every value but the last is evaluated for effect; the last one is the
/// value of the whole sequence. Returns `None` for an empty sequence.
pub(crate) fn compile_sequence(
    compiler: &mut Compiler,
    nodes: &[Node],
) -> Result<Option<Fragment>, CompileError> {
    let mut result: Option<Fragment> = None;
    for node in nodes {
        let next = compiler.compile(node)?;
        result = Some(match result {
            Some(previous) => previous.then(next),
            None => next,
        });
    }
    Ok(result)
}

pub(crate) fn compile_do(
    compiler: &mut Compiler,
    element: &Element,
) -> Result<Fragment, CompileError> {
    compile_sequence(compiler, &element.children)?.ok_or_else(|| {
        CompileError::new(
            element,
            CompileErrorKind::InvalidArgCount {
                expected: Arity::at_least(1),
                got: 0,
            },
        )
    })
}

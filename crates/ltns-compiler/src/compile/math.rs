//! Binary operators.

use rhizome_ltns_ir::{BinOp, Expr};
use rhizome_ltns_syntax_tags::Element;

use super::Compiler;
use crate::{Arity, CompileError, CompileErrorKind, Fragment};

/// `<op>left right</op>`: left operand steps run first.
pub(crate) fn compile_bin_op(
    compiler: &mut Compiler,
    op: BinOp,
    element: &Element,
) -> Result<Fragment, CompileError> {
    let [left, right] = element.children.as_slice() else {
        return Err(CompileError::new(
            element,
            CompileErrorKind::InvalidArgCount {
                expected: Arity::exactly(2),
                got: element.children.len(),
            },
        ));
    };
    let left = compiler.compile(left)?;
    let right = compiler.compile(right)?;
    Ok(left
        .zip(right)
        .map(|(left, right)| Expr::binop(op, left, right)))
}

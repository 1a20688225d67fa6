//! Conditionals: `<if>test then else</if>`.
//!
//! When both branches are pure the form is a plain conditional expression.
//! Otherwise the branches are moved into a synthesized nullary function:
//!
//! ```text
//! def _temp_func_1():
//!     if test:
//!         <then steps>
//!         _temp_var_2 = <then value>
//!     else:
//!         <else steps>
//!         _temp_var_2 = <else value>
//!     return _temp_var_2
//! ```
//!
//! and the value of the form is `_temp_func_1()`. Steps of the test always
//! run before the form, unconditionally.

use rhizome_ltns_ir::{Expr, Params, Stmt};
use rhizome_ltns_syntax_tags::Element;

use super::Compiler;
use crate::{Arity, CompileError, CompileErrorKind, Fragment};

pub(crate) fn compile_if(
    compiler: &mut Compiler,
    element: &Element,
) -> Result<Fragment, CompileError> {
    let (test, then, orelse) = match element.children.as_slice() {
        [test, then] => (test, then, None),
        [test, then, orelse] => (test, then, Some(orelse)),
        children => {
            return Err(CompileError::new(
                element,
                CompileErrorKind::InvalidArgCount {
                    expected: Arity::between(2, 3),
                    got: children.len(),
                },
            ));
        }
    };

    let test = compiler.compile(test)?;
    let then = compiler.compile(then)?;
    let orelse = match orelse {
        Some(node) => compiler.compile(node)?,
        None => Fragment::pure(Expr::None),
    };

    if then.is_pure() && orelse.is_pure() {
        return Ok(test.map(|test| Expr::if_exp(test, then.value, orelse.value)));
    }

    let temps = compiler.temps();
    let func = temps.func_name();
    let var = temps.var_name();
    Ok(test.and_then(|test| {
        let body = vec![
            Stmt::If {
                test,
                then: assign_branch(then, &var),
                orelse: assign_branch(orelse, &var),
            },
            Stmt::Return(Expr::name(&var)),
        ];
        Fragment::new(
            vec![Stmt::function_def(&func, Params::default(), body)],
            Expr::call(Expr::name(func), Vec::new()),
        )
    }))
}

/// Branch steps followed by storing the branch value in `var`.
fn assign_branch(branch: Fragment, var: &str) -> Vec<Stmt> {
    let (mut steps, value) = branch.into_parts();
    steps.push(Stmt::assign(var, value));
    steps
}

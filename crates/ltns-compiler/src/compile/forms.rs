//! Special form table.
//!
//! Tag names in this table have compiler-defined semantics; every other tag
//! is an ordinary call. The table is closed: there is no registration.

use rhizome_ltns_ir::BinOp;
use rhizome_ltns_syntax_tags::Element;

use crate::{Arity, CompileError, CompileErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpecialForm {
    /// `do`
    Do,
    /// `if`
    If,
    /// `fn*`
    Fn,
    /// `add*`, `sub*`, `mod`, `bitand`, ...
    BinOp(BinOp),
}

impl SpecialForm {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        let form = match name {
            "do" => SpecialForm::Do,
            "if" => SpecialForm::If,
            "fn*" => SpecialForm::Fn,
            _ => SpecialForm::BinOp(operator(name)?),
        };
        Some(form)
    }

    pub(crate) fn signature(self) -> Signature {
        match self {
            SpecialForm::Do => Signature {
                arity: Arity::at_least(1),
                keywords: false,
            },
            SpecialForm::If => Signature {
                arity: Arity::between(2, 3),
                keywords: false,
            },
            SpecialForm::Fn => Signature {
                arity: Arity::at_least(2),
                keywords: true,
            },
            SpecialForm::BinOp(_) => Signature {
                arity: Arity::exactly(2),
                keywords: false,
            },
        }
    }
}

/// Binary operator named by a tag.
fn operator(name: &str) -> Option<BinOp> {
    let op = match name {
        "add*" => BinOp::Add,
        "sub*" => BinOp::Sub,
        "mul*" => BinOp::Mul,
        "div*" => BinOp::Div,
        "mod" => BinOp::Mod,
        "pow" => BinOp::Pow,
        "lshift" => BinOp::LShift,
        "rshift" => BinOp::RShift,
        "bitor" => BinOp::BitOr,
        "bitxor" => BinOp::BitXor,
        "bitand" => BinOp::BitAnd,
        _ => return None,
    };
    Some(op)
}

/// Returns true if `name` is compiled as a special form rather than a call.
pub fn is_special_form(name: &str) -> bool {
    SpecialForm::from_name(name).is_some()
}

/// Positional arity and keyword acceptance of a special form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Signature {
    pub(crate) arity: Arity,
    pub(crate) keywords: bool,
}

impl Signature {
    pub(crate) fn check(self, element: &Element) -> Result<(), CompileError> {
        let got = element.children.len();
        if !self.arity.accepts(got) {
            return Err(CompileError::new(
                element,
                CompileErrorKind::InvalidArgCount {
                    expected: self.arity,
                    got,
                },
            ));
        }
        if !self.keywords {
            if let Some(name) = element.attributes.keys().next() {
                return Err(CompileError::new(
                    element,
                    CompileErrorKind::UnexpectedAttribute(name.clone()),
                ));
            }
        }
        Ok(())
    }
}

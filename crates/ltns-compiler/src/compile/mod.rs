//! Syntax tree to IR compilation.

mod cond;
mod forms;
mod func;
mod math;
mod seq;

use indexmap::IndexMap;
use rhizome_ltns_ir::{Expr, KeywordArg, Program};
use rhizome_ltns_syntax_tags::{Element, Node};

use crate::{CompileError, Fragment, TempNames};
use forms::SpecialForm;

pub use forms::is_special_form;

/// Compiles syntax-tree nodes into fragments.
///
/// A compiler owns the temporary-name counter for everything it compiles.
/// Use one compiler per program; names are only unique within one compiler.
#[derive(Debug, Default)]
pub struct Compiler {
    temps: TempNames,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile one node.
    pub fn compile(&mut self, node: &Node) -> Result<Fragment, CompileError> {
        let fragment = match node {
            Node::Element(element) => return self.compile_element(element),
            Node::Symbol(name) => Fragment::pure(Expr::name(name)),
            Node::Keyword(text) => Fragment::pure(Expr::keyword(text)),
            Node::String(value) => Fragment::pure(Expr::str(value)),
            Node::Integer(integer) => Fragment::pure(Expr::Int(integer.value)),
            Node::Float(value) => Fragment::pure(Expr::Float(*value)),
            Node::Complex { re, im } => Fragment::pure(Expr::Complex { re: *re, im: *im }),
            Node::List(items) => self.compile_all(items)?.map(Expr::List),
        };
        Ok(fragment)
    }

    /// Compile top-level nodes as one implicit sequence and finalize them.
    ///
    /// An empty node list yields an empty program.
    pub fn compile_program(&mut self, nodes: &[Node]) -> Result<Program, CompileError> {
        let program = seq::compile_sequence(self, nodes)?
            .map(|fragment| fragment.into_program())
            .unwrap_or_default();
        Ok(program)
    }

    /// Number of temporary names allocated so far.
    pub fn temps_allocated(&self) -> u32 {
        self.temps.allocated()
    }

    pub(crate) fn temps(&mut self) -> &mut TempNames {
        &mut self.temps
    }

    /// Compile nodes left to right, collecting their values.
    pub(crate) fn compile_all(
        &mut self,
        nodes: &[Node],
    ) -> Result<Fragment<Vec<Expr>>, CompileError> {
        let fragments = nodes
            .iter()
            .map(|node| self.compile(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Fragment::collect(fragments))
    }

    /// Compile attribute values in order into keyword arguments.
    pub(crate) fn compile_attributes(
        &mut self,
        attributes: &IndexMap<String, Node>,
    ) -> Result<Fragment<Vec<KeywordArg>>, CompileError> {
        let fragments = attributes
            .iter()
            .map(|(name, value)| {
                let fragment = self.compile(value)?;
                Ok(fragment.map(|expr| KeywordArg::new(name, expr)))
            })
            .collect::<Result<Vec<_>, CompileError>>()?;
        Ok(Fragment::collect(fragments))
    }

    fn compile_element(&mut self, element: &Element) -> Result<Fragment, CompileError> {
        match SpecialForm::from_name(&element.name) {
            Some(form) => self.compile_special(form, element),
            None => self.compile_call(element),
        }
    }

    fn compile_special(
        &mut self,
        form: SpecialForm,
        element: &Element,
    ) -> Result<Fragment, CompileError> {
        form.signature().check(element)?;
        match form {
            SpecialForm::Do => seq::compile_do(self, element),
            SpecialForm::If => cond::compile_if(self, element),
            SpecialForm::Fn => func::compile_fn(self, element),
            SpecialForm::BinOp(op) => math::compile_bin_op(self, op, element),
        }
    }

    /// Ordinary call: children are positional arguments, attributes are
    /// keyword arguments.
    fn compile_call(&mut self, element: &Element) -> Result<Fragment, CompileError> {
        let args = self.compile_all(&element.children)?;
        let keywords = self.compile_attributes(&element.attributes)?;
        Ok(args.zip(keywords).map(|(args, keywords)| {
            Expr::call_with_keywords(Expr::name(&element.name), args, keywords)
        }))
    }
}

/// Compile one node with a fresh compiler.
pub fn compile(node: &Node) -> Result<Fragment, CompileError> {
    Compiler::new().compile(node)
}

/// Compile a whole program with a fresh compiler.
pub fn compile_program(nodes: &[Node]) -> Result<Program, CompileError> {
    Compiler::new().compile_program(nodes)
}

//! LTNS compiler: syntax tree to statement/expression IR.
//!
//! Every node compiles to a [`Fragment`]: the ordered steps that must run
//! first, plus a value expression. Literals, calls and operators over pure
//! operands stay pure and nest freely. Forms that need statements (`do`
//! with more than one child, an `if` whose branches have steps, a `fn*`
//! whose body has steps) push those statements into the fragment's steps,
//! synthesizing helper functions named `_temp_func_N` when a value has to
//! be produced by a statement block.
//!
//! # Special forms
//!
//! | Tag | Children | Attributes |
//! |---|---|---|
//! | `do` | one or more expressions | none |
//! | `if` | test, then, optional else | none |
//! | `fn*` | `[params]`, one or more body expressions | keyword parameters with defaults |
//! | `add*` `sub*` `mul*` `div*` `mod` `pow` `lshift` `rshift` `bitor` `bitxor` `bitand` | two operands | none |
//!
//! Any other tag is a call: children are positional arguments, attributes
//! are keyword arguments.
//!
//! # Example
//!
//! ```
//! use rhizome_ltns_compiler::compile_source;
//! use rhizome_ltns_syntax_tags::ParseOptions;
//!
//! let program = compile_source(
//!     r#"<print><if>ready <do><log>"go"</log> 1</do> 0</if></print>"#,
//!     ParseOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(program.body.len(), 2);
//! ```

mod compile;
mod error;
mod fragment;
mod temp;

pub use compile::{compile, compile_program, is_special_form, Compiler};
pub use error::{Arity, CompileError, CompileErrorKind, Error};
pub use fragment::Fragment;
pub use temp::TempNames;

use rhizome_ltns_ir::Program;
use rhizome_ltns_syntax_tags::{parse_with, ParseOptions};

/// Parse and compile source text into a program.
pub fn compile_source(source: &str, options: ParseOptions) -> Result<Program, Error> {
    let nodes = parse_with(source, options)?;
    Ok(compile_program(&nodes)?)
}

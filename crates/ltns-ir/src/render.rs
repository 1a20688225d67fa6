//! Pseudo-source rendering for inspection.

use std::fmt::{self, Display, Formatter};

use crate::{Expr, Params, Program, Stmt};

const INDENT: usize = 4;

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_block(f, &self.body, 0)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

fn write_block(f: &mut Formatter<'_>, stmts: &[Stmt], indent: usize) -> fmt::Result {
    if stmts.is_empty() {
        return writeln!(f, "{:indent$}pass", "");
    }
    for stmt in stmts {
        write_stmt(f, stmt, indent)?;
    }
    Ok(())
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, indent: usize) -> fmt::Result {
    match stmt {
        Stmt::Expr(expr) => writeln!(f, "{:indent$}{}", "", expr),
        Stmt::Assign { target, value } => writeln!(f, "{:indent$}{} = {}", "", target, value),
        Stmt::FunctionDef { name, params, body } => {
            writeln!(f, "{:indent$}def {}({}):", "", name, params)?;
            write_block(f, body, indent + INDENT)
        }
        Stmt::If { test, then, orelse } => {
            writeln!(f, "{:indent$}if {}:", "", test)?;
            write_block(f, then, indent + INDENT)?;
            if !orelse.is_empty() {
                writeln!(f, "{:indent$}else:", "")?;
                write_block(f, orelse, indent + INDENT)?;
            }
            Ok(())
        }
        Stmt::Return(value) => writeln!(f, "{:indent$}return {}", "", value),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => f.write_str(name),
            Expr::Str(s) => f.write_str(&string_literal(s)),
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Float(n) => f.write_str(&float_literal(*n)),
            Expr::Complex { re, im } => {
                write!(f, "complex({}, {})", float_literal(*re), float_literal(*im))
            }
            Expr::None => f.write_str("None"),
            Expr::List(items) => {
                f.write_str("[")?;
                write_comma_separated(f, items)?;
                f.write_str("]")
            }
            Expr::Call {
                func,
                args,
                keywords,
            } => {
                if matches!(**func, Expr::Name(_)) {
                    write!(f, "{}(", func)?;
                } else {
                    write!(f, "({})(", func)?;
                }
                write_comma_separated(f, args)?;
                for (idx, keyword) in keywords.iter().enumerate() {
                    if idx > 0 || !args.is_empty() {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", keyword.name, keyword.value)?;
                }
                f.write_str(")")
            }
            Expr::BinOp { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::IfExp { test, then, orelse } => {
                write!(f, "({} if {} else {})", then, test, orelse)
            }
            Expr::Lambda { params, body } => {
                if params.is_empty() {
                    write!(f, "(lambda: {})", body)
                } else {
                    write!(f, "(lambda {}: {})", params, body)
                }
            }
        }
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.positional.clone();
        if let Some(rest) = &self.rest {
            parts.push(format!("*{}", rest));
        }
        for keyword in &self.keywords {
            parts.push(format!("{}={}", keyword.name, keyword.default));
        }
        f.write_str(&parts.join(", "))
    }
}

fn write_comma_separated(f: &mut Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn string_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('\0', "\\0");
    format!("\"{}\"", escaped)
}

fn float_literal(n: f64) -> String {
    // Handle special float values
    if n.is_nan() {
        "float(\"nan\")".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "float(\"inf\")".to_string()
        } else {
            "-float(\"inf\")".to_string()
        }
    } else {
        format!("{:?}", n)
    }
}

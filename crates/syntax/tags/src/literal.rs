//! Classification of bare identifiers.
//!
//! Tried in priority order: integer, float, complex, keyword, and finally
//! symbol. Only decimal notation is accepted for floats and complex parts,
//! so names like `inf` or `nan` stay symbols.

use crate::node::{Base, Integer, Node};

/// An identifier that looks like an integer but does not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntegerOutOfRange;

/// Classify identifier text into the most specific literal node.
pub(crate) fn classify(text: &str) -> Result<Node, IntegerOutOfRange> {
    if let Some(integer) = parse_integer(text) {
        return integer.map(Node::Integer);
    }
    if let Some(value) = parse_float(text) {
        return Ok(Node::Float(value));
    }
    if let Some((re, im)) = parse_complex(text) {
        return Ok(Node::Complex { re, im });
    }
    if let Some(keyword) = text.strip_prefix(':').filter(|rest| !rest.is_empty()) {
        return Ok(Node::Keyword(keyword.to_string()));
    }
    Ok(Node::Symbol(text.to_string()))
}

fn split_sign(text: &str) -> (&str, &str) {
    match text.as_bytes().first() {
        Some(b'+' | b'-') => text.split_at(1),
        _ => ("", text),
    }
}

/// `None` if the text is not integer-shaped.
fn parse_integer(text: &str) -> Option<Result<Integer, IntegerOutOfRange>> {
    let (sign, unsigned) = split_sign(text);
    let (base, digits) = match unsigned.get(..2) {
        Some("0b" | "0B") => (Base::Binary, &unsigned[2..]),
        Some("0o" | "0O") => (Base::Octal, &unsigned[2..]),
        Some("0x" | "0X") => (Base::Hexadecimal, &unsigned[2..]),
        _ => (Base::Decimal, unsigned),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base.radix())) {
        return None;
    }
    let value = i64::from_str_radix(&format!("{}{}", sign, digits), base.radix())
        .map(|value| Integer { value, base })
        .map_err(|_| IntegerOutOfRange);
    Some(value)
}

/// Decimal float: `1.5`, `.5`, `5.`, `1e10`, with optional sign.
fn is_decimal(text: &str) -> bool {
    let (_, unsigned) = split_sign(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return false;
    }
    if int_part.is_empty() && frac_part.is_none_or(str::is_empty) {
        return false;
    }

    match exponent {
        Some(exp) => {
            let (_, exp_digits) = split_sign(exp);
            !exp_digits.is_empty() && all_digits(exp_digits)
        }
        None => true,
    }
}

fn parse_float(text: &str) -> Option<f64> {
    if !is_decimal(text) {
        return None;
    }
    text.parse().ok()
}

/// `<imag>j` or `<real>(+|-)<imag>j`.
fn parse_complex(text: &str) -> Option<(f64, f64)> {
    let body = text.strip_suffix(['j', 'J'])?;
    if is_decimal(body) {
        return Some((0.0, body.parse().ok()?));
    }

    // Split at the last sign that does not belong to an exponent.
    let bytes = body.as_bytes();
    let split = (1..bytes.len()).rev().find(|&idx| {
        matches!(bytes[idx], b'+' | b'-') && !matches!(bytes[idx - 1], b'e' | b'E')
    })?;
    let (re, im) = body.split_at(split);
    if !is_decimal(re) || !is_decimal(im) {
        return None;
    }
    Some((re.parse().ok()?, im.parse().ok()?))
}

//! Integer Literal Parsing
//!
//! Decimal literals with optional sign, `_` digit-group separators and an
//! optional kind suffix (`i8`, `i16`, `i32`, `i64`). Unsuffixed literals are
//! `i32`, the default whole-number kind.

use crate::error::{PrimerError, PrimerResult};
use super::int::Int;
use super::kind::IntKind;

/// Parse `src` into a bounded integer.
pub fn parse_literal(src: &str) -> PrimerResult<Int> {
    let invalid = || PrimerError::InvalidLiteral(src.to_string());

    let (negative, rest) = match src.as_bytes().first() {
        Some(b'-') => (true, &src[1..]),
        Some(b'+') => (false, &src[1..]),
        _ => (false, src),
    };

    let (body, kind) = split_suffix(rest).ok_or_else(invalid)?;
    if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(invalid());
    }

    let digits = body
        .chars()
        .filter(|&c| c != '_')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(invalid)?;

    // saturates past i128, which is out of range for every kind anyway
    let magnitude = digits
        .into_iter()
        .fold(0i128, |acc, d| acc.saturating_mul(10).saturating_add(d as i128));

    let value = if negative { -magnitude } else { magnitude };
    if !kind.contains(value) {
        return Err(PrimerError::OutOfRange { kind, value });
    }
    Int::new(kind, value as i64)
}

/// Split a trailing kind suffix off the digits. Returns `None` for an
/// unknown `i`-suffix.
fn split_suffix(s: &str) -> Option<(&str, IntKind)> {
    match s.find('i') {
        Some(at) => {
            let kind = IntKind::from_name(&s[at..])?;
            Some((&s[..at], kind))
        }
        None => Some((s, IntKind::I32)),
    }
}

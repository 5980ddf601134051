//! Numeric Value Representation
//!
//! A value is either a bounded integer or a double. Mixed arithmetic follows
//! binary numeric promotion: two integers meet at the wider kind, and an
//! integer combined with a double is widened to `f64` first.

use std::fmt;

use crate::error::PrimerResult;
use super::int::{Int, OverflowMode};

/// Numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Fixed-width signed integer
    Int(Int),

    /// Double-precision float (IEEE 754)
    Float(f64),
}

impl Value {
    /// Widening conversion to `f64`
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i.to_f64(),
            Value::Float(f) => f,
        }
    }

    pub fn add(self, rhs: Value, mode: OverflowMode) -> PrimerResult<Value> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => {
                let kind = Ord::max(a.kind(), b.kind());
                // widening to the larger of the two kinds cannot fail
                let a = a.widen(kind).unwrap_or(a);
                Ok(Value::Int(a.add(b.get(), mode)?))
            }
            (a, b) => Ok(Value::Float(a.as_f64() + b.as_f64())),
        }
    }
}

impl From<Int> for Value {
    fn from(i: Int) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional part for integral floats ("10.0")
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

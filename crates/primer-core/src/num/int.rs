//! Bounded Integer Values
//!
//! An `Int` is a value tagged with its kind. Construction checks the kind's
//! range; arithmetic either wraps modulo `2^bits` or reports overflow,
//! depending on the `OverflowMode` in effect.

use std::fmt;

use tracing::trace;

use crate::error::{ArithOp, PrimerError, PrimerResult};
use super::kind::IntKind;

/// Out-of-range arithmetic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// Two's-complement wraparound, never fails
    #[default]
    Wrapping,

    /// Fail with `PrimerError::Overflow`
    Checked,
}

/// Integer value of a fixed-width signed kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int {
    kind: IntKind,
    value: i64,
}

impl Int {
    /// Declare a value of `kind`. Fails if `value` is outside the kind's range.
    pub fn new(kind: IntKind, value: i64) -> PrimerResult<Self> {
        if !kind.contains(value as i128) {
            return Err(PrimerError::OutOfRange { kind, value: value as i128 });
        }
        Ok(Int { kind, value })
    }

    /// Smallest value of `kind`
    pub fn min(kind: IntKind) -> Self {
        Int { kind, value: kind.min() }
    }

    /// Largest value of `kind`
    pub fn max(kind: IntKind) -> Self {
        Int { kind, value: kind.max() }
    }

    pub fn kind(self) -> IntKind {
        self.kind
    }

    pub fn get(self) -> i64 {
        self.value
    }

    /// Reinterpret in a wider (or equal) kind. Narrowing returns `None`.
    pub fn widen(self, kind: IntKind) -> Option<Self> {
        (kind >= self.kind).then_some(Int { kind, value: self.value })
    }

    /// Convert to `f64`. Exact for every kind up to 32 bits.
    pub fn to_f64(self) -> f64 {
        self.value as f64
    }

    pub fn add(self, rhs: i64, mode: OverflowMode) -> PrimerResult<Self> {
        self.apply(ArithOp::Add, self.value as i128 + rhs as i128, mode)
    }

    pub fn sub(self, rhs: i64, mode: OverflowMode) -> PrimerResult<Self> {
        self.apply(ArithOp::Sub, self.value as i128 - rhs as i128, mode)
    }

    pub fn mul(self, rhs: i64, mode: OverflowMode) -> PrimerResult<Self> {
        self.apply(ArithOp::Mul, self.value as i128 * rhs as i128, mode)
    }

    fn apply(self, op: ArithOp, exact: i128, mode: OverflowMode) -> PrimerResult<Self> {
        let kind = self.kind;
        let value = match mode {
            OverflowMode::Wrapping => kind.wrap(exact),
            OverflowMode::Checked if kind.contains(exact) => exact as i64,
            OverflowMode::Checked => return Err(PrimerError::Overflow { kind, op }),
        };
        trace!(%kind, %op, lhs = self.value, exact = %exact, result = value, "integer op");
        Ok(Int { kind, value })
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

macro_rules! int_from_primitive {
    ($t:ty, $kind:expr) => {
        impl From<$t> for Int {
            #[inline(always)]
            fn from(v: $t) -> Int {
                Int { kind: $kind, value: v as i64 }
            }
        }
    };
}

int_from_primitive!(i8, IntKind::I8);
int_from_primitive!(i16, IntKind::I16);
int_from_primitive!(i32, IntKind::I32);
int_from_primitive!(i64, IntKind::I64);

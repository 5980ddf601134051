//! Primer Error Types
//!
//! Defines the error conditions produced while building a diagnostics report.
//! Under the default configuration none of the arithmetic paths can fail; the
//! only reachable failure is writing the report out.

use std::io;

use thiserror::Error;

use crate::num::kind::IntKind;

/// Arithmetic operation that overflowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl std::fmt::Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "addition"),
            ArithOp::Sub => write!(f, "subtraction"),
            ArithOp::Mul => write!(f, "multiplication"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PrimerError {
    // Declaration errors
    #[error("value {value} does not fit in {kind}")]
    OutOfRange { kind: IntKind, value: i128 },

    #[error("invalid integer literal: {0:?}")]
    InvalidLiteral(String),

    // Arithmetic errors
    #[error("{kind} {op} overflowed")]
    Overflow { kind: IntKind, op: ArithOp },

    // IO boundary
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type PrimerResult<T> = Result<T, PrimerError>;

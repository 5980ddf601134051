//! Primer - Core Library
//!
//! Diagnostics about fixed-width signed integers and numeric widening.

pub mod config;
pub mod error;
pub mod num;
pub mod report;

// Re-export commonly used types
pub use config::PrimerConfig;
pub use error::{ArithOp, PrimerError, PrimerResult};
pub use num::{parse_literal, Int, IntKind, OverflowMode, Value};
pub use report::Diagnostics;

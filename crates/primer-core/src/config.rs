//! Primer Configuration
//!
//! Inputs of the diagnostics report. Every field has a fixed default; nothing
//! is read from files or the environment.

use crate::num::OverflowMode;

/// Report configuration
#[derive(Debug, Clone)]
pub struct PrimerConfig {
    /// First line of the report
    pub greeting: String,

    /// How out-of-range integer arithmetic is handled
    pub overflow: OverflowMode,

    /// Initial value of the 32-bit integer variable
    pub first_num: i32,

    /// Value of the floating-point variable
    pub second_num: f64,

    /// Factor the integer variable is multiplied by
    pub scale: i32,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        PrimerConfig {
            greeting: String::from("Hello World"),
            overflow: OverflowMode::Wrapping,
            first_num: 5,
            second_num: 5.5,
            scale: 2,
        }
    }
}

impl PrimerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }
}

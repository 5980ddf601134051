//! Integer Kinds
//!
//! The four fixed-width signed integer kinds and their representable bounds.

use std::fmt;

/// Fixed-width signed integer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
}

impl IntKind {
    /// All kinds, narrowest first
    pub const ALL: [IntKind; 4] = [IntKind::I8, IntKind::I16, IntKind::I32, IntKind::I64];

    /// Width in bits
    pub const fn bits(self) -> u32 {
        match self {
            IntKind::I8 => i8::BITS,
            IntKind::I16 => i16::BITS,
            IntKind::I32 => i32::BITS,
            IntKind::I64 => i64::BITS,
        }
    }

    /// Smallest representable value, `-2^(bits-1)`
    pub const fn min(self) -> i64 {
        match self {
            IntKind::I8 => i8::MIN as i64,
            IntKind::I16 => i16::MIN as i64,
            IntKind::I32 => i32::MIN as i64,
            IntKind::I64 => i64::MIN,
        }
    }

    /// Largest representable value, `2^(bits-1) - 1`
    pub const fn max(self) -> i64 {
        match self {
            IntKind::I8 => i8::MAX as i64,
            IntKind::I16 => i16::MAX as i64,
            IntKind::I32 => i32::MAX as i64,
            IntKind::I64 => i64::MAX,
        }
    }

    /// Whether `value` lies within `[min, max]`
    pub fn contains(self, value: i128) -> bool {
        (self.min() as i128..=self.max() as i128).contains(&value)
    }

    /// Reduce `value` modulo `2^bits` into the kind's two's-complement range.
    pub fn wrap(self, value: i128) -> i64 {
        // `as` between integer types truncates to the low bits
        match self {
            IntKind::I8 => value as i8 as i64,
            IntKind::I16 => value as i16 as i64,
            IntKind::I32 => value as i32 as i64,
            IntKind::I64 => value as i64,
        }
    }

    /// Source name of the kind (`i8`, `i16`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
        }
    }

    /// Look up a kind by its source name
    pub fn from_name(name: &str) -> Option<IntKind> {
        IntKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

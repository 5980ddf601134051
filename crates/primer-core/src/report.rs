//! Diagnostics Report
//!
//! Builds the ordered lines printed by `primer`: the greeting, the bounds of
//! each integer kind, the 32-bit wraparound demonstration, the mixed
//! integer/double variables and the literal facts. Each section is also
//! available as a typed value so callers can inspect it without parsing text.

use std::io::Write;

use tracing::debug;

use crate::config::PrimerConfig;
use crate::error::PrimerResult;
use crate::num::{parse_literal, Int, IntKind, Value};

/// Bounds of one integer kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindRange {
    pub kind: IntKind,
    pub min: i64,
    pub max: i64,
}

/// Result of stepping past both 32-bit bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wraparound {
    /// `i32::MAX + 1`
    pub max_plus_one: Int,
    /// `i32::MIN - 1`
    pub min_minus_one: Int,
}

/// Integer and double variables before and after mutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variables {
    pub first_num: Int,
    pub second_num: f64,
    pub scaled: Int,
    pub sum: Value,
}

/// Facts about literal syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literals {
    pub plain: Int,
    pub grouped: Int,
    pub suffixed: Int,
}

const PLAIN_LITERAL: &str = "2189567";
const GROUPED_LITERAL: &str = "2_189_567";
const SUFFIXED_LITERAL: &str = "100i64";

/// Diagnostics printer
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    config: PrimerConfig,
}

impl Diagnostics {
    pub fn new(config: PrimerConfig) -> Self {
        Diagnostics { config }
    }

    pub fn greeting(&self) -> &str {
        &self.config.greeting
    }

    pub fn ranges(&self) -> Vec<KindRange> {
        IntKind::ALL
            .into_iter()
            .map(|kind| KindRange { kind, min: kind.min(), max: kind.max() })
            .collect()
    }

    pub fn wraparound(&self) -> PrimerResult<Wraparound> {
        let mode = self.config.overflow;
        Ok(Wraparound {
            max_plus_one: Int::max(IntKind::I32).add(1, mode)?,
            min_minus_one: Int::min(IntKind::I32).sub(1, mode)?,
        })
    }

    pub fn variables(&self) -> PrimerResult<Variables> {
        let mode = self.config.overflow;
        let first_num = Int::from(self.config.first_num);
        let second_num = self.config.second_num;
        let scaled = first_num.mul(self.config.scale as i64, mode)?;
        let sum = Value::Int(scaled).add(Value::Float(second_num), mode)?;
        Ok(Variables { first_num, second_num, scaled, sum })
    }

    pub fn literals(&self) -> PrimerResult<Literals> {
        Ok(Literals {
            plain: parse_literal(PLAIN_LITERAL)?,
            grouped: parse_literal(GROUPED_LITERAL)?,
            suffixed: parse_literal(SUFFIXED_LITERAL)?,
        })
    }

    /// Every report line, in output order
    pub fn lines(&self) -> PrimerResult<Vec<String>> {
        let mut out = Vec::new();

        debug!("section: greeting");
        out.push(self.greeting().to_string());

        debug!("section: ranges");
        for r in self.ranges() {
            out.push(format!("The range of the {} type is: ({},{})", r.kind, r.min, r.max));
        }

        debug!(mode = ?self.config.overflow, "section: wraparound");
        let wrap = self.wraparound()?;
        out.push(format!(
            "Exceeding the maximum bound, i.e. (max+1), results in an overflow and gives us the value: {}",
            wrap.max_plus_one
        ));
        out.push(format!(
            "Exceeding the minimum bound, i.e. (min-1), results in an underflow and gives us the value: {}",
            wrap.min_minus_one
        ));
        out.push(
            "Underflow and overflow are known as wraparounds as the minimum changes to the maximum and vice versa"
                .to_string(),
        );

        debug!("section: variables");
        let vars = self.variables()?;
        out.push("The variable 'first_num' contains the value:".to_string());
        out.push(vars.first_num.to_string());
        out.push("The variable 'second_num' contains the value:".to_string());
        out.push(Value::Float(vars.second_num).to_string());
        out.push("The variable 'first_num' contains the following value after modification:".to_string());
        out.push(vars.scaled.to_string());
        out.push("Adding 2 variables of different types together results in:".to_string());
        out.push(vars.sum.to_string());

        debug!("section: literals");
        let lits = self.literals()?;
        out.push(format!(
            "The large {} and the pretty large {} are equivalent numbers: {}",
            lits.plain.kind(),
            lits.grouped.kind(),
            lits.plain == lits.grouped
        ));
        out.push(format!(
            "The width of the literal '{}' is {} bits",
            SUFFIXED_LITERAL,
            lits.suffixed.kind().bits()
        ));

        Ok(out)
    }

    /// Write the full report, one line per entry.
    pub fn write_to<W: Write>(&self, w: &mut W) -> PrimerResult<()> {
        let lines = self.lines()?;
        for line in &lines {
            writeln!(w, "{}", line)?;
        }
        w.flush()?;
        debug!(lines = lines.len(), "report written");
        Ok(())
    }
}

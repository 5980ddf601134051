pub mod int;
pub mod kind;
pub mod literal;
pub mod value;

pub use int::{Int, OverflowMode};
pub use kind::IntKind;
pub use literal::parse_literal;
pub use value::Value;

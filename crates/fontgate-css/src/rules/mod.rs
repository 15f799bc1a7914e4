//! Rule and stylesheet tree types.

mod rule;
mod stylesheet;

pub use rule::{Declaration, Rule};
pub use stylesheet::{RuleId, Stylesheet};

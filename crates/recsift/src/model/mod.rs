//! Data model populated by the line parser.

mod record;
mod rule;

pub use record::{Property, Record};
pub use rule::{ClassDefinition, Rule};

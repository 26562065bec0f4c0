//! Structural checks over whole record and class collections.

mod result;
mod validators;

pub use result::ValidationResult;
pub use validators::{validate_classes, validate_records};

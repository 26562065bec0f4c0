//! recsift: classify records by declarative rules.
//!
//! A document lists records (named entities with integer-valued attributes)
//! and classes (named conjunctions of rules). recsift parses both, checks
//! their structure and reports which records satisfy which classes.
//!
//! # Example
//!
//! ```
//! use recsift::Sifter;
//!
//! let text = "\
//! Wardrobe: color = [1, 2], size = [10, 40, 60]
//! Table: color = [1, 4], size = [20, 40], coating = [44]
//!
//! Voluminous: property \"size\" has 3 values
//! Blue: property \"color\" contains value 1
//! ";
//!
//! let outcome = Sifter::new().sift(text).unwrap();
//! assert_eq!(outcome.classification.get("Voluminous").unwrap(), ["Wardrobe"]);
//! assert_eq!(outcome.classification.get("Blue").unwrap(), ["Wardrobe", "Table"]);
//! ```

pub mod classifier;
pub mod document;
pub mod error;
pub mod matching;
pub mod model;
pub mod parser;
pub mod validation;

mod sifter;

pub use crate::sifter::{SiftOutcome, Sifter, SifterConfig, classify_checked};
pub use classifier::{Classification, classify};
pub use document::{Document, DocumentConfig, DocumentLoader};
pub use error::{ErrorKind, ErrorSet, ParseError, RecsiftError, Result};
pub use matching::{match_all_rules, match_rule};
pub use model::{ClassDefinition, Property, Record, Rule};
pub use parser::{
    Keywords, LineParser, ParserConfig, parse_class_line, parse_int_list, parse_record_line,
};
pub use validation::{ValidationResult, validate_classes, validate_records};

//! Line parser for record and class definitions.

mod class;
mod record;
mod values;

pub use values::parse_int_list;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::{ClassDefinition, Record};

/// Alternate-language rule phrases.
///
/// The English phrases "has property" and "contains value" are always
/// recognized; these are tried alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    /// Equivalents of "has property".
    pub has_property: Vec<String>,
    /// Equivalents of "contains value".
    pub contains_value: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            has_property: vec!["есть свойство".to_string()],
            contains_value: vec!["содержит значение".to_string()],
        }
    }
}

impl Keywords {
    /// English phrases only.
    pub fn english() -> Self {
        Self {
            has_property: Vec::new(),
            contains_value: Vec::new(),
        }
    }

    /// Lowercase and trim every phrase, dropping empty ones.
    fn normalized(self) -> Self {
        let clean = |phrases: Vec<String>| {
            phrases
                .into_iter()
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect()
        };
        Self {
            has_property: clean(self.has_property),
            contains_value: clean(self.contains_value),
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Alternate-language rule phrases.
    pub keywords: Keywords,
}

/// Parses single record and class lines.
#[derive(Debug, Clone)]
pub struct LineParser {
    config: ParserConfig,
}

impl LineParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config: ParserConfig {
                keywords: config.keywords.normalized(),
            },
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a record line such as `Table: color = [1, 4], size = [20, 40]`.
    pub fn parse_record_line(&self, line: &str) -> Result<Record, ParseError> {
        record::parse_record(line)
    }

    /// Parse a class line such as `Blue: property "color" contains value 1`.
    pub fn parse_class_line(&self, line: &str) -> Result<ClassDefinition, ParseError> {
        class::parse_class(line, &self.config.keywords)
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a record line with the default parser.
pub fn parse_record_line(line: &str) -> Result<Record, ParseError> {
    record::parse_record(line)
}

/// Parse a class line with the default parser.
pub fn parse_class_line(line: &str) -> Result<ClassDefinition, ParseError> {
    LineParser::new().parse_class_line(line)
}

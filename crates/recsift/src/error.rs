//! Error types for the recsift library.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source tag for errors raised by the line parser.
pub const SOURCE_PARSER: &str = "Parser";
/// Source tag for errors raised by the structural validator.
pub const SOURCE_VALIDATION: &str = "Validation";

/// Flat taxonomy of input problems.
///
/// Ordering follows declaration order and drives the reporting order of an
/// [`ErrorSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed class line or bracket structure.
    IncorrectRule,
    /// Malformed record line.
    InvalidRecord,
    /// Attribute name repeated within one record.
    DuplicateProperty,
    /// Property name not enclosed in double quotes.
    MissingQuote,
    /// Rule description matches none of the known patterns.
    UnknownRuleType,
    /// Nothing before the `:` of a class line.
    EmptyClassName,
    /// Nothing before the `:` of a record line.
    EmptyRecordName,
    /// Value list or number that is not a valid integer.
    InvalidNumericValue,
    /// Record collection is empty.
    NoRecords,
    /// Record without attributes.
    NoPropertiesDefined,
    /// Class collection is empty, or a class has no rules.
    NoClassesOrRules,
}

impl ErrorKind {
    /// Stable machine-readable name.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::IncorrectRule => "INCORRECT_RULE",
            ErrorKind::InvalidRecord => "INVALID_RECORD",
            ErrorKind::DuplicateProperty => "DUPLICATE_PROPERTY",
            ErrorKind::MissingQuote => "MISSING_QUOTE",
            ErrorKind::UnknownRuleType => "UNKNOWN_RULE_TYPE",
            ErrorKind::EmptyClassName => "EMPTY_CLASS_NAME",
            ErrorKind::EmptyRecordName => "EMPTY_RECORD_NAME",
            ErrorKind::InvalidNumericValue => "INVALID_NUMERIC_VALUE",
            ErrorKind::NoRecords => "NO_RECORDS",
            ErrorKind::NoPropertiesDefined => "NO_PROPERTIES_DEFINED",
            ErrorKind::NoClassesOrRules => "NO_CLASSES_OR_RULES",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A structured error raised while parsing one line.
///
/// `source` is a component tag, not a chained error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// Machine-readable kind.
    pub kind: ErrorKind,
    /// Component that raised the error.
    pub source: String,
    /// Human-readable detail. Not part of the error's identity.
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ErrorKind, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an error raised by the line parser.
    pub fn parser(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, SOURCE_PARSER, message)
    }

    /// Stable name of the error kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (Source: {}): {}", self.kind, self.source, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Deduplicating collection of [`ParseError`]s keyed by `(kind, source)`.
///
/// The first error inserted for a key is kept. Iteration is ordered by kind,
/// then by source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<(ErrorKind, String), ParseError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an error. Returns `false` if an error with the same kind and
    /// source was already present.
    pub fn insert(&mut self, error: ParseError) -> bool {
        let key = (error.kind, error.source.clone());
        if self.errors.contains_key(&key) {
            return false;
        }
        self.errors.insert(key, error);
        true
    }

    pub fn contains(&self, kind: ErrorKind, source: &str) -> bool {
        self.errors.contains_key(&(kind, source.to_string()))
    }

    /// Whether any error of the given kind is present, regardless of source.
    pub fn contains_kind(&self, kind: ErrorKind) -> bool {
        self.errors.keys().any(|(k, _)| *k == kind)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.errors.values()
    }

    /// Kinds present, in reporting order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.keys().map(|(k, _)| *k).collect()
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: ErrorSet) {
        self.extend(other.errors.into_values());
    }
}

impl Extend<ParseError> for ErrorSet {
    fn extend<I: IntoIterator<Item = ParseError>>(&mut self, iter: I) {
        for error in iter {
            self.insert(error);
        }
    }
}

impl FromIterator<ParseError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ParseError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        set.extend(iter);
        set
    }
}

impl From<ParseError> for ErrorSet {
    fn from(error: ParseError) -> Self {
        std::iter::once(error).collect()
    }
}

impl IntoIterator for ErrorSet {
    type Item = ParseError;
    type IntoIter = std::collections::btree_map::IntoValues<(ErrorKind, String), ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_values()
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Main error type for recsift operations.
#[derive(Debug, Error)]
pub enum RecsiftError {
    /// One or more input lines could not be parsed.
    #[error("Parse errors: {0}")]
    Parse(ErrorSet),

    /// Parsed collections violate a structural invariant.
    #[error("Validation failed [{kind}]: {reason}")]
    Validation { kind: ErrorKind, reason: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ParseError> for RecsiftError {
    fn from(error: ParseError) -> Self {
        RecsiftError::Parse(error.into())
    }
}

/// Result type alias for recsift operations.
pub type Result<T> = std::result::Result<T, RecsiftError>;

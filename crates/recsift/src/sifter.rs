//! Main Sifter struct and public API.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::classifier::{Classification, classify};
use crate::document::{Document, DocumentConfig, DocumentLoader};
use crate::error::{ErrorSet, RecsiftError, Result};
use crate::model::{ClassDefinition, Record};
use crate::parser::{LineParser, ParserConfig};
use crate::validation::{validate_classes, validate_records};

/// Configuration for a sifting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SifterConfig {
    /// Line parser configuration.
    pub parser: ParserConfig,
    /// Document framing configuration.
    pub document: DocumentConfig,
}

impl SifterConfig {
    /// Read a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SifterConfig = serde_json::from_str(json)?;
        if let Some(marker) = &config.document.section_marker {
            if marker.trim().is_empty() {
                return Err(RecsiftError::Config(
                    "section_marker must not be blank".to_string(),
                ));
            }
        }
        Ok(config)
    }
}

/// Result of a sifting run.
#[derive(Debug, Clone)]
pub struct SiftOutcome {
    /// Class name to matching record names.
    pub classification: Classification,
    /// Lines that were skipped because they did not parse.
    pub errors: ErrorSet,
}

/// Parses, validates and classifies documents.
#[derive(Debug, Clone, Default)]
pub struct Sifter {
    loader: DocumentLoader,
}

impl Sifter {
    /// Create a new Sifter with default configuration.
    pub fn new() -> Self {
        Self::with_config(SifterConfig::default())
    }

    /// Create a Sifter with custom configuration.
    pub fn with_config(config: SifterConfig) -> Self {
        let parser = LineParser::with_config(config.parser);
        Self {
            loader: DocumentLoader::with_config(parser, config.document),
        }
    }

    /// Parse a document holding records and classes, then classify it.
    pub fn sift(&self, text: &str) -> Result<SiftOutcome> {
        let document = self.loader.load(text)?;
        self.sift_document(document)
    }

    /// Same as [`Sifter::sift`] for records and classes held in separate texts.
    pub fn sift_parts(&self, records: &str, classes: &str) -> Result<SiftOutcome> {
        let mut document = self.loader.load_records(records)?;
        let class_doc = self.loader.load_classes(classes)?;

        document.classes = class_doc.classes;
        document.errors.merge(class_doc.errors);
        self.sift_document(document)
    }

    fn sift_document(&self, document: Document) -> Result<SiftOutcome> {
        let classification = classify_checked(&document.records, &document.classes)?;
        Ok(SiftOutcome {
            classification,
            errors: document.errors,
        })
    }
}

/// Validate both collections, then classify.
///
/// Returns [`RecsiftError::Validation`] for the first violation found;
/// records are checked before classes.
pub fn classify_checked(records: &[Record], classes: &[ClassDefinition]) -> Result<Classification> {
    for check in [validate_records(records), validate_classes(classes)] {
        if !check.is_correct {
            warn!(reason = %check.reason, "validation failed");
        }
        check.into_result()?;
    }

    let classification = classify(records, classes);
    info!(
        classes = classification.len(),
        matches = classification.match_count(),
        "classification complete"
    );
    Ok(classification)
}

//! Whole-document loading: record lines, a separator, then class lines.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ErrorSet, RecsiftError, Result};
use crate::model::{ClassDefinition, Record};
use crate::parser::LineParser;

/// Document loading configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// A line equal to this (after trimming) starts the class section.
    pub section_marker: Option<String>,
    /// Abort on the first malformed line instead of collecting errors.
    pub fail_fast: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Records,
    Classes,
}

/// Parsed contents of a document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Successfully parsed records, in input order.
    pub records: Vec<Record>,
    /// Class definitions, one per line, in input order.
    pub classes: Vec<ClassDefinition>,
    /// Line errors, deduplicated by kind and source.
    pub errors: ErrorSet,
    /// 1-based numbers of the lines that failed to parse.
    pub failed_lines: Vec<usize>,
}

impl Document {
    /// Parse a document with default configuration.
    pub fn parse(text: &str) -> Result<Self> {
        DocumentLoader::new().load(text)
    }

    /// True if every non-blank line parsed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Splits a document into sections and parses each line independently.
///
/// Blank lines are ignored, except that the first blank line after at least
/// one record line switches to the class section.
#[derive(Debug, Clone, Default)]
pub struct DocumentLoader {
    parser: LineParser,
    config: DocumentConfig,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(parser: LineParser, config: DocumentConfig) -> Self {
        Self { parser, config }
    }

    /// Load a document holding both sections.
    pub fn load(&self, text: &str) -> Result<Document> {
        self.load_from(text, Section::Records, true)
    }

    /// Load text that holds only record lines.
    pub fn load_records(&self, text: &str) -> Result<Document> {
        self.load_from(text, Section::Records, false)
    }

    /// Load text that holds only class lines.
    pub fn load_classes(&self, text: &str) -> Result<Document> {
        self.load_from(text, Section::Classes, false)
    }

    fn load_from(&self, text: &str, start: Section, switch_sections: bool) -> Result<Document> {
        let mut section = start;
        let mut seen_record_line = false;
        let mut records = Vec::new();
        let mut classes: Vec<ClassDefinition> = Vec::new();
        let mut errors = ErrorSet::new();
        let mut failed_lines = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if switch_sections && self.is_section_marker(line) {
                section = Section::Classes;
                continue;
            }
            if line.is_empty() {
                if switch_sections && section == Section::Records && seen_record_line {
                    section = Section::Classes;
                }
                continue;
            }

            let outcome = match section {
                Section::Records => {
                    seen_record_line = true;
                    self.parser
                        .parse_record_line(line)
                        .map(|record| records.push(record))
                }
                Section::Classes => self
                    .parser
                    .parse_class_line(line)
                    .map(|class| classes.push(class)),
            };

            if let Err(error) = outcome {
                debug!(line = line_no, kind = %error.kind, message = %error.message, "line rejected");
                if self.config.fail_fast {
                    return Err(RecsiftError::Parse(error.into()));
                }
                errors.insert(error);
                failed_lines.push(line_no);
            }
        }

        info!(
            records = records.len(),
            classes = classes.len(),
            failed_lines = failed_lines.len(),
            "document loaded"
        );

        Ok(Document {
            records,
            classes,
            errors,
            failed_lines,
        })
    }

    fn is_section_marker(&self, line: &str) -> bool {
        self.config
            .section_marker
            .as_deref()
            .is_some_and(|marker| !marker.trim().is_empty() && line == marker.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::Rule;

    const SAMPLE: &str = "\
Wardrobe: color = [1, 2], size = [10, 40, 60]
Table: color = [1, 4], size = [20, 40], coating = [44]

With coating: has property \"coating\"
Voluminous: property \"size\" has 3 values
";

    #[test]
    fn test_blank_line_separates_sections() {
        let doc = Document::parse(SAMPLE).unwrap();
        assert_eq!(doc.records.len(), 2);
        assert_eq!(doc.classes.len(), 2);
        assert!(doc.is_clean());
    }

    #[test]
    fn test_leading_and_repeated_blank_lines() {
        let text = "\n   \nLamp: power=[100]\n\n\n\t\nBright: has property \"power\"\n\n";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.classes.len(), 1);
    }

    #[test]
    fn test_section_marker() {
        let loader = DocumentLoader::with_config(
            LineParser::new(),
            DocumentConfig {
                section_marker: Some("---".into()),
                fail_fast: false,
            },
        );
        let doc = loader
            .load("Lamp: power=[100]\n---\nBright: has property \"power\"")
            .unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.classes.len(), 1);
    }

    #[test]
    fn test_collects_errors_and_continues() {
        let text = "\
Lamp: power=[100]
Chair: size=[10], size=[20]
Table: color = [1, a, 3]
Desk: width=[1], width=[x]

Blue: property \"color\" contains value X
Bright: has property \"power\"
";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.records.len(), 1);
        assert_eq!(doc.classes.len(), 1);
        assert_eq!(doc.failed_lines, vec![2, 3, 4, 6]);
        assert_eq!(
            doc.errors.kinds(),
            vec![ErrorKind::DuplicateProperty, ErrorKind::InvalidNumericValue]
        );
    }

    #[test]
    fn test_fail_fast() {
        let loader = DocumentLoader::with_config(
            LineParser::new(),
            DocumentConfig {
                section_marker: None,
                fail_fast: true,
            },
        );
        let err = loader.load("Lamp: power=[100]\n: color=[1]\n").unwrap_err();
        match err {
            RecsiftError::Parse(errors) => {
                assert!(errors.contains(ErrorKind::EmptyRecordName, "Parser"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_same_class_name_keeps_each_line() {
        let text = "\
Wardrobe: color = [1, 2], size = [10, 40, 60]
Table: color = [1, 4], size = [20, 40], coating = [44]

Tagged: has property \"coating\"
Tagged: has property \"color\"
";
        let doc = Document::parse(text).unwrap();
        assert_eq!(doc.classes.len(), 2);
        assert_eq!(doc.classes[0].rules, vec![Rule::HasProperty { property: "coating".into() }]);
        assert_eq!(doc.classes[1].rules, vec![Rule::HasProperty { property: "color".into() }]);

        let result = crate::classifier::classify(&doc.records, &doc.classes);
        assert_eq!(result.get("Tagged").unwrap(), ["Wardrobe", "Table"]);
    }

    #[test]
    fn test_separate_sections() {
        let loader = DocumentLoader::new();
        let records = loader
            .load_records("Lamp: power=[100]\n\nDesk: width=[1]\n")
            .unwrap();
        assert_eq!(records.records.len(), 2);
        assert!(records.classes.is_empty());

        let classes = loader
            .load_classes("Bright: has property \"power\"\n\nWide: property \"width\" = [1]\n")
            .unwrap();
        assert_eq!(classes.classes.len(), 2);
        assert!(classes.records.is_empty());
    }
}

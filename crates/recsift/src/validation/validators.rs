//! Validators for parsed records and class definitions.

use std::collections::HashSet;

use crate::error::ErrorKind;
use crate::model::{ClassDefinition, Record};

use super::result::ValidationResult;

/// Check the record collection, reporting only the first violation.
///
/// Each check runs over the whole collection before the next one starts:
/// non-empty collection, non-empty names, at least one property per record,
/// then no two property names equal ignoring case.
pub fn validate_records(records: &[Record]) -> ValidationResult {
    if records.is_empty() {
        return ValidationResult::fail(ErrorKind::NoRecords, "No records found in input file");
    }

    if records.iter().any(|r| r.name.trim().is_empty()) {
        return ValidationResult::fail(ErrorKind::EmptyRecordName, "Empty record name");
    }

    if let Some(record) = records.iter().find(|r| r.properties.is_empty()) {
        return ValidationResult::fail(
            ErrorKind::NoPropertiesDefined,
            format!("No properties defined for record: {}", record.name),
        );
    }

    if let Some(record) = records.iter().find(|r| has_duplicate_property(r)) {
        return ValidationResult::fail(
            ErrorKind::DuplicateProperty,
            format!("Duplicate property name in record: {}", record.name),
        );
    }

    ValidationResult::ok()
}

fn has_duplicate_property(record: &Record) -> bool {
    let mut seen = HashSet::new();
    record
        .properties
        .keys()
        .any(|name| !seen.insert(name.to_lowercase()))
}

/// Check the class collection, reporting only the first violation.
pub fn validate_classes(classes: &[ClassDefinition]) -> ValidationResult {
    if classes.is_empty() {
        return ValidationResult::fail(
            ErrorKind::NoClassesOrRules,
            "No classes or rules found in input file",
        );
    }

    for class in classes {
        if class.rules.is_empty() {
            return ValidationResult::fail(
                ErrorKind::NoClassesOrRules,
                format!("Class {} has no rules", class.name),
            );
        }
    }

    ValidationResult::ok()
}

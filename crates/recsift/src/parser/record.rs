//! Record line parsing.
//!
//! Grammar: `<name>: <attr> = [<int>, ...], <attr> = [...], ...`

use crate::error::{ErrorKind, ParseError};
use crate::model::{Property, Record};

use super::values::{bracket_interior, parse_int_list, split_top_level};

pub(super) fn parse_record(line: &str) -> Result<Record, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidRecord,
            "Empty line in record file",
        ));
    }

    let (name, body) = line.split_once(':').ok_or_else(|| {
        ParseError::parser(
            ErrorKind::InvalidRecord,
            "Missing ':' separator in record line",
        )
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::EmptyRecordName,
            "Record name is empty",
        ));
    }

    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidRecord,
            format!("No properties defined after record name: {}", name),
        ));
    }

    let chunks = split_top_level(body);
    if chunks.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidRecord,
            format!("No valid property chunks found in record: {}", name),
        ));
    }

    let mut record = Record::new(name);
    for chunk in chunks {
        let property = parse_assignment(&record, chunk)?;
        record.properties.insert(property.name.clone(), property);
    }

    if record.properties.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidRecord,
            format!("Record has no valid properties: {}", name),
        ));
    }

    Ok(record)
}

/// Parse one `<attr> = [...]` chunk. The duplicate-name check runs before
/// the values are read, so a chunk that is both a duplicate and non-numeric
/// reports `DuplicateProperty`.
fn parse_assignment(record: &Record, chunk: &str) -> Result<Property, ParseError> {
    let (attr, value) = chunk.split_once('=').ok_or_else(|| {
        ParseError::parser(
            ErrorKind::InvalidRecord,
            format!("Missing '=' in property definition: {}", chunk),
        )
    })?;

    let attr = attr.trim().to_lowercase();
    if attr.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidRecord,
            format!("Missing property name in definition: {}", chunk),
        ));
    }

    let inside = bracket_interior(value.trim()).ok_or_else(|| {
        ParseError::parser(
            ErrorKind::IncorrectRule,
            format!("Invalid brackets in property value: {}", attr),
        )
    })?;

    if record.property(&attr).is_some() {
        return Err(ParseError::parser(
            ErrorKind::DuplicateProperty,
            format!("Duplicate property name: {}", attr),
        ));
    }

    let values = parse_int_list(inside).ok_or_else(|| {
        ParseError::parser(
            ErrorKind::InvalidNumericValue,
            format!("Non-numeric values in property: {}", attr),
        )
    })?;

    Ok(Property::new(attr, values))
}

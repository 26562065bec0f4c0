//! Records and their integer-valued properties.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ParseError};

/// One named integer sequence belonging to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Attribute name, lowercased by the parser.
    pub name: String,
    /// Values in input order. May be empty.
    pub values: Vec<i64>,
}

impl Property {
    pub fn new(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A named entity with integer-valued attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record name.
    pub name: String,
    /// Properties keyed by name, in input order.
    pub properties: IndexMap<String, Property>,
}

impl Record {
    /// Create a record with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Add a property. A name equal to an existing one (ignoring case) is
    /// rejected and the record is left unchanged.
    pub fn insert(&mut self, property: Property) -> Result<(), ParseError> {
        if self.has_property_ignore_case(&property.name) {
            return Err(ParseError::parser(
                ErrorKind::DuplicateProperty,
                format!("Duplicate property name: {}", property.name),
            ));
        }
        self.properties.insert(property.name.clone(), property);
        Ok(())
    }

    /// Builder-style [`Record::insert`] for constructing records in code.
    pub fn with_property(mut self, name: &str, values: Vec<i64>) -> Result<Self, ParseError> {
        self.insert(Property::new(name, values))?;
        Ok(self)
    }

    /// Look up a property by exact name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    fn has_property_ignore_case(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.properties.keys().any(|existing| existing.to_lowercase() == name)
    }
}

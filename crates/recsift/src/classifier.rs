//! Cross-application of classes to records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matching::match_all_rules;
use crate::model::{ClassDefinition, Record};

/// Mapping from class name to the names of the records that satisfy it.
///
/// Classes appear in input order and records keep their relative input
/// order within each class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification {
    classes: IndexMap<String, Vec<String>>,
}

impl Classification {
    /// Matching record names for a class. `None` if the class was not
    /// part of the input.
    pub fn get(&self, class: &str) -> Option<&[String]> {
        self.classes.get(class).map(Vec::as_slice)
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Iterate over `(class, record names)` in class input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.classes
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Total number of (class, record) matches.
    pub fn match_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.classes
    }
}

/// Classify every record against every class.
///
/// Every class gets an entry, even when nothing matches. Definitions that
/// share a name are alternatives: a record is listed once if any of them
/// matches.
pub fn classify(records: &[Record], classes: &[ClassDefinition]) -> Classification {
    let mut by_name: IndexMap<&str, Vec<&ClassDefinition>> = IndexMap::new();
    for class in classes {
        by_name.entry(class.name.as_str()).or_default().push(class);
    }

    let result = by_name
        .into_iter()
        .map(|(name, definitions)| {
            let matches = records
                .iter()
                .filter(|record| definitions.iter().any(|class| match_all_rules(record, class)))
                .map(|record| record.name.clone())
                .collect();
            (name.to_string(), matches)
        })
        .collect();

    Classification { classes: result }
}

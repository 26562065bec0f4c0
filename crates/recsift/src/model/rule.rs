//! Rules and the classes built from them.

use serde::{Deserialize, Serialize};

/// One atomic predicate over a record's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    /// The record has the property.
    HasProperty { property: String },

    /// The property holds exactly `expected_size` values.
    PropertySize { property: String, expected_size: usize },

    /// The property holds `expected_value` somewhere.
    ContainsValue { property: String, expected_value: i64 },

    /// The property holds exactly these values, in this order.
    EqualsExactly {
        property: String,
        expected_values: Vec<i64>,
    },
}

impl Rule {
    /// Name of the property the rule inspects.
    pub fn property(&self) -> &str {
        match self {
            Rule::HasProperty { property }
            | Rule::PropertySize { property, .. }
            | Rule::ContainsValue { property, .. }
            | Rule::EqualsExactly { property, .. } => property,
        }
    }

    /// Get a human-readable description of the rule.
    pub fn description(&self) -> String {
        match self {
            Rule::HasProperty { property } => format!("has property \"{}\"", property),
            Rule::PropertySize {
                property,
                expected_size,
            } => format!("property \"{}\" has {} values", property, expected_size),
            Rule::ContainsValue {
                property,
                expected_value,
            } => format!("property \"{}\" contains value {}", property, expected_value),
            Rule::EqualsExactly {
                property,
                expected_values,
            } => {
                let values: Vec<String> = expected_values.iter().map(|v| v.to_string()).collect();
                format!("property \"{}\" = [{}]", property, values.join(", "))
            }
        }
    }
}

/// A named class: a record belongs to it when every rule holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Class name.
    pub name: String,
    /// Conjunctive rule list.
    pub rules: Vec<Rule>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Class with a single rule.
    pub fn single(name: impl Into<String>, rule: Rule) -> Self {
        Self::new(name, vec![rule])
    }
}

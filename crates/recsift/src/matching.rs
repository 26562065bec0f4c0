//! Evaluation of rules against records.

use crate::model::{ClassDefinition, Record, Rule};

/// Check whether a record satisfies a single rule.
///
/// A record without the rule's property never satisfies it.
pub fn match_rule(record: &Record, rule: &Rule) -> bool {
    let Some(property) = record.property(rule.property()) else {
        return false;
    };

    match rule {
        Rule::HasProperty { .. } => true,
        Rule::PropertySize { expected_size, .. } => property.values.len() == *expected_size,
        Rule::ContainsValue { expected_value, .. } => property.values.contains(expected_value),
        Rule::EqualsExactly {
            expected_values, ..
        } => property.values == *expected_values,
    }
}

/// Check whether a record satisfies every rule of a class.
pub fn match_all_rules(record: &Record, class: &ClassDefinition) -> bool {
    class.rules.iter().all(|rule| match_rule(record, rule))
}

impl Rule {
    /// See [`match_rule`].
    pub fn matches(&self, record: &Record) -> bool {
        match_rule(record, self)
    }
}

impl ClassDefinition {
    /// See [`match_all_rules`].
    pub fn matches(&self, record: &Record) -> bool {
        match_all_rules(record, self)
    }
}

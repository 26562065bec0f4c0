//! Class line parsing.
//!
//! One rule per line, recognized by keyword scan:
//!
//! ```text
//! <class>: has property "<attr>"
//! <class>: property "<attr>" has <N> values
//! <class>: property "<attr>" contains value <X>
//! <class>: property "<attr>" = [<int>, ...]
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ErrorKind, ParseError};
use crate::model::{ClassDefinition, Rule};

use super::Keywords;
use super::values::parse_int_list;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static DIGITS_AND_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9 ]+$").unwrap());

const HAS_PROPERTY: &str = "has property";
const CONTAINS_VALUE: &str = "contains value";

/// Rule shapes, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleShape {
    HasProperty,
    PropertySize,
    ContainsValue,
    EqualsExactly,
}

impl RuleShape {
    fn label(&self) -> &'static str {
        match self {
            RuleShape::HasProperty => "'has property'",
            RuleShape::PropertySize => "'has N values'",
            RuleShape::ContainsValue => "'contains value'",
            RuleShape::EqualsExactly => "'='",
        }
    }
}

pub(super) fn parse_class(line: &str, keywords: &Keywords) -> Result<ClassDefinition, ParseError> {
    let (name, description) = line.split_once(':').ok_or_else(|| {
        ParseError::parser(
            ErrorKind::IncorrectRule,
            "Missing ':' separator in class definition",
        )
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::parser(ErrorKind::EmptyClassName, "Empty class name"));
    }

    // Property names and keywords are both case-insensitive.
    let description = description.trim().to_lowercase();
    let rule = parse_rule(&description, keywords)?;

    Ok(ClassDefinition::single(name, rule))
}

fn parse_rule(desc: &str, keywords: &Keywords) -> Result<Rule, ParseError> {
    let shape = detect_shape(desc, keywords).ok_or_else(|| {
        ParseError::parser(ErrorKind::UnknownRuleType, "Unrecognized class rule format")
    })?;

    let (property, rest) = quoted_property(desc, shape)?;

    match shape {
        RuleShape::HasProperty => Ok(Rule::HasProperty { property }),
        RuleShape::PropertySize => {
            let expected_size = expected_size(rest)?;
            Ok(Rule::PropertySize {
                property,
                expected_size,
            })
        }
        RuleShape::ContainsValue => {
            let expected_value = expected_value(rest, keywords)?;
            Ok(Rule::ContainsValue {
                property,
                expected_value,
            })
        }
        RuleShape::EqualsExactly => {
            let expected_values = expected_values(rest)?;
            Ok(Rule::EqualsExactly {
                property,
                expected_values,
            })
        }
    }
}

/// Pick the rule shape. The more specific phrases are tested first because
/// "has" also appears in "has property".
fn detect_shape(desc: &str, keywords: &Keywords) -> Option<RuleShape> {
    if find_phrase(desc, HAS_PROPERTY, &keywords.has_property).is_some() {
        Some(RuleShape::HasProperty)
    } else if desc.contains("has") && desc.contains("values") {
        Some(RuleShape::PropertySize)
    } else if find_phrase(desc, CONTAINS_VALUE, &keywords.contains_value).is_some() {
        Some(RuleShape::ContainsValue)
    } else if desc.contains('=') && desc.contains('[') {
        Some(RuleShape::EqualsExactly)
    } else {
        None
    }
}

/// Earliest occurrence of the English phrase or any alternate, as
/// `(start, end)` byte offsets.
fn find_phrase(text: &str, english: &str, alternates: &[String]) -> Option<(usize, usize)> {
    std::iter::once(english)
        .chain(alternates.iter().map(String::as_str))
        .filter(|phrase| !phrase.is_empty())
        .filter_map(|phrase| text.find(phrase).map(|start| (start, start + phrase.len())))
        .min_by_key(|(start, _)| *start)
}

/// Extract the property name between the first and last double quote.
/// Returns the name and the text after the closing quote.
fn quoted_property(desc: &str, shape: RuleShape) -> Result<(String, &str), ParseError> {
    let missing = || {
        ParseError::parser(
            ErrorKind::MissingQuote,
            format!("Invalid quotes in {} rule", shape.label()),
        )
    };

    let open = desc.find('"').ok_or_else(missing)?;
    let close = desc.rfind('"').ok_or_else(missing)?;
    if close <= open {
        return Err(missing());
    }

    let property = desc[open + 1..close].trim();
    if property.is_empty() {
        return Err(missing());
    }

    Ok((property.to_string(), &desc[close + 1..]))
}

fn expected_size(rest: &str) -> Result<usize, ParseError> {
    let invalid = || {
        ParseError::parser(
            ErrorKind::InvalidNumericValue,
            "Missing numeric value in 'has N values' rule",
        )
    };

    // Scanning starts after the closing quote so digits in the name are skipped.
    let digits = DIGIT_RUN.find(rest).ok_or_else(invalid)?;
    match digits.as_str().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(invalid()),
    }
}

fn expected_value(rest: &str, keywords: &Keywords) -> Result<i64, ParseError> {
    let (_, end) = find_phrase(rest, CONTAINS_VALUE, &keywords.contains_value).ok_or_else(|| {
        ParseError::parser(
            ErrorKind::IncorrectRule,
            "Missing keyword 'value' after property name",
        )
    })?;

    let value = rest[end..].trim();
    if value.is_empty() {
        return Err(ParseError::parser(
            ErrorKind::InvalidNumericValue,
            "No numeric value after 'value' keyword",
        ));
    }
    if !DIGITS_AND_SPACES.is_match(value) {
        return Err(ParseError::parser(
            ErrorKind::InvalidNumericValue,
            "Non-numeric characters found after 'value'",
        ));
    }

    // Only the leading digit run is the value.
    let digits = value.split(' ').next().unwrap_or(value);
    digits.parse::<i64>().map_err(|_| {
        ParseError::parser(
            ErrorKind::InvalidNumericValue,
            format!("Value out of range: {}", digits),
        )
    })
}

fn expected_values(rest: &str) -> Result<Vec<i64>, ParseError> {
    let bad_brackets = || {
        ParseError::parser(
            ErrorKind::IncorrectRule,
            "Invalid bracket structure in '=' rule",
        )
    };

    let open = rest.find('[').ok_or_else(bad_brackets)?;
    let close = rest[open..].find(']').ok_or_else(bad_brackets)? + open;

    match parse_int_list(&rest[open + 1..close]) {
        Some(values) if !values.is_empty() => Ok(values),
        _ => Err(ParseError::parser(
            ErrorKind::InvalidNumericValue,
            "Empty or invalid number list in '=' rule",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ClassDefinition, ParseError> {
        parse_class(line, &Keywords::default())
    }

    fn rule_of(line: &str) -> Rule {
        let class = parse(line).unwrap();
        assert_eq!(class.rules.len(), 1);
        class.rules.into_iter().next().unwrap()
    }

    fn kind_of(line: &str) -> ErrorKind {
        parse(line).unwrap_err().kind
    }

    #[test]
    fn test_has_property() {
        let class = parse("With coating: has property \"coating\"").unwrap();
        assert_eq!(class.name, "With coating");
        assert_eq!(class.rules, vec![Rule::HasProperty { property: "coating".into() }]);
    }

    #[test]
    fn test_property_size() {
        assert_eq!(
            rule_of("Voluminous: property \"size\" has 3 values"),
            Rule::PropertySize { property: "size".into(), expected_size: 3 }
        );
    }

    #[test]
    fn test_size_ignores_digits_inside_quotes() {
        assert_eq!(
            rule_of("Pair: property \"p2\" has 12 values"),
            Rule::PropertySize { property: "p2".into(), expected_size: 12 }
        );
    }

    #[test]
    fn test_contains_value() {
        assert_eq!(
            rule_of("Blue: property \"color\" contains value 1"),
            Rule::ContainsValue { property: "color".into(), expected_value: 1 }
        );
    }

    #[test]
    fn test_contains_value_takes_leading_number() {
        assert_eq!(
            rule_of("Blue: property \"color\" contains value 1 2"),
            Rule::ContainsValue { property: "color".into(), expected_value: 1 }
        );
        assert_eq!(
            rule_of("Blue: property \"color\" contains value 12   7"),
            Rule::ContainsValue { property: "color".into(), expected_value: 12 }
        );
    }

    #[test]
    fn test_equals_exactly() {
        assert_eq!(
            rule_of("Matte: property \"coating\" = [44, 21]"),
            Rule::EqualsExactly { property: "coating".into(), expected_values: vec![44, 21] }
        );
    }

    #[test]
    fn test_alternate_language_keywords() {
        assert_eq!(
            rule_of("С покрытием: есть свойство \"coating\""),
            Rule::HasProperty { property: "coating".into() }
        );
        assert_eq!(
            rule_of("Синий: свойство \"color\" содержит значение 1"),
            Rule::ContainsValue { property: "color".into(), expected_value: 1 }
        );
    }

    #[test]
    fn test_spacing_and_case_do_not_matter() {
        let class = parse(" Green : Property \"Color\"   Contains Value   2 ").unwrap();
        assert_eq!(class.name, "Green");
        assert_eq!(
            class.rules[0],
            Rule::ContainsValue { property: "color".into(), expected_value: 2 }
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(kind_of("Blue property \"color\" contains value 1"), ErrorKind::IncorrectRule);
        assert_eq!(kind_of(": has property \"x\""), ErrorKind::EmptyClassName);
        assert_eq!(kind_of("Red: property color contains value 1"), ErrorKind::MissingQuote);
        assert_eq!(kind_of("Red: has property \"color"), ErrorKind::MissingQuote);
        assert_eq!(kind_of("Red: has property \"\""), ErrorKind::MissingQuote);
        assert_eq!(kind_of("Orange: property \"a\" something else"), ErrorKind::UnknownRuleType);
        assert_eq!(kind_of("Class: if \"size\" = number"), ErrorKind::UnknownRuleType);
        assert_eq!(kind_of("Matte: property \"coating\" = 44, 21"), ErrorKind::UnknownRuleType);
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(kind_of("Blue: property \"color\" contains value X"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Blue: property \"color\" contains value XX"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Blue: property \"color\" contains value"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Blue: property \"color\" contains value 1 x"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Big: property \"size\" has 0 values"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Big: property \"size\" has many values"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Matte: property \"coating\" = []"), ErrorKind::InvalidNumericValue);
        assert_eq!(kind_of("Matte: property \"coating\" = [4, x]"), ErrorKind::InvalidNumericValue);
    }

    #[test]
    fn test_unclosed_list() {
        assert_eq!(kind_of("Matte: property \"coating\" = [44, 21"), ErrorKind::IncorrectRule);
    }

    #[test]
    fn test_custom_keywords() {
        let keywords = Keywords {
            has_property: vec!["hat eigenschaft".into()],
            contains_value: vec![],
        };
        let class = parse_class("Mit: hat Eigenschaft \"farbe\"", &keywords).unwrap();
        assert_eq!(class.rules[0], Rule::HasProperty { property: "farbe".into() });
        assert_eq!(
            parse_class("С покрытием: есть свойство \"coating\"", &keywords).unwrap_err().kind,
            ErrorKind::UnknownRuleType
        );
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// Type-specific attribute mapping carried by every node. Only keys relevant
/// to the node's type are meaningful; renderers ignore the rest.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Inline style overrides (CSS property -> value).
pub type StyleMap = BTreeMap<String, String>;

/// One entry of a select control's options list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Attribute value. Untagged so the serialized form mirrors plain JSON
/// (`"label": "Name"`, `"required": false`, `"columns": 2`, ...).
///
/// Variant order matters for untagged deserialization: bools and numbers
/// must be tried before strings, options lists before style maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    /// `serde_json::Number` rather than `f64`, so integers survive the wire
    /// as integers (`"gap": 16`, not `16.0`).
    Number(Number),
    String(String),
    Options(Vec<SelectOption>),
    Style(StyleMap),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_options(&self) -> Option<&[SelectOption]> {
        match self {
            AttrValue::Options(opts) => Some(opts),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON representation; store zero.
        let number = Number::from_f64(value).unwrap_or_else(|| Number::from(0));
        AttrValue::Number(number)
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Number(Number::from(value))
    }
}

impl From<Vec<SelectOption>> for AttrValue {
    fn from(value: Vec<SelectOption>) -> Self {
        AttrValue::Options(value)
    }
}

impl From<StyleMap> for AttrValue {
    fn from(value: StyleMap) -> Self {
        AttrValue::Style(value)
    }
}

/// Builds a style map from `(property, value)` pairs.
pub(crate) fn style(pairs: &[(&str, &str)]) -> AttrValue {
    AttrValue::Style(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_round_trip() {
        let mut attrs = Attributes::new();
        attrs.insert("label".into(), AttrValue::from("Text Input"));
        attrs.insert("required".into(), AttrValue::from(false));
        attrs.insert("columns".into(), AttrValue::from(2u32));
        attrs.insert(
            "options".into(),
            AttrValue::from(vec![
                SelectOption::new("Option 1", "1"),
                SelectOption::new("Option 2", "2"),
            ]),
        );
        attrs.insert(
            "style".into(),
            style(&[("padding", "20px"), ("border-radius", "8px")]),
        );

        let json = serde_json::to_string(&attrs).unwrap();
        let parsed: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, attrs);
    }

    #[test]
    fn test_untagged_json_is_plain() {
        let value = AttrValue::from(true);
        assert_eq!(serde_json::to_string(&value).unwrap(), "true");

        let value = AttrValue::from("hello");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"hello\"");

        // Whole numbers stay integers on the wire, fractions stay fractions.
        let value = AttrValue::from(16u32);
        assert_eq!(serde_json::to_string(&value).unwrap(), "16");

        let value = AttrValue::from(2.5);
        assert_eq!(serde_json::to_string(&value).unwrap(), "2.5");
    }

    #[test]
    fn test_integer_shape_survives_round_trip() {
        let value: AttrValue = serde_json::from_str("16").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "16");
        assert_eq!(value.as_number(), Some(16.0));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AttrValue::from("x").as_str(), Some("x"));
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from(3.0).as_number(), Some(3.0));
        assert_eq!(AttrValue::from("x").as_bool(), None);
    }
}

//! Loosely typed archive rows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of an archive JSON response, keyed by column name.
///
/// The archive reports numbers either as JSON numbers or as numeric strings,
/// and uses `null` for missing measurements. Accessors coerce both forms and
/// report anything else as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchiveRow(Map<String, Value>);

impl ArchiveRow {
    pub fn new(columns: Map<String, Value>) -> Self {
        Self(columns)
    }

    /// Non-empty text value of `column`. Numbers are rendered as text.
    pub fn text(&self, column: &str) -> Option<String> {
        match self.0.get(column)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numeric value of `column`, parsing numeric strings.
    ///
    /// May return non-finite values; callers decide what is acceptable.
    pub fn number(&self, column: &str) -> Option<f64> {
        match self.0.get(column)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Whole-number value of `column`.
    pub fn integer(&self, column: &str) -> Option<i64> {
        self.number(column)
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    }
}

impl From<Map<String, Value>> for ArchiveRow {
    fn from(columns: Map<String, Value>) -> Self {
        Self(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> ArchiveRow {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        let r = row(json!({"a": 10.5, "b": " 3.25 ", "c": "abc", "d": null, "e": true}));

        assert_eq!(r.number("a"), Some(10.5));
        assert_eq!(r.number("b"), Some(3.25));
        assert_eq!(r.number("c"), None);
        assert_eq!(r.number("d"), None);
        assert_eq!(r.number("e"), None);
        assert_eq!(r.number("missing"), None);
    }

    #[test]
    fn test_text_skips_blank_and_null() {
        let r = row(json!({"a": "Kepler-11 b", "b": "  ", "c": null, "d": 2016}));

        assert_eq!(r.text("a").as_deref(), Some("Kepler-11 b"));
        assert_eq!(r.text("b"), None);
        assert_eq!(r.text("c"), None);
        assert_eq!(r.text("d").as_deref(), Some("2016"));
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let r = row(json!({"year": 2011, "year_text": "2014", "frac": 1.5}));

        assert_eq!(r.integer("year"), Some(2011));
        assert_eq!(r.integer("year_text"), Some(2014));
        assert_eq!(r.integer("frac"), None);
    }
}

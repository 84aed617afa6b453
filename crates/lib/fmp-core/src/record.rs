//! Loosely-typed access to raw FMP records.
//!
//! Upstream responses are JSON lists of zero or one record with no schema
//! guarantees: any field may be absent or of an unexpected type. The
//! accessors here substitute per-field defaults instead of failing.

use serde_json::Value;

/// Borrowed view over one raw record.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    value: &'a Value,
}

/// Extracts the record from a decoded response body.
///
/// Bodies are treated as single-element sequences: the first element of a
/// list, or the map itself when the body is already a map. Empty lists and
/// non-record values yield `None`.
#[must_use]
pub fn first_record(body: &Value) -> Option<Record<'_>> {
    match body {
        Value::Array(items) => items.first().map(|value| Record { value }),
        Value::Object(_) => Some(Record { value: body }),
        _ => None,
    }
}

impl Record<'_> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.value.get(name)
    }

    /// String field, `None` when absent or not a string.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Numeric field, `None` when absent or not a number.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(Value::as_f64)
    }

    /// String field with the literal `N/A` fallback.
    #[must_use]
    pub fn text_or_na(&self, name: &str) -> &str {
        self.text(name).unwrap_or("N/A")
    }

    /// Dollar-prefixed amount with two decimal places, defaulting to `$0.00`.
    #[must_use]
    pub fn currency(&self, name: &str) -> String {
        let amount = self.number(name).unwrap_or(0.0);
        format!("${amount:.2}")
    }

    /// Two decimal places without a currency prefix, defaulting to `0.00`.
    #[must_use]
    pub fn decimal(&self, name: &str) -> String {
        let amount = self.number(name).unwrap_or(0.0);
        format!("{amount:.2}")
    }

    /// Thousands-grouped integer, defaulting to `0`.
    #[must_use]
    pub fn grouped(&self, name: &str) -> String {
        group_thousands(self.integer(name).unwrap_or(0))
    }

    /// Numeric value rendered as-is, string passthrough, `N/A` otherwise.
    ///
    /// For ratio fields (P/E, beta) that the API reports as numbers but
    /// omits for some listings.
    #[must_use]
    pub fn plain_or_na(&self, name: &str) -> String {
        match self.field(name) {
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::String(text)) => text.clone(),
            _ => "N/A".to_string(),
        }
    }

    /// Thousands-grouped count for numeric values, string passthrough,
    /// `N/A` otherwise.
    ///
    /// The API reports employee counts as either numbers or digit strings;
    /// grouping applies only to values that are actually numeric.
    #[must_use]
    pub fn count_or_na(&self, name: &str) -> String {
        match self.field(name) {
            Some(value @ Value::Number(_)) => {
                json_integer(value).map_or_else(|| "N/A".to_string(), group_thousands)
            }
            Some(Value::String(text)) => text.clone(),
            _ => "N/A".to_string(),
        }
    }

    fn integer(&self, name: &str) -> Option<i64> {
        self.field(name).and_then(json_integer)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn json_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|number| number as i64))
}

/// Formats an integer with `,` thousands separators.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grouping_inserts_separators_every_three_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(2_500_000_000), "2,500,000,000");
        assert_eq!(group_thousands(-1_234_567), "-1,234,567");
    }

    #[test]
    fn first_record_takes_head_of_list() {
        let body = json!([{"price": 1.0}, {"price": 2.0}]);
        let record = first_record(&body).expect("list has a head");
        assert_eq!(record.number("price"), Some(1.0));
    }

    #[test]
    fn first_record_accepts_bare_map() {
        let body = json!({"price": 3.5});
        let record = first_record(&body).expect("map is a record");
        assert_eq!(record.number("price"), Some(3.5));
    }

    #[test]
    fn first_record_rejects_empty_and_scalar_bodies() {
        assert!(first_record(&json!([])).is_none());
        assert!(first_record(&json!("nope")).is_none());
        assert!(first_record(&json!(42)).is_none());
    }

    #[test]
    fn accessors_substitute_defaults_for_missing_or_mistyped_fields() {
        let body = json!([{"price": "not a number"}]);
        let record = first_record(&body).expect("record");
        assert_eq!(record.currency("price"), "$0.00");
        assert_eq!(record.grouped("volume"), "0");
        assert_eq!(record.text_or_na("name"), "N/A");
        assert_eq!(record.plain_or_na("pe"), "N/A");
    }

    #[test]
    fn plain_or_na_renders_numbers_without_forced_precision() {
        let body = json!([{"pe": 28.5, "beta": 1, "label": "high"}]);
        let record = first_record(&body).expect("record");
        assert_eq!(record.plain_or_na("pe"), "28.5");
        assert_eq!(record.plain_or_na("beta"), "1");
        assert_eq!(record.plain_or_na("label"), "high");
    }

    #[test]
    fn count_groups_numbers_and_passes_strings_through() {
        let body = json!([{"a": 164_000, "b": "164000", "c": 164_000.0}]);
        let record = first_record(&body).expect("record");
        assert_eq!(record.count_or_na("a"), "164,000");
        assert_eq!(record.count_or_na("b"), "164000");
        assert_eq!(record.count_or_na("c"), "164,000");
        assert_eq!(record.count_or_na("missing"), "N/A");
    }
}

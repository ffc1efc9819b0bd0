//! Shared formatting helpers for TUI widgets.
//!
//! All pure formatting functions (no ratatui styles, no UI layout) live here.

use serde_json::Value;

/// Format a pollution level id for display: uppercase, underscores become
/// spaces.
///
/// `"hazardous"` → `"HAZARDOUS"`, `"unhealthy_for_sensitive"` →
/// `"UNHEALTHY FOR SENSITIVE"`.
pub fn level_label(level: &str) -> String {
    level.replace('_', " ").to_uppercase()
}

/// Format a raw gas reading: value as reported, "ppm" suffix.
pub fn ppm(value: f64) -> String {
    format!("{} ppm", value)
}

/// Format an aggregated gas value with two decimals.
pub fn ppm2(value: f64) -> String {
    format!("{:.2} ppm", value)
}

/// Up/down marker for a service flag.
pub fn service_icon(up: bool) -> &'static str {
    if up { "✔" } else { "✘" }
}

/// Render a JSON scalar without quoting strings; non-scalars fall back to
/// their compact JSON form. Used for fields whose type the API leaves open.
pub fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Pretty-print an arbitrary JSON value for verbatim panels.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render a table cell: strings unquoted, missing values as "-".
pub fn cell(value: Option<&Value>) -> String {
    match value {
        Some(v) => scalar(v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_label_uppercases_and_replaces_underscores() {
        assert_eq!(level_label("hazardous"), "HAZARDOUS");
        assert_eq!(
            level_label("unhealthy_for_sensitive"),
            "UNHEALTHY FOR SENSITIVE"
        );
        assert_eq!(level_label("good"), "GOOD");
    }

    #[test]
    fn ppm_keeps_raw_value_ppm2_rounds() {
        assert_eq!(ppm(12.3), "12.3 ppm");
        assert_eq!(ppm2(15.0), "15.00 ppm");
        assert_eq!(ppm2(15.456), "15.46 ppm");
    }

    #[test]
    fn scalar_unquotes_strings_only() {
        assert_eq!(scalar(&Value::String("high".into())), "high");
        assert_eq!(scalar(&Value::from(3)), "3");
        assert_eq!(scalar(&Value::Null), "-");
        assert_eq!(scalar(&serde_json::json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn cell_renders_missing_as_dash() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(&Value::from("x"))), "x");
    }
}

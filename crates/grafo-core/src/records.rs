//! Utilities for records output format

/// Escape double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Render a single record field; values containing whitespace or quotes
/// are quoted so every line splits on spaces.
pub fn field(value: &str) -> String {
    if value.is_empty() {
        "\"\"".to_string()
    } else if value.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("\"{}\"", escape_quotes(value))
    } else {
        value.to_string()
    }
}

//! `{{placeholder}}` substitution.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};
use serde_json::{Map, Value};

/// Text substituted for a placeholder whose key is absent from the data.
pub const MISSING_VALUE: &str = "undefined";

/// One `{{name}}` span; braces are not allowed inside, so adjacent
/// placeholders never merge into a single match.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").unwrap());

/// Replace every `{{name}}` in `phrase` with the string form of `values[name]`.
///
/// Names are trimmed. Absent keys become [`MISSING_VALUE`]; an empty name
/// (`{{}}`) is left untouched. Substituted text is never re-scanned.
///
/// ```
/// use phrasebook::core::interpolate;
/// use serde_json::json;
///
/// let data = json!({"name": "World"});
/// let values = data.as_object().unwrap();
/// assert_eq!(interpolate("Hello {{name}}", values), "Hello World");
/// assert_eq!(interpolate("Hello {{ who }}", values), "Hello undefined");
/// ```
pub fn interpolate(phrase: &str, values: &Map<String, Value>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(phrase, |caps: &Captures| {
            let name = caps[1].trim();
            if name.is_empty() {
                return caps[0].to_string();
            }
            match values.get(name) {
                Some(value) => display_value(value).into_owned(),
                None => MISSING_VALUE.to_string(),
            }
        })
        .into_owned()
}

/// Names of all placeholders in `phrase`, in order of appearance.
pub fn placeholders(phrase: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .captures_iter(phrase)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .collect()
}

/// String form used when a value is spliced into a phrase.
///
/// Whole floats print without a fraction, so a count of `3.0` reads `3`.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed("null"),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                Cow::Owned((f as i64).to_string())
            }
            _ => Cow::Owned(n.to_string()),
        },
        other => Cow::Owned(other.to_string()),
    }
}

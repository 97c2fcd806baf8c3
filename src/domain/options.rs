//! Coercion rules for values coming back from the hook tools.
//!
//! `config-get` and `relation-get` hand us loosely typed JSON: booleans may
//! arrive as the strings "yes"/"no", hosts as empty strings, and unset keys
//! as nulls. These helpers pin down the interpretation in one place.

use serde_json::Value;

/// A charm option is truthy only for boolean `true` or the exact string
/// `"yes"`. Anything else, including "true", "1", and non-string types,
/// counts as false.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "yes",
        _ => false,
    }
}

/// Treat null, missing, empty-string, and non-string values as absent;
/// a non-empty string comes back as its content.
pub fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

//! The key/value structure handed to the template renderer.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One configuration domain's context: string keys mapped to primitive JSON
/// values (plus nested maps/lists for the load balancer's unit table).
///
/// Maps are assembled fresh on every hook invocation and discarded after
/// rendering; nothing here is cached across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContextMap(BTreeMap<String, Value>);

impl ContextMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A map is complete when it is non-empty and no value is null or the
    /// empty string. Relation data that has not been published yet shows up
    /// as nulls, so completeness doubles as the "remote side is ready" check.
    pub fn is_complete(&self) -> bool {
        !self.0.is_empty()
            && self.0.values().all(|value| match value {
                Value::Null => false,
                Value::String(s) => !s.is_empty(),
                _ => true,
            })
    }

    /// Fold `other` into `self`; keys from `other` win on collision.
    pub fn merge(&mut self, other: ContextMap) {
        self.0.extend(other.0);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_map_is_incomplete() {
        assert!(!ContextMap::new().is_complete());
    }

    #[test]
    fn null_or_empty_string_blocks_completeness() {
        let mut map = ContextMap::new();
        map.insert("service_host", "10.0.0.2");
        map.insert("service_port", Value::Null);
        assert!(!map.is_complete());

        let mut map = ContextMap::new();
        map.insert("service_host", "");
        map.insert("service_port", "5000");
        assert!(!map.is_complete());
    }

    #[test]
    fn populated_map_is_complete() {
        let mut map = ContextMap::new();
        map.insert("service_host", "10.0.0.2");
        map.insert("service_port", "5000");
        map.insert("ssl", false);
        assert!(map.is_complete());
    }

    #[test]
    fn merge_prefers_incoming_keys() {
        let mut base = ContextMap::new();
        base.insert("http_port", 70);
        base.insert("debug", false);

        let mut overlay = ContextMap::new();
        overlay.insert("debug", true);

        base.merge(overlay);
        assert_eq!(base.get("debug"), Some(&Value::Bool(true)));
        assert_eq!(base.get("http_port"), Some(&Value::from(70)));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut map = ContextMap::new();
        map.insert("webroot", "/dashboard");
        map.insert("debug", true);

        let value = serde_json::to_value(&map).expect("serialize context map");
        assert_eq!(value, json!({"webroot": "/dashboard", "debug": true}));
    }
}

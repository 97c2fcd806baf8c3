use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::domain::AppError;
use crate::ports::HookEnv;

/// In-memory `HookEnv` for unit tests. Relation ids and units keep their
/// insertion order so tests can exercise the builders' own ordering rules.
pub struct FakeHookEnv {
    config: HashMap<String, Value>,
    relations: Vec<(String, String)>,
    relation_units: Vec<(String, String)>,
    relation_data: HashMap<(String, String), HashMap<String, String>>,
    local_unit: String,
    private_address: String,
    ipv6: Vec<String>,
    recorded_ipv6_exclude: Mutex<Vec<String>>,
}

impl FakeHookEnv {
    pub fn new() -> Self {
        Self {
            config: HashMap::new(),
            relations: Vec::new(),
            relation_units: Vec::new(),
            relation_data: HashMap::new(),
            local_unit: "dashboard/0".to_string(),
            private_address: "10.0.0.5".to_string(),
            ipv6: Vec::new(),
            recorded_ipv6_exclude: Mutex::new(Vec::new()),
        }
    }

    pub fn with_config(mut self, key: &str, value: Value) -> Self {
        self.config.insert(key.to_string(), value);
        self
    }

    pub fn with_local_unit(mut self, unit: &str) -> Self {
        self.local_unit = unit.to_string();
        self
    }

    pub fn with_private_address(mut self, address: &str) -> Self {
        self.private_address = address.to_string();
        self
    }

    pub fn with_ipv6(mut self, addresses: &[&str]) -> Self {
        self.ipv6 = addresses.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Register a unit on a relation, creating the relation id on first use.
    pub fn with_relation_unit(mut self, name: &str, relation_id: &str, unit: &str) -> Self {
        let entry = (name.to_string(), relation_id.to_string());
        if !self.relations.contains(&entry) {
            self.relations.push(entry);
        }
        self.relation_units.push((relation_id.to_string(), unit.to_string()));
        self
    }

    pub fn with_relation_data(
        mut self,
        relation_id: &str,
        unit: &str,
        key: &str,
        value: &str,
    ) -> Self {
        self.relation_data
            .entry((relation_id.to_string(), unit.to_string()))
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// The exclude list passed to the last `ipv6_addresses` call.
    pub fn excluded_ipv6(&self) -> Vec<String> {
        self.recorded_ipv6_exclude.lock().unwrap().clone()
    }
}

impl Default for FakeHookEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl HookEnv for FakeHookEnv {
    fn config(&self, key: &str) -> Result<Option<Value>, AppError> {
        Ok(self.config.get(key).cloned())
    }

    fn relation_ids(&self, name: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .relations
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, rid)| rid.clone())
            .collect())
    }

    fn related_units(&self, relation_id: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .relation_units
            .iter()
            .filter(|(rid, _)| rid == relation_id)
            .map(|(_, unit)| unit.clone())
            .collect())
    }

    fn relation_get(
        &self,
        relation_id: &str,
        unit: &str,
        key: &str,
    ) -> Result<Option<String>, AppError> {
        Ok(self
            .relation_data
            .get(&(relation_id.to_string(), unit.to_string()))
            .and_then(|data| data.get(key))
            .cloned())
    }

    fn local_unit(&self) -> Result<String, AppError> {
        Ok(self.local_unit.clone())
    }

    fn private_address(&self) -> Result<String, AppError> {
        Ok(self.private_address.clone())
    }

    fn ipv6_addresses(&self, exclude: &[String]) -> Result<Vec<String>, AppError> {
        *self.recorded_ipv6_exclude.lock().unwrap() = exclude.to_vec();
        let addresses: Vec<String> =
            self.ipv6.iter().filter(|a| !exclude.contains(a)).cloned().collect();
        if addresses.is_empty() {
            return Err(AppError::NoIpv6Address);
        }
        Ok(addresses)
    }
}

use serde_json::Value;

use crate::domain::AppError;

/// Access to the orchestration agent's view of the deployment: charm
/// options, relations to other services, and this unit's own network
/// identity. Production code talks to the hook tools; tests swap in a fake.
pub trait HookEnv {
    /// Read a charm option. `None` means unset; values keep the JSON type
    /// the option was declared with.
    fn config(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// All established relation ids for a relation name, e.g.
    /// `["identity-service:3"]`.
    fn relation_ids(&self, name: &str) -> Result<Vec<String>, AppError>;

    /// Remote units participating in one relation.
    fn related_units(&self, relation_id: &str) -> Result<Vec<String>, AppError>;

    /// One key of the data a remote unit published on a relation. `None`
    /// when the unit has not set it yet.
    fn relation_get(
        &self,
        relation_id: &str,
        unit: &str,
        key: &str,
    ) -> Result<Option<String>, AppError>;

    /// This unit's own name, e.g. `dashboard/0`.
    fn local_unit(&self) -> Result<String, AppError>;

    /// The unit's private address as reported by the agent.
    fn private_address(&self) -> Result<String, AppError>;

    /// Globally scoped IPv6 addresses assigned to this machine, excluding
    /// any listed in `exclude`.
    fn ipv6_addresses(&self, exclude: &[String]) -> Result<Vec<String>, AppError>;
}

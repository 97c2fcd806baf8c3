//! Identity endpoint discovery over the `identity-service` relation.

use tracing::debug;

use crate::domain::{AppError, ContextMap, sorted_ids};
use crate::ports::HookEnv;

use super::ContextSource;

/// Scans identity-service relations for the first unit that has published a
/// usable endpoint. Relations and units are visited in sorted order, not in
/// whatever order the store hands back; the first complete endpoint wins.
pub struct IdentityServiceContext;

impl ContextSource for IdentityServiceContext {
    fn name(&self) -> &'static str {
        "identity-service"
    }

    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        for rid in sorted_ids(env.relation_ids("identity-service")?) {
            for unit in sorted_ids(env.related_units(&rid)?) {
                let mut map = ContextMap::new();
                map.insert("service_host", env.relation_get(&rid, &unit, "service_host")?);
                map.insert("service_port", env.relation_get(&rid, &unit, "service_port")?);
                let protocol = env
                    .relation_get(&rid, &unit, "service_protocol")?
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| "http".to_string());
                map.insert("service_protocol", protocol);

                if map.is_complete() {
                    debug!(relation = %rid, unit = %unit, "identity endpoint selected");
                    return Ok(map);
                }
            }
        }
        Ok(ContextMap::new())
    }
}

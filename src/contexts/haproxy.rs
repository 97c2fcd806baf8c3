//! Load balancer context: cluster membership and the service port table.

use std::fs;

use serde_json::json;
use tracing::info;

use crate::domain::{AgentPaths, AppError, ContextMap, normalize_unit_name, sorted_ids, truthy};
use crate::ports::HookEnv;

use super::ContextSource;

/// The local balancer fronts the dashboard on every unit, so the unit table
/// always contains at least the local unit, plus every peer on the
/// `cluster` relation.
pub struct HaProxyContext {
    paths: AgentPaths,
}

impl HaProxyContext {
    pub fn new(paths: AgentPaths) -> Self {
        Self { paths }
    }

    /// Unit name to address, local unit first. With `prefer-ipv6` set the
    /// local address is the machine's first global IPv6 address, skipping
    /// the configured virtual IP; otherwise it is the agent-reported
    /// private address. Peer addresses come from the `cluster` relation and
    /// stay null until the peer publishes one.
    pub fn cluster_units(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let mut units = ContextMap::new();

        let local = normalize_unit_name(&env.local_unit()?);
        let address = if truthy(env.config("prefer-ipv6")?.as_ref()) {
            let exclude: Vec<String> = env
                .config("vip")?
                .and_then(|v| v.as_str().map(str::to_string))
                .into_iter()
                .collect();
            env.ipv6_addresses(&exclude)?
                .into_iter()
                .next()
                .ok_or(AppError::NoIpv6Address)?
        } else {
            env.private_address()?
        };
        units.insert(local, address);

        for rid in sorted_ids(env.relation_ids("cluster")?) {
            for unit in sorted_ids(env.related_units(&rid)?) {
                let addr = env.relation_get(&rid, &unit, "private-address")?;
                units.insert(normalize_unit_name(&unit), addr);
            }
        }
        Ok(units)
    }

    /// Compute the full map without the enablement write.
    pub fn preview(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let units = self.cluster_units(env)?;
        let mut map = ContextMap::new();
        map.insert("units", units.into_value());
        map.insert(
            "service_ports",
            json!({
                "dash_insecure": [80, 70],
                "dash_secure": [443, 433],
            }),
        );
        Ok(map)
    }

    /// Force the balancer service enabled. The write happens on every
    /// build, even when nothing else changed.
    fn ensure_enabled(&self) -> Result<(), AppError> {
        let target = self.paths.haproxy_defaults();
        info!(path = %target.display(), "ensuring haproxy enabled");
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, "ENABLED=1\n")?;
        Ok(())
    }
}

impl ContextSource for HaProxyContext {
    fn name(&self) -> &'static str {
        "haproxy"
    }

    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        // An address failure must leave the enablement file untouched.
        let map = self.preview(env)?;
        self.ensure_enabled()?;
        Ok(map)
    }
}

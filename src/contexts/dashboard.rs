//! Dashboard application settings derived from charm options.

use serde_json::Value;

use crate::domain::{AppError, ContextMap, generate_password, non_empty_string, truthy};
use crate::ports::HookEnv;

use super::ContextSource;

/// Pure option-to-settings mapping. Boolean options follow the charm
/// convention of `"yes"`/`true`; free-form options pass through verbatim so
/// the template sees exactly what the operator set (or null when unset).
pub struct DashboardContext;

impl ContextSource for DashboardContext {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let mut map = ContextMap::new();

        map.insert("compress_offline", truthy(env.config("offline-compression")?.as_ref()));
        map.insert("debug", truthy(env.config("debug")?.as_ref()));
        map.insert("ubuntu_theme", truthy(env.config("ubuntu-theme")?.as_ref()));

        map.insert("default_role", env.config("default-role")?);
        map.insert("webroot", env.config("webroot")?);

        let secret = match non_empty_string(env.config("secret")?.as_ref()) {
            Some(secret) => secret,
            None => generate_password(),
        };
        map.insert("secret", secret);

        let profile = non_empty_string(env.config("profile")?.as_ref());
        map.insert(
            "support_profile",
            match profile.as_deref() {
                Some("cisco") => Value::from("cisco"),
                _ => Value::Null,
            },
        );

        map.insert("neutron_network_lb", env.config("neutron-network-lb")?);
        map.insert("neutron_network_firewall", env.config("neutron-network-firewall")?);
        map.insert("neutron_network_vpn", env.config("neutron-network-vpn")?);

        Ok(map)
    }
}

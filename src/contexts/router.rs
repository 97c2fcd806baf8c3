//! Router tab visibility.

use crate::domain::{AppError, ContextMap, non_empty_string};
use crate::ports::HookEnv;

use super::ContextSource;

/// The router tab stays hidden except under the `cisco` profile, whose
/// plugin provides the backing service.
pub struct RouterSettingContext;

impl ContextSource for RouterSettingContext {
    fn name(&self) -> &'static str {
        "router-settings"
    }

    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let profile = non_empty_string(env.config("profile")?.as_ref());
        let mut map = ContextMap::new();
        map.insert("disable_router", profile.as_deref() != Some("cisco"));
        Ok(map)
    }
}

//! Context builders, one per configuration domain.
//!
//! Each builder turns orchestrator state into a [`ContextMap`] for the
//! template renderer. Builders are independent: none consumes another's
//! output, and each is rebuilt from scratch on every hook invocation. Two of
//! them (`HaProxyContext`, `WebServerSslContext`) also carry a filesystem
//! side effect, kept on a separate method so the maps stay computable
//! without touching disk.

mod dashboard;
mod haproxy;
mod identity;
mod router;
mod web_server;

pub use dashboard::DashboardContext;
pub use haproxy::HaProxyContext;
pub use identity::IdentityServiceContext;
pub use router::RouterSettingContext;
pub use web_server::{WebServerContext, WebServerSslContext};

use crate::domain::{AppError, ContextMap};
use crate::ports::HookEnv;

/// A named producer of one configuration domain's context map.
pub trait ContextSource {
    fn name(&self) -> &'static str;

    /// Assemble the context, applying the builder's side effects where it
    /// has any.
    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError>;
}

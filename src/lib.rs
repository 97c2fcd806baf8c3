//! dashboard-agent: render the managed configuration of the charm-deployed
//! web dashboard service from orchestrator state.
//!
//! The orchestration agent invokes the binary on hook events. Each run reads
//! operator options, peer membership, and identity-service relation data
//! through the [`ports::HookEnv`] provider, assembles one context map per
//! configuration domain, and renders the haproxy/apache/dashboard
//! configuration files from embedded templates. Context maps are built fresh
//! on every invocation and never cached.

pub mod app;
pub mod contexts;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;
use app::commands::{contexts as contexts_cmd, render as render_cmd};
use domain::AgentPaths;
use services::{RenderedFile, ToolHookEnv};

pub use domain::AppError;

/// Assemble all contexts, apply their side effects, and write the managed
/// configuration files under `root`. `only` restricts the run to a single
/// target by file name (e.g. `haproxy.cfg`).
pub fn render(root: &Path, only: Option<&str>) -> Result<Vec<RenderedFile>, AppError> {
    let ctx = agent_context(root);
    render_cmd::execute(&ctx, only)
}

/// Compute every context map without touching the filesystem and return the
/// combined report as pretty-printed JSON.
pub fn context_report(root: &Path) -> Result<String, AppError> {
    let ctx = agent_context(root);
    contexts_cmd::execute(&ctx)
}

fn agent_context(root: &Path) -> AppContext<ToolHookEnv> {
    let paths = AgentPaths::new(root);
    let env = ToolHookEnv::new().with_ipv6_table(paths.ipv6_table());
    AppContext::new(env, paths)
}

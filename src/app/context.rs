use crate::domain::AgentPaths;
use crate::ports::HookEnv;

/// Application context holding dependencies for command execution.
pub struct AppContext<E: HookEnv> {
    env: E,
    paths: AgentPaths,
}

impl<E: HookEnv> AppContext<E> {
    /// Create a new application context.
    pub fn new(env: E, paths: AgentPaths) -> Self {
        Self { env, paths }
    }

    /// Get a reference to the hook environment.
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Get a reference to the filesystem layout.
    pub fn paths(&self) -> &AgentPaths {
        &self.paths
    }
}

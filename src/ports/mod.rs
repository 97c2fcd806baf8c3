mod hook_env;

pub use hook_env::HookEnv;

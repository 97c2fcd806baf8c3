mod fake_hook_env;

pub use fake_hook_env::FakeHookEnv;

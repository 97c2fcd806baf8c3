mod hook_tools;
mod net;
mod renderer;

pub use hook_tools::ToolHookEnv;
pub use renderer::{ConfigRenderer, RenderedFile};

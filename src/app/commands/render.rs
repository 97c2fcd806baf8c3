use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::HookEnv;
use crate::services::{ConfigRenderer, RenderedFile};

/// Render the managed configuration files, applying the builders' side
/// effects (haproxy enablement, certificate installation) along the way.
pub fn execute<E: HookEnv>(
    ctx: &AppContext<E>,
    only: Option<&str>,
) -> Result<Vec<RenderedFile>, AppError> {
    let renderer = ConfigRenderer::new()?;
    renderer.render(ctx.env(), ctx.paths(), only)
}

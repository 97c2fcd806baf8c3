use serde_json::Value;

use crate::app::AppContext;
use crate::contexts::{
    ContextSource, DashboardContext, HaProxyContext, IdentityServiceContext,
    RouterSettingContext, WebServerContext, WebServerSslContext,
};
use crate::domain::AppError;
use crate::ports::HookEnv;

/// Assemble every context map without writing anything, and return the
/// combined report as pretty-printed JSON, keyed by builder name. The two
/// side-effecting builders contribute their preview.
pub fn execute<E: HookEnv>(ctx: &AppContext<E>) -> Result<String, AppError> {
    let mut report = serde_json::Map::new();

    let haproxy = HaProxyContext::new(ctx.paths().clone());
    report.insert(haproxy.name().to_string(), haproxy.preview(ctx.env())?.into_value());

    let ssl = WebServerSslContext::new(ctx.paths().clone());
    report.insert(ssl.name().to_string(), ssl.preview(ctx.env())?.into_value());

    for source in [
        &IdentityServiceContext as &dyn ContextSource,
        &DashboardContext,
        &WebServerContext,
        &RouterSettingContext,
    ] {
        report.insert(source.name().to_string(), source.build(ctx.env())?.into_value());
    }

    Ok(format!("{:#}", Value::Object(report)))
}

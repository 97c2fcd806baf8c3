//! Template rendering for the managed configuration files.

use std::fs;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use minijinja::Environment;
use tracing::{debug, info};

use crate::contexts::{
    ContextSource, DashboardContext, HaProxyContext, IdentityServiceContext,
    RouterSettingContext, WebServerContext, WebServerSslContext,
};
use crate::domain::{AgentPaths, AppError, ContextMap};
use crate::ports::HookEnv;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// One managed file: which template produces it, where it lands, and how
/// its context is assembled.
struct Target {
    template: &'static str,
    destination: fn(&AgentPaths) -> PathBuf,
    context: fn(&dyn HookEnv, &AgentPaths) -> Result<ContextMap, AppError>,
}

impl Target {
    /// Targets are addressed by the template name minus its `.j2` suffix.
    fn name(&self) -> &'static str {
        self.template.strip_suffix(".j2").unwrap_or(self.template)
    }
}

const TARGETS: [Target; 4] = [
    Target {
        template: "haproxy.cfg.j2",
        destination: AgentPaths::haproxy_config,
        context: haproxy_context,
    },
    Target {
        template: "ports.conf.j2",
        destination: AgentPaths::web_server_ports,
        context: ports_context,
    },
    Target {
        template: "dashboard.conf.j2",
        destination: AgentPaths::web_server_site,
        context: site_context,
    },
    Target {
        template: "local_settings.py.j2",
        destination: AgentPaths::dashboard_settings,
        context: settings_context,
    },
];

fn haproxy_context(env: &dyn HookEnv, paths: &AgentPaths) -> Result<ContextMap, AppError> {
    HaProxyContext::new(paths.clone()).build(env)
}

fn ports_context(env: &dyn HookEnv, _paths: &AgentPaths) -> Result<ContextMap, AppError> {
    WebServerContext.build(env)
}

fn site_context(env: &dyn HookEnv, paths: &AgentPaths) -> Result<ContextMap, AppError> {
    let mut map = WebServerContext.build(env)?;
    map.merge(WebServerSslContext::new(paths.clone()).build(env)?);
    Ok(map)
}

fn settings_context(env: &dyn HookEnv, _paths: &AgentPaths) -> Result<ContextMap, AppError> {
    let mut map = DashboardContext.build(env)?;
    map.merge(IdentityServiceContext.build(env)?);
    map.merge(RouterSettingContext.build(env)?);
    Ok(map)
}

/// The outcome of one target: where it was written and whether the content
/// differed from what was already on disk.
#[derive(Debug)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub changed: bool,
}

pub struct ConfigRenderer {
    templates: Environment<'static>,
}

impl ConfigRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        for file in TEMPLATE_DIR.files() {
            let (Some(name), Some(source)) = (file.path().to_str(), file.contents_utf8()) else {
                continue;
            };
            env.add_template(name, source).map_err(|e| AppError::Render {
                template: name.to_string(),
                details: e.to_string(),
            })?;
        }
        Ok(Self { templates: env })
    }

    /// Render every managed file, or just the named one. Contexts are built
    /// per target, so a failure in one context stops the run before later
    /// targets are touched.
    pub fn render(
        &self,
        env: &dyn HookEnv,
        paths: &AgentPaths,
        only: Option<&str>,
    ) -> Result<Vec<RenderedFile>, AppError> {
        let selected: Vec<&Target> = match only {
            Some(name) => {
                let target = TARGETS
                    .iter()
                    .find(|t| t.name() == name)
                    .ok_or_else(|| AppError::UnknownTarget {
                        name: name.to_string(),
                        available: Self::target_names().join(", "),
                    })?;
                vec![target]
            }
            None => TARGETS.iter().collect(),
        };

        selected
            .into_iter()
            .map(|target| self.render_target(target, env, paths))
            .collect()
    }

    pub fn target_names() -> Vec<&'static str> {
        TARGETS.iter().map(|t| t.name()).collect()
    }

    fn render_target(
        &self,
        target: &Target,
        env: &dyn HookEnv,
        paths: &AgentPaths,
    ) -> Result<RenderedFile, AppError> {
        let context = (target.context)(env, paths)?;
        debug!(target = target.name(), "context assembled");

        let template =
            self.templates
                .get_template(target.template)
                .map_err(|e| AppError::Render {
                    template: target.template.to_string(),
                    details: e.to_string(),
                })?;
        let rendered = template.render(&context).map_err(|e| AppError::Render {
            template: target.template.to_string(),
            details: e.to_string(),
        })?;

        let destination = (target.destination)(paths);
        let current = fs::read_to_string(&destination).ok();
        let changed = current.as_deref() != Some(rendered.as_str());
        if changed {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&destination, &rendered)?;
        }
        info!(path = %destination.display(), changed, "rendered {}", target.name());
        Ok(RenderedFile { path: destination, changed })
    }
}

//! `HookEnv` backed by the agent's hook tools.
//!
//! Every query shells out to the corresponding tool with `--format=json`
//! and decodes the reply. The tools are only on `PATH` while the agent runs
//! a hook, which is the only time this adapter is constructed.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::HookEnv;
use crate::services::net;

pub struct ToolHookEnv {
    /// Override directory for the hook tools; when unset they are resolved
    /// via `PATH` as usual.
    tool_dir: Option<PathBuf>,
    ipv6_table: PathBuf,
}

impl ToolHookEnv {
    pub fn new() -> Self {
        Self {
            tool_dir: None,
            ipv6_table: PathBuf::from("/proc/net/if_inet6"),
        }
    }

    pub fn with_ipv6_table(mut self, table: impl Into<PathBuf>) -> Self {
        self.ipv6_table = table.into();
        self
    }

    fn run_json(&self, tool: &str, args: &[&str]) -> Result<Value, AppError> {
        let program = match &self.tool_dir {
            Some(dir) => dir.join(tool),
            None => PathBuf::from(tool),
        };
        let mut command = Command::new(&program);
        command.args(args).arg("--format=json");

        let rendered = format!("{} {}", tool, args.join(" "));
        debug!(command = %rendered, "running hook tool");

        let output = command.output().map_err(|e| AppError::HookTool {
            command: rendered.clone(),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::HookTool {
                command: rendered,
                details: if stderr.is_empty() { "unknown error".to_string() } else { stderr },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(trimmed).map_err(|e| AppError::HookTool {
            command: rendered,
            details: format!("undecodable output: {e}"),
        })
    }

    fn string_list(&self, tool: &str, args: &[&str]) -> Result<Vec<String>, AppError> {
        let value = self.run_json(tool, args)?;
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect()),
            other => Err(AppError::HookTool {
                command: format!("{} {}", tool, args.join(" ")),
                details: format!("expected a list, got: {other}"),
            }),
        }
    }
}

impl Default for ToolHookEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl HookEnv for ToolHookEnv {
    fn config(&self, key: &str) -> Result<Option<Value>, AppError> {
        let value = self.run_json("config-get", &[key])?;
        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }

    fn relation_ids(&self, name: &str) -> Result<Vec<String>, AppError> {
        self.string_list("relation-ids", &[name])
    }

    fn related_units(&self, relation_id: &str) -> Result<Vec<String>, AppError> {
        self.string_list("relation-list", &["-r", relation_id])
    }

    fn relation_get(
        &self,
        relation_id: &str,
        unit: &str,
        key: &str,
    ) -> Result<Option<String>, AppError> {
        let value = self.run_json("relation-get", &["-r", relation_id, key, unit])?;
        Ok(match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
    }

    fn local_unit(&self) -> Result<String, AppError> {
        env::var("JUJU_UNIT_NAME")
            .map_err(|_| AppError::Environment("JUJU_UNIT_NAME is not set".to_string()))
    }

    fn private_address(&self) -> Result<String, AppError> {
        let value = self.run_json("unit-get", &["private-address"])?;
        match value {
            Value::String(s) if !s.is_empty() => Ok(s),
            other => Err(AppError::HookTool {
                command: "unit-get private-address".to_string(),
                details: format!("expected an address, got: {other}"),
            }),
        }
    }

    fn ipv6_addresses(&self, exclude: &[String]) -> Result<Vec<String>, AppError> {
        net::global_ipv6_addresses(&self.ipv6_table, exclude)
    }
}

//! Shared testing utilities for dashboard-agent CLI tests.
//!
//! Each `TestContext` fakes a complete hook environment: stub hook tools on
//! `PATH` answer from per-test state files, and the agent writes its managed
//! files under an isolated root.

use assert_cmd::Command;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub struct TestContext {
    base: TempDir,
    root: PathBuf,
    bin: PathBuf,
    state: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment with stubbed hook tools.
    pub fn new() -> Self {
        let base = TempDir::new().expect("Failed to create temp directory for tests");
        let root = base.path().join("root");
        let bin = base.path().join("bin");
        let state = base.path().join("state");
        for dir in [&root, &bin, &state] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        let ctx = Self { base, root, bin, state };
        ctx.install_tool(
            "config-get",
            &format!("cat \"{}/config/$1.json\" 2>/dev/null || echo null", ctx.state.display()),
        );
        ctx.install_tool(
            "relation-ids",
            &format!("cat \"{}/relations/$1.json\" 2>/dev/null || echo '[]'", ctx.state.display()),
        );
        ctx.install_tool(
            "relation-list",
            &format!("cat \"{}/units/$2.json\" 2>/dev/null || echo '[]'", ctx.state.display()),
        );
        ctx.install_tool(
            "relation-get",
            &format!("cat \"{}/data/$2/$4/$3.json\" 2>/dev/null || echo null", ctx.state.display()),
        );
        ctx.install_tool(
            "unit-get",
            &format!("cat \"{}/unit/$1.json\" 2>/dev/null || echo null", ctx.state.display()),
        );
        ctx.set_private_address("10.0.0.5");
        ctx
    }

    /// Root directory the agent renders into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a managed file under the test root.
    pub fn managed(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Build a command for the compiled binary with the stub tools first on
    /// `PATH` and the test root preselected.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("dashboard-agent").expect("Failed to locate dashboard-agent binary");
        let path = match env::var("PATH") {
            Ok(existing) => format!("{}:{existing}", self.bin.display()),
            Err(_) => self.bin.display().to_string(),
        };
        cmd.env("PATH", path)
            .env("JUJU_UNIT_NAME", "dashboard/0")
            .arg("--root")
            .arg(&self.root);
        cmd
    }

    /// Set a charm option the stub `config-get` will serve.
    pub fn set_config(&self, key: &str, value: &Value) {
        self.write_state(&format!("config/{key}.json"), value);
    }

    /// Set the address the stub `unit-get private-address` returns.
    pub fn set_private_address(&self, address: &str) {
        self.write_state("unit/private-address.json", &json!(address));
    }

    /// Register a relation id under a relation name.
    pub fn add_relation(&self, name: &str, relation_id: &str) {
        self.append_to_list(&format!("relations/{name}.json"), relation_id);
    }

    /// Register a remote unit on a relation id.
    pub fn add_relation_unit(&self, relation_id: &str, unit: &str) {
        self.append_to_list(&format!("units/{relation_id}.json"), unit);
    }

    /// Publish one key of a remote unit's relation data.
    pub fn set_relation_data(&self, relation_id: &str, unit: &str, key: &str, value: &str) {
        self.write_state(&format!("data/{relation_id}/{unit}/{key}.json"), &json!(value));
    }

    fn install_tool(&self, name: &str, body: &str) {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub tool executable");
    }

    fn write_state(&self, relative: &str, value: &Value) {
        let path = self.state.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create state directory");
        }
        fs::write(&path, value.to_string()).expect("Failed to write state file");
    }

    fn append_to_list(&self, relative: &str, entry: &str) {
        let path = self.state.join(relative);
        let mut list: Vec<String> = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).expect("Corrupt state list"),
            Err(_) => Vec::new(),
        };
        list.push(entry.to_string());
        self.write_state(relative, &json!(list));
    }
}

//! Shared testing utilities for tenant-manager CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PLUGINS_JSON: &str = r#"{
  "news": {"label": "News", "description": "Company news"},
  "booking": {"label": "Booking"},
  "loyalty": {"label": "Loyalty Points"}
}"#;

/// Valid store in the exact form `save_tenants` writes it.
pub const TENANTS_JSON: &str = r#"{
  "acme": {
    "id": "acme",
    "appName": "Acme",
    "packageName": "com.acme.app",
    "homeVariant": "member",
    "homeTabs": [],
    "enabledFeatures": [
      "news"
    ]
  },
  "globex": {
    "id": "globex",
    "companyInitial": "GX",
    "appName": "Globex",
    "packageName": "com.globex.member",
    "homeVariant": "dashboard",
    "enabledFeatures": []
  }
}"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment holding the default fixture files.
    pub fn seeded() -> Self {
        let ctx = Self::new();
        ctx.write("plugins.json", PLUGINS_JSON);
        ctx.write("tenants.json", TENANTS_JSON);
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("tenant-manager").expect("Failed to locate tenant-manager binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

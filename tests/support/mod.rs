use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway store and config directory for one test
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn store(&self) -> PathBuf {
        self.dir.path().join("networks")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get a Command for netpath wired to this environment's store
    pub fn netpath(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("netpath");
        cmd.current_dir(self.dir.path())
            .env("NETPATH_CONFIG_DIR", self.dir.path().join("config"))
            .env_remove("NETPATH_STORE")
            .env_remove("RUST_LOG")
            .env_remove("NETPATH_LOG")
            .arg("--store")
            .arg(self.store());
        cmd
    }

    /// Write `contents` to a file under the environment and return its path
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Save `network` JSON under `name` through the CLI
    #[allow(dead_code)]
    pub fn save(&self, name: &str, network: &str) {
        self.netpath()
            .args(["save", name])
            .write_stdin(network)
            .assert()
            .success();
    }
}

/// A, B, C with the direct A-C edge costlier than going through B
#[allow(dead_code)]
pub const TRIANGLE: &str = r#"{
    "nodes": ["A", "B", "C"],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "B", "to": "C", "weight": 2},
        {"from": "A", "to": "C", "weight": 5}
    ]
}"#;

/// Two components: A-B and C-D
#[allow(dead_code)]
pub const SPLIT: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B", "weight": 1},
        {"from": "C", "to": "D", "weight": 1}
    ]
}"#;

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

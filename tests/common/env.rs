//! Test environment for isolated legajo runs.
//!
//! Every `TestEnv` owns a temporary client root and a temporary home, so a
//! developer's own `~/.config/legajo/config.toml` never leaks into a test.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a legajo CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }
}

/// Environment variables that would change behavior if inherited
const SCRUBBED_ENV: &[&str] = &[
    "LEGAJO_LOG",
    "LEGAJO_OUTPUT_DIR",
    "LEGAJO_NOTIFY",
    "LEGAJO_RECIPIENTS",
    "LEGAJO_EXTENSIONS",
    "CI",
];

pub struct TestEnv {
    /// Directory holding one folder per client
    pub root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    legajo_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create client root"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            legajo_bin: PathBuf::from(env!("CARGO_BIN_EXE_legajo")),
        }
    }

    /// Create an empty file at `relative` (parent folders included)
    pub fn with_file(self, relative: &str) -> Self {
        self.write_file(relative, "");
        self
    }

    pub fn with_files(mut self, relatives: &[&str]) -> Self {
        for rel in relatives {
            self = self.with_file(rel);
        }
        self
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.root_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    pub fn root_path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root_str(&self) -> String {
        self.root.path().to_string_lossy().into_owned()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root_path(relative))
            .unwrap_or_else(|e| panic!("cannot read {}: {}", relative, e))
    }

    /// Run legajo from the client root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.legajo_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute legajo");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

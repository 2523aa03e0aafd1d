// Test utility module for fixture-calc integration tests
use std::path::Path;
use std::process::Command;

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl BinaryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run the binary in `dir` with a clean logging/config environment
pub fn run_binary_in(dir: &Path, args: &[&str]) -> BinaryResult {
    let output = Command::new(env!("CARGO_BIN_EXE_fixture-calc"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("FIXTURE_CALC_CONFIG")
        .output()
        .expect("Failed to execute fixture-calc");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run the binary in a fresh temp directory so no stray config is picked up
pub fn run_binary(args: &[&str]) -> BinaryResult {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    run_binary_in(temp_dir.path(), args)
}

// Helper to write a config file into a fresh directory
pub fn create_config_dir(content: &str) -> tempfile::TempDir {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join(fixture_calc::CONFIG_FILE_NAME), content)
        .expect("Failed to write config file");
    temp_dir
}

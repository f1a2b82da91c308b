//! Common test utilities shared across integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to a report under `tests/data`
pub fn data_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Run the meme-sites binary with colors disabled
pub fn run_meme_sites(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_meme-sites"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("MEME_SITES_LINE_WIDTH")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute meme-sites binary")
}

/// Run the binary with an extra environment variable set
pub fn run_meme_sites_with_env(args: &[&str], key: &str, value: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_meme-sites"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env(key, value)
        .output()
        .expect("Failed to execute meme-sites binary")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};

/// Config directory that never holds a config file
fn empty_config_dir() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("wgraph-no-config")
}

/// Get a Command for wgraph, isolated from any user config and log filter
pub fn wgraph() -> Command {
    wgraph_with_config_dir(&empty_config_dir())
}

/// Get a Command for wgraph that reads `config.toml` from `dir`
pub fn wgraph_with_config_dir(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wgraph");
    cmd.env("WGRAPH_CONFIG_DIR", dir)
        .env_remove("WGRAPH_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("WGRAPH_LOG");
    cmd
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be valid JSON")
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default manifest location, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "oss_license_detect_intermediate.json";

/// Root configuration structure, deserialized from `.oss-license-detect/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

/// Controls the directory walk.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Directory names that are never descended into (e.g. `".git"`).
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the manifest is written.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<scan_root>/.oss-license-detect/config.toml`
/// 3. `~/.config/oss-license-detect/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(scan_root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = scan_root.join(".oss-license-detect").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("oss-license-detect")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

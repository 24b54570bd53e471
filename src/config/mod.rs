pub mod init;
mod schema;

pub use init::{run_init, InitOutcome};
pub use schema::{Config, ThemeMode};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/fitcheck/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fitcheck"))
}

/// Get the default config file path (~/.config/fitcheck/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// A loaded config plus the file it came from (None when defaults were used).
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Question bank path with relative paths resolved against the config's directory
    pub fn bank_path(&self) -> Option<PathBuf> {
        let bank = self.config.bank.as_ref()?;
        if bank.is_absolute() {
            return Some(bank.clone());
        }
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) => Some(dir.join(bank)),
            None => Some(bank.clone()),
        }
    }
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/fitcheck/config.yaml) and falls back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<LoadedConfig> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(LoadedConfig {
            config: Config::default(),
            path: None,
        });
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");

    Ok(LoadedConfig {
        config,
        path: Some(config_path),
    })
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::FrameworkAggregation;

/// Colour scheme selection for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

/// Contents of `config.yaml`. Every field is optional.
///
/// Example YAML:
/// ```yaml
/// bank: bank.yaml
/// theme: dark
/// framework_aggregation: last_write
/// tick_rate_ms: 250
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Question bank file; relative paths resolve against the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default)]
    pub framework_aggregation: FrameworkAggregation,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank: None,
            theme: ThemeMode::Auto,
            framework_aggregation: FrameworkAggregation::LastWrite,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
bank: /tmp/bank.yaml
theme: light
framework_aggregation: mean
tick_rate_ms: 100
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.bank, Some(PathBuf::from("/tmp/bank.yaml")));
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.framework_aggregation, FrameworkAggregation::Mean);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("colour: red\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config {
            bank: Some(PathBuf::from("bank.yaml")),
            ..Config::default()
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{get_config_dir, Config};
use crate::bank::builtin_bank;

const BANK_FILE: &str = "bank.yaml";
const CONFIG_FILE: &str = "config.yaml";

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Write `contents` to `path` atomically, creating parent directories.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum InitOutcome {
    Written { config: PathBuf, bank: PathBuf },
    Aborted,
}

/// Write a starter config and an editable copy of the built-in bank.
///
/// The config goes to `config_path` (default ~/.config/fitcheck/config.yaml)
/// and `bank.yaml` lands beside it. Existing files are only replaced when
/// `force` is set or the user confirms.
pub fn run_init(config_path: Option<PathBuf>, force: bool) -> Result<InitOutcome> {
    let config_path = match config_path {
        Some(p) => p,
        None => get_config_dir()?.join(CONFIG_FILE),
    };
    let bank_path = config_path
        .parent()
        .map(|dir| dir.join(BANK_FILE))
        .unwrap_or_else(|| PathBuf::from(BANK_FILE));

    let existing: Vec<&PathBuf> = [&config_path, &bank_path]
        .into_iter()
        .filter(|p| p.exists())
        .collect();

    if !existing.is_empty() && !force {
        let names = existing
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if !prompt_yes_no(&format!("{} already exists. Overwrite?", names), false)? {
            println!("Aborted.");
            return Ok(InitOutcome::Aborted);
        }
    }

    let config = Config {
        bank: Some(PathBuf::from(BANK_FILE)),
        ..Config::default()
    };

    let config_yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
    let bank_yaml = serde_saphyr::to_string(&builtin_bank())
        .map_err(|e| anyhow::anyhow!("Failed to serialize question bank: {}", e))?;

    write_atomic(&bank_path, &bank_yaml)?;
    write_atomic(&config_path, &config_yaml)?;
    tracing::info!(config = %config_path.display(), bank = %bank_path.display(), "wrote starter files");

    Ok(InitOutcome::Written {
        config: config_path,
        bank: bank_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::bank::load_bank;

    #[test]
    fn test_init_writes_loadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run_init(Some(dir.path().join(CONFIG_FILE)), false).unwrap();
        let InitOutcome::Written { config, bank } = outcome else {
            panic!("expected files to be written");
        };

        let loaded = load_config(Some(config)).unwrap();
        assert_eq!(loaded.bank_path(), Some(bank.clone()));
        assert_eq!(load_bank(Some(&bank)).unwrap(), builtin_bank());
    }

    #[test]
    fn test_custom_config_name_keeps_bank_beside_it() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("nested").join("mine.yaml");
        let outcome = run_init(Some(custom.clone()), false).unwrap();
        assert_eq!(
            outcome,
            InitOutcome::Written {
                config: custom.clone(),
                bank: dir.path().join("nested").join(BANK_FILE),
            }
        );

        let loaded = load_config(Some(custom)).unwrap();
        assert_eq!(loaded.bank_path(), Some(dir.path().join("nested").join(BANK_FILE)));
    }

    #[test]
    fn test_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "theme: dark\n").unwrap();
        let outcome = run_init(Some(dir.path().join(CONFIG_FILE)), true).unwrap();
        assert!(matches!(outcome, InitOutcome::Written { .. }));
        let content = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(content.contains("bank.yaml"));
    }
}

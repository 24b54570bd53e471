use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::builtin::builtin_bank;
use super::types::QuestionBank;
use super::validation::validate_bank;

/// Errors that can occur while loading a question bank from disk.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read question bank at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in question bank {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("question bank {origin} has {} problem(s):\n  - {}", .errors.len(), .errors.join("\n  - "))]
    Invalid { origin: String, errors: Vec<String> },
}

/// Parse and validate a bank from YAML text. `origin` names the source in errors.
pub fn parse_bank(yaml: &str, origin: &Path) -> Result<QuestionBank, BankError> {
    let bank: QuestionBank = serde_saphyr::from_str(yaml).map_err(|e| BankError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;

    validate_bank(&bank).map_err(|errors| BankError::Invalid {
        origin: origin.display().to_string(),
        errors,
    })?;

    Ok(bank)
}

/// Load the question bank from `path`, or the built-in bank when `path` is None.
pub fn load_bank(path: Option<&Path>) -> Result<QuestionBank, BankError> {
    let Some(path) = path else {
        tracing::debug!("using built-in question bank");
        return Ok(builtin_bank());
    };

    let content = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let bank = parse_bank(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        sections = bank.sections.len(),
        questions = bank.total_questions(),
        "loaded question bank"
    );
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_path_returns_builtin() {
        let bank = load_bank(None).unwrap();
        assert_eq!(bank, builtin_bank());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_bank(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, BankError::Io { .. }));
    }

    #[test]
    fn test_builtin_survives_yaml_roundtrip() {
        let yaml = serde_saphyr::to_string(&builtin_bank()).unwrap();
        let bank = parse_bank(&yaml, Path::new("roundtrip.yaml")).unwrap();
        assert_eq!(bank, builtin_bank());
    }

    #[test]
    fn test_parse_minimal_bank() {
        let yaml = r#"
title: Rust?
tagline: Find out
sections:
  - title: Intro
    description: hello
    role: info
  - title: WISCAR
    description: dims
    role: framework
    questions:
      - id: w
        prompt: Hours per week?
        category: will
        options:
          - { id: lo, text: "few", value: 25 }
          - { id: hi, text: "many", value: 100 }
"#;
        let bank = parse_bank(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(bank.total_questions(), 1);
        assert!(bank.guidance.skills.is_empty());
    }

    #[test]
    fn test_invalid_bank_lists_problems() {
        let yaml = r#"
title: Broken
tagline: x
sections:
  - title: Tech
    description: d
    role: technical
    questions:
      - id: t
        prompt: p
        options: []
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        let err = load_bank(Some(file.path())).unwrap_err();
        match &err {
            BankError::Invalid { errors, .. } => assert_eq!(errors.len(), 1),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(err.to_string().contains("has no options"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let yaml = "title: a\ntagline: b\nsections: []\nbogus: 1\n";
        let err = parse_bank(yaml, Path::new("x.yaml")).unwrap_err();
        assert!(matches!(err, BankError::Parse { .. }));
    }
}

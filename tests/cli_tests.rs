//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run with HOME pointed at an empty directory so no real config leaks in.
fn fitcheck(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fitcheck").unwrap();
    cmd.env("HOME", home.path()).env_remove("FITCHECK_LOG");
    cmd
}

const PERFECT_ANSWERS: &[&str] = &[
    "psy_visual=e",
    "psy_detail=e",
    "psy_persist=e",
    "psy_learning=e",
    "psy_users=e",
    "tech_language=b",
    "tech_widget=a",
    "tech_state=b",
    "tech_logic=a",
    "tech_async=d",
    "wiscar_will=d",
    "wiscar_interest=d",
    "wiscar_skill=d",
    "wiscar_cognitive=d",
    "wiscar_ability=d",
    "wiscar_real_world=d",
];

#[test]
fn questions_lists_ids() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Should I Learn Flutter? (16 questions)"))
        .stdout(predicate::str::contains("tech_language"))
        .stdout(predicate::str::contains("wiscar_real_world"));
}

#[test]
fn score_partial_answers() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .args(["score", "--answer", "tech_language=b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict:"))
        .stdout(predicate::str::contains("NO"))
        .stdout(predicate::str::contains("1 of 16 questions answered"));
}

#[test]
fn score_perfect_answers() {
    let home = TempDir::new().unwrap();
    let mut cmd = fitcheck(&home);
    cmd.arg("score");
    for answer in PERFECT_ANSWERS {
        cmd.arg("--answer").arg(answer);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("YES"))
        .stdout(predicate::str::contains("confidence 100%"))
        .stdout(predicate::str::contains("16 of 16 questions answered"));
}

#[test]
fn score_unknown_question() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .args(["score", "--answer", "nope=a"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown question 'nope'"));
}

#[test]
fn score_unknown_option() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .args(["score", "--answer", "tech_language=z"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("valid: a, b, c, d"));
}

#[test]
fn score_malformed_answer() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .args(["score", "--answer", "tech_language"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expected QUESTION=OPTION"));
}

#[test]
fn missing_explicit_config() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .args(["--config", "does-not-exist.yaml", "questions"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn invalid_bank_reports_every_problem() {
    let home = TempDir::new().unwrap();
    let bank = home.path().join("bank.yaml");
    std::fs::write(
        &bank,
        r#"title: Broken
tagline: ""
sections:
  - title: Only
    description: ""
    role: framework
    questions:
      - id: q1
        prompt: Pick
        options:
          - id: a
            text: A
            value: 150
"#,
    )
    .unwrap();

    fitcheck(&home)
        .arg("--bank")
        .arg(&bank)
        .arg("questions")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Question bank error"))
        .stderr(predicate::str::contains("150 is outside 0-100"))
        .stderr(predicate::str::contains("framework question 'q1' needs a category"));
}

#[test]
fn unparseable_bank() {
    let home = TempDir::new().unwrap();
    let bank = home.path().join("bank.yaml");
    std::fs::write(&bank, "title: [unclosed").unwrap();

    fitcheck(&home)
        .arg("--bank")
        .arg(&bank)
        .arg("questions")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid YAML"));
}

#[test]
fn init_then_use_written_files() {
    let home = TempDir::new().unwrap();

    fitcheck(&home)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"))
        .stdout(predicate::str::contains("bank.yaml"));

    let config_dir = home.path().join(".config").join("fitcheck");
    assert!(config_dir.join("config.yaml").exists());
    assert!(config_dir.join("bank.yaml").exists());

    // The default config now points at the written bank
    fitcheck(&home)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("tech_language"));
}

#[test]
fn init_honours_config_flag() {
    let home = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let config = target.path().join("custom.yaml");

    fitcheck(&home)
        .arg("--config")
        .arg(&config)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.yaml"));

    assert!(config.exists());
    assert!(target.path().join("bank.yaml").exists());
    assert!(!home.path().join(".config").join("fitcheck").exists());

    fitcheck(&home)
        .arg("--config")
        .arg(&config)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("tech_language"));
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    fitcheck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("score"))
        .stdout(predicate::str::contains("questions"))
        .stdout(predicate::str::contains("init"));
}

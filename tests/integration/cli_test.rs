//! CLI binary tests

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command for the a2h binary with an isolated home and config file.
fn a2h(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("a2h").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("A2H_LOG")
        .arg("--config")
        .arg(home.join("none.toml"));
    cmd
}

#[test]
fn converts_stdin() {
    let home = TempDir::new().unwrap();
    a2h(home.path())
        .write_stdin("\x1b[1;31mHELLO\x1b[0m\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<div class=\"l\"><span style=\"font-weight:bold;color:#ff5555;\">HELLO</span></div>",
        ))
        .stdout(predicate::str::contains("<!-- 1 rows -->"));
}

#[test]
fn title_is_escaped() {
    let home = TempDir::new().unwrap();
    a2h(home.path())
        .args(["--title", "a & b"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>a &amp; b</title>"));
}

#[test]
fn invalid_gamma_fails() {
    let home = TempDir::new().unwrap();
    a2h(home.path())
        .args(["--gamma", "0"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gamma"));
}

#[test]
fn missing_file_is_reported_and_skipped() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.log");
    a2h(home.path())
        .arg(&missing)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unable to open"))
        .stdout(predicate::str::contains("<!-- 0 rows -->"));
}

#[test]
fn output_flag_writes_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("in.log");
    let output = home.path().join("out.html");
    std::fs::write(&input, "one\ntwo\n").unwrap();

    a2h(home.path())
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<div class=\"l\">two</div>"));
    assert!(html.contains("<!-- 2 rows -->"));
}

#[test]
fn config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[document]\ntitle = \"From config\"\n").unwrap();

    Command::cargo_bin("a2h")
        .unwrap()
        .env("HOME", home.path())
        .arg("--config")
        .arg(&config)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>From config</title>"));
}

#[test]
fn completions_bash() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("a2h")
        .unwrap()
        .env("HOME", home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a2h"));
}

#[test]
fn config_show_prints_toml() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("a2h")
        .unwrap()
        .env("HOME", home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[render]"))
        .stdout(predicate::str::contains("gamma = 1.0"));
}

#[test]
fn config_init_writes_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("cfg").join("config.toml");
    Command::cargo_bin("a2h")
        .unwrap()
        .env("HOME", home.path())
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());
}

#[test]
fn help_mentions_options() {
    Command::cargo_bin("a2h")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bg-color"))
        .stdout(predicate::str::contains("--no-convert-controls"));
}

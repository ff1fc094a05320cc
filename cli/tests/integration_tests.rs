use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn cmdin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmdin"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdin")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Catalog with a `greet` command and an input-free `version` command.
fn write_catalog(dir: &Path) -> PathBuf {
    let yaml = r#"commands:
  greet:
    arguments:
      - name: who
        type: string
      - name: count
        type: int
    options:
      - name: lang
        type: string
    flags:
      - loud
  version: {}
"#;
    let path = dir.join("commands.yaml");
    fs::write(&path, yaml).expect("failed to write catalog");
    path
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_prints_validated_input_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = cmdin(&[
        "parse",
        "--catalog",
        catalog.to_str().unwrap(),
        "--",
        "greet",
        "world",
        "3",
        "--lang=en",
        "--loud",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["command"], "greet");
    assert_eq!(json["arguments"]["who"], "world");
    assert_eq!(json["arguments"]["count"], 3);
    assert_eq!(json["options"]["lang"], "en");
    assert_eq!(json["flags"], serde_json::json!(["loud"]));
}

#[test]
fn parse_splits_raw_line() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = cmdin(&[
        "parse",
        "--catalog",
        catalog.to_str().unwrap(),
        "--line",
        r"greet big\ world -7",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["arguments"]["who"], "big world");
    assert_eq!(json["arguments"]["count"], -7);
    assert_eq!(json["options"], serde_json::json!({}));
    assert_eq!(json["flags"], serde_json::json!([]));
}

#[test]
fn parse_reports_input_errors() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());
    let catalog = catalog.to_str().unwrap();

    let cases = [
        ("greet world", "Too few arguments given"),
        ("greet world 1 2", "Too many arguments given"),
        ("greet world one", "Entry 'count' with value 'one' does not match expected type 'Int'"),
        ("greet world 1 --quiet", "Flag 'quiet' is not defined"),
        ("deploy now", "Command 'deploy' not found"),
        ("", "Command name not given"),
    ];

    for (line, message) in cases {
        let output = cmdin(&["parse", "--catalog", catalog, "--line", line]);
        assert_eq!(output.status.code(), Some(1), "{line}");
        assert!(stdout(&output).is_empty(), "{line}");
        assert!(stderr(&output).contains(message), "{line}: {}", stderr(&output));
    }
}

#[test]
fn parse_command_without_input() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = cmdin(&["parse", "--catalog", catalog.to_str().unwrap(), "--", "version"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["command"], "version");
    assert_eq!(json["arguments"], serde_json::json!({}));
}

#[test]
fn parse_missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.yaml");

    let output = cmdin(&["parse", "--catalog", missing.to_str().unwrap(), "--", "version"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: Failed to load catalog"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_summarizes_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path());

    let output = cmdin(&["check", catalog.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("Validated 2 command definition(s)"));
    assert!(stdout.contains("greet: 2 argument(s), 1 option(s), 1 flag(s)"));
    assert!(stdout.contains("version: 0 argument(s), 0 option(s), 0 flag(s)"));
}

#[test]
fn check_rejects_duplicate_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commands.json");
    fs::write(&path, r#"{"commands": {"x": {"flags": ["f", "f"]}}}"#).unwrap();

    let output = cmdin(&["check", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("duplicate flag: f"));
}

// ---------------------------------------------------------------------------
// split
// ---------------------------------------------------------------------------

#[test]
fn split_prints_tokens() {
    let output = cmdin(&["split", r"cmd a\ b   --opt=x\ y --flag"]);
    assert!(output.status.success());

    let tokens: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tokens, ["cmd", "a b", "--opt=x y", "--flag"]);
}

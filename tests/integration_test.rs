//! CLI end-to-end tests over temporary directory trees

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn bin() -> Command {
    Command::cargo_bin("lines_counter").expect("binary builds")
}

fn build_tree(root: &Path) {
    fs::write(root.join("main.py"), "# comment\n\ndef f():\n    pass\n").unwrap();
    fs::write(root.join("app.js"), "// c\n/* block\nend */\nlet x = 1;\n").unwrap();
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub/util.py"), "x = 1\ny = 2\n").unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/dep.js"), "let y = 2;\n").unwrap();
}

#[test]
fn test_default_json_output() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let output = bin().arg(dir.path()).assert().success().get_output().clone();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["total_files"], 3);
    assert_eq!(value["summary"]["total_lines"], 4 + 4 + 2);
    // main.py: 1 comment, app.js: 3 comment lines
    assert_eq!(value["summary"]["comment_lines"], 4);
    assert_eq!(value["languages"]["Python"]["files"], 2);
    assert_eq!(value["languages"]["JavaScript"]["files"], 1);

    // node_modules は既定で除外
    let files = value["files"].as_array().unwrap();
    assert!(files.iter().all(|f| !f["path"].as_str().unwrap().contains("node_modules")));

    // files は相対パス順
    let paths: Vec<_> = files.iter().map(|f| f["path"].as_str().unwrap()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn test_no_recursive_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let output = bin()
        .arg(dir.path())
        .arg("--no-recursive")
        .assert()
        .success()
        .get_output()
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["total_files"], 2);
    let files = value["files"].as_array().unwrap();
    assert!(files.iter().all(|f| !f["path"].as_str().unwrap().contains('/')));
}

#[test]
fn test_extension_filter_normalizes_input() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    // ドット無し・大文字でも .py に正規化される
    let output = bin()
        .arg(dir.path())
        .args(["-e", "PY"])
        .assert()
        .success()
        .get_output()
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["summary"]["total_files"], 2);
    assert_eq!(value["languages"].as_object().unwrap().len(), 1);
    assert!(value["languages"].get("Python").is_some());
}

#[test]
fn test_exclude_pattern_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    let output = bin()
        .arg(dir.path())
        .args(["-x", "sub"])
        .assert()
        .success()
        .get_output()
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let files = value["files"].as_array().unwrap();
    assert!(files.iter().all(|f| !f["path"].as_str().unwrap().contains("sub")));
    // 既定の除外を置き換えたので node_modules は再び対象になる
    assert!(files.iter().any(|f| f["path"].as_str().unwrap().contains("node_modules")));
}

#[test]
fn test_output_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());
    let report_path = dir.path().join("report.json");

    let output = bin()
        .arg(dir.path().join("sub"))
        .arg("-o")
        .arg(&report_path)
        .arg("--pretty")
        .assert()
        .success()
        .get_output()
        .clone();

    let from_stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let from_file: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(from_stdout["summary"], from_file["summary"]);
    assert_eq!(from_stdout["languages"], from_file["languages"]);
    assert_eq!(
        from_stdout["files"].as_array().unwrap().len(),
        from_file["files"].as_array().unwrap().len()
    );
}

#[test]
fn test_table_format() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    bin()
        .arg(dir.path())
        .args(["--format", "table", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LINES COUNTER SUMMARY"))
        .stdout(predicate::str::contains("BREAKDOWN BY LANGUAGE:"))
        .stdout(predicate::str::contains("Python"))
        .stdout(predicate::str::contains("TOP 2 FILES BY LINES:"));
}

#[test]
fn test_no_supported_files_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();

    bin().arg(dir.path()).assert().code(1);
}

#[test]
fn test_missing_path_is_an_error() {
    bin()
        .arg("/no/such/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn test_verbose_writes_status_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    build_tree(dir.path());

    bin()
        .arg(dir.path())
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("[lines_counter] analyzing:"));
}

//! Integration tests for the CLI

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const MANIFEST: &str = "oss_license_detect_intermediate.json";

fn bin() -> Command {
    Command::cargo_bin("oss-license-detect").unwrap()
}

fn write_license(root: &Path, rel: &str, text: &str) {
    let dir = root.join(rel);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("LICENSE"), text).unwrap();
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_cli_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crawl LICENSE files"));
}

#[test]
fn test_cli_missing_path_fails() {
    let work = tempfile::tempdir().unwrap();
    bin()
        .current_dir(work.path())
        .arg(work.path().join("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    assert!(!work.path().join(MANIFEST).exists());
}

#[test]
fn test_cli_file_path_fails() {
    let work = tempfile::tempdir().unwrap();
    let file = work.path().join("plain.txt");
    std::fs::write(&file, "hello").unwrap();

    bin()
        .current_dir(work.path())
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_cli_empty_directory_writes_empty_manifest() {
    let work = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();

    bin()
        .current_dir(work.path())
        .arg(root.path())
        .arg("--quiet")
        .assert()
        .success();

    let manifest = read_json(&work.path().join(MANIFEST));
    assert_eq!(manifest["total_libraries"], 0);
    assert_eq!(manifest["library_object_list"], serde_json::json!([]));
    assert_eq!(manifest["library_paths"], serde_json::json!([]));
}

#[test]
fn test_cli_scan_writes_manifest() {
    let work = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_license(
        root.path(),
        "jane",
        "MIT License\n\nCopyright (c) 2023 Jane Doe\n\nPermission is hereby granted...",
    );
    write_license(
        root.path(),
        "nested/acme",
        "Copyright © 2021 Acme Corp. All rights reserved.",
    );

    bin()
        .current_dir(work.path())
        .arg(root.path())
        .args(["--report", "none"])
        .assert()
        .success();

    let manifest = read_json(&work.path().join(MANIFEST));
    assert_eq!(manifest["total_libraries"], 2);

    let list = manifest["library_object_list"].as_array().unwrap();
    let paths = manifest["library_paths"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(paths.len(), 2);

    assert_eq!(list[0]["oss_type"], "MIT");
    assert_eq!(list[0]["author"], "Jane Doe");
    assert_eq!(list[0]["year"], 2023);
    assert!(paths[0].as_str().unwrap().ends_with("jane"));

    assert_eq!(list[1]["oss_type"], "Other");
    assert_eq!(list[1]["author"], "Acme Corp.");
    assert_eq!(list[1]["year"], 2021);
    assert_eq!(
        list[1]["raw_license_text"],
        "Copyright © 2021 Acme Corp. All rights reserved."
    );
    assert!(paths[1].as_str().unwrap().ends_with("acme"));
}

#[test]
fn test_cli_json_report_and_output_flag() {
    let work = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_license(root.path(), "lib", "ISC License\nCopyright 2019 Widget Co");
    let output = work.path().join("custom.json");

    let assert = bin()
        .current_dir(work.path())
        .arg(root.path())
        .args(["--report", "json", "--output"])
        .arg(&output)
        .assert()
        .success();

    let stdout: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(stdout["library_object_list"][0]["oss_type"], "ISC");
    assert_eq!(read_json(&output), stdout);
    assert!(!work.path().join(MANIFEST).exists());
}

#[test]
fn test_cli_config_exclude_and_output() {
    let work = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_license(root.path(), "keep", "MIT License");
    write_license(root.path(), "node_modules/dropped", "MIT License");

    let config = work.path().join("config.toml");
    std::fs::write(
        &config,
        "[scan]\nexclude = [\"node_modules\"]\n[output]\npath = \"from-config.json\"\n",
    )
    .unwrap();

    bin()
        .current_dir(work.path())
        .arg(root.path())
        .arg("--config")
        .arg(&config)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-config.json"));

    let manifest = read_json(&work.path().join("from-config.json"));
    assert_eq!(manifest["total_libraries"], 1);
}

#[test]
fn test_cli_list_rules() {
    bin()
        .arg("--list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("BSD 3-Clause"))
        .stdout(predicate::str::contains("otherwise next rule"))
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn test_cli_verbose_lists_license_paths() {
    let work = tempfile::tempdir().unwrap();
    let root = tempfile::tempdir().unwrap();
    write_license(root.path(), "lib", "MIT License");

    bin()
        .current_dir(work.path())
        .arg(root.path())
        .args(["--verbose", "--report", "none"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Crawling directory:"))
        .stderr(predicate::str::contains("Full LICENSE path:"))
        .stderr(predicate::str::contains("License detection completed successfully!"));
}

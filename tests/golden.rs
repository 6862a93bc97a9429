//! Golden tests for fa-workflow
//!
//! These tests pin the exact bytes the launcher receives and the full icon listing.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fa_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fa-workflow").expect("Failed to find fa-workflow binary");
    cmd.env_remove("FA_FORMAT")
        .env_remove("FA_ICON_DIR")
        .env_remove("FA_TIMESTAMP");
    cmd
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).expect("fixture exists")
}

#[test]
fn golden_filter_bookmark() {
    let expected = read_fixture("filter_bookmark.xml");

    fa_cmd()
        .args(["filter", "bookmark", "--timestamp", "1413000000"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn golden_full_icon_listing() {
    let expected: Vec<String> = read_fixture("icon_ids.txt")
        .lines()
        .map(str::to_string)
        .collect();

    let assert = fa_cmd()
        .args(["--format", "json", "filter", "--timestamp", "0"])
        .assert()
        .success();
    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let titles: Vec<String> = value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(titles, expected);
}

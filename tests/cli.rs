use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const FROZEN: &str = "1413000000";

fn fa_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fa-workflow").expect("Failed to find fa-workflow binary");
    cmd.env_remove("FA_FORMAT")
        .env_remove("FA_ICON_DIR")
        .env_remove("FA_TIMESTAMP")
        .env_remove("RUST_LOG");
    cmd
}

/// Pull `(arg, uid)` pairs out of an XML feedback document
fn item_attrs(xml: &str) -> Vec<(String, String)> {
    xml.split("<item ")
        .skip(1)
        .map(|chunk| {
            let attr = |name: &str| {
                let start = chunk.find(&format!("{}=\"", name)).unwrap() + name.len() + 2;
                let end = start + chunk[start..].find('"').unwrap();
                chunk[start..end].to_string()
            };
            (attr("arg"), attr("uid"))
        })
        .collect()
}

#[test]
fn filter_single_keyword() {
    let assert = fa_cmd()
        .args(["filter", "hdd", "--timestamp", FROZEN])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert_eq!(
        item_attrs(&stdout),
        vec![("hdd-o|||f0a0".to_string(), "1413000000-hdd-o".to_string())]
    );
}

#[test]
fn filter_keyword_order_is_irrelevant() {
    let run = |keywords: [&str; 2]| {
        let assert = fa_cmd()
            .arg("filter")
            .args(keywords)
            .args(["--timestamp", FROZEN])
            .assert()
            .success();
        String::from_utf8_lossy(&assert.get_output().stdout).to_string()
    };

    let forward = run(["left", "arr"]);
    let reverse = run(["arr", "left"]);
    assert_eq!(forward, reverse);

    let args: Vec<_> = item_attrs(&forward).into_iter().map(|(arg, _)| arg).collect();
    assert_eq!(
        args,
        vec![
            "arrow-circle-left|||f0a8",
            "arrow-circle-o-left|||f190",
            "arrow-left|||f060",
            "long-arrow-left|||f177",
        ]
    );
}

#[test]
fn filter_accepts_one_quoted_query() {
    let assert = fa_cmd()
        .args(["filter", "left arr", "--timestamp", FROZEN])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(item_attrs(&stdout).len(), 4);
}

#[test]
fn filter_without_keywords_lists_everything() {
    let assert = fa_cmd().arg("filter").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let items = item_attrs(&stdout);
    assert_eq!(items.len(), 549);
    assert_eq!(items.first().unwrap().0, "adjust|||f042");
    assert_eq!(items.last().unwrap().0, "youtube-square|||f166");
}

#[test]
fn filter_no_match_is_empty_document() {
    fa_cmd()
        .args(["filter", "icons", "--timestamp", FROZEN])
        .assert()
        .success()
        .stdout("<?xml version=\"1.0\"?><items></items>\n");
}

#[test]
fn filter_uses_wall_clock_by_default() {
    let assert = fa_cmd().args(["filter", "apple"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let (_, uid) = item_attrs(&stdout).remove(0);
    let (secs, id) = uid.split_once('-').unwrap();
    assert_eq!(id, "apple");
    assert!(secs.parse::<i64>().unwrap() > 1_388_534_400);
}

#[test]
fn filter_json_format() {
    let assert = fa_cmd()
        .args(["--format", "json", "filter", "apple", "--timestamp", FROZEN])
        .assert()
        .success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["uid"], "1413000000-apple");
    assert_eq!(items[0]["title"], "apple");
    assert_eq!(items[0]["subtitle"], "Paste class name: fa-apple");
    assert_eq!(items[0]["arg"], "apple|||f179");
    assert_eq!(items[0]["icon"]["path"], "./icons/fa-apple.png");
}

#[test]
fn filter_icon_dir_from_env() {
    fa_cmd()
        .env("FA_ICON_DIR", "assets")
        .args(["filter", "apple", "--timestamp", FROZEN])
        .assert()
        .success()
        .stdout(predicate::str::contains("<icon>assets/fa-apple.png</icon>"));
}

#[test]
fn filter_timestamp_from_env() {
    fa_cmd()
        .env("FA_TIMESTAMP", "7")
        .args(["filter", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uid=\"7-apple\""));
}

#[test]
fn class_prints_css_class_name() {
    fa_cmd()
        .args(["class", "adjust|||f042"])
        .assert()
        .success()
        .stdout("fa-adjust");
}

#[test]
fn url_prints_documentation_url() {
    fa_cmd()
        .args(["url", "adjust|||f042"])
        .assert()
        .success()
        .stdout("http://fontawesome.io/icon/adjust/");
}

#[test]
fn char_prints_glyph_or_nothing() {
    fa_cmd()
        .args(["char", "music|||f001"])
        .assert()
        .success()
        .stdout("\u{f001}");

    fa_cmd()
        .args(["char", "android|||f17b"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn action_rejects_malformed_arg() {
    fa_cmd()
        .args(["class", "adjust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<id>|||<unicode>"));
}

#[test]
fn info_resolves_alias() {
    let assert = fa_cmd().args(["info", "star-half-empty"]).assert().success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["id"], "star-half-empty");
    assert_eq!(value["unicode"], "f123");
    assert_eq!(value["alias_of"], "star-half-o");
    assert_eq!(value["class_name"], "fa-star-half-empty");
}

#[test]
fn info_lists_aliases_of_canonical_icon() {
    let assert = fa_cmd().args(["info", "times"]).assert().success();
    let value: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(value["unicode"], "f00d");
    assert_eq!(value["aliases"], serde_json::json!(["remove", "close"]));
    assert!(value.get("alias_of").is_none());
}

#[test]
fn info_unknown_icon_fails() {
    fa_cmd()
        .args(["info", "awesome"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No icon named 'awesome'"));
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    fa_cmd()
        .args(["-v", "filter", "icons", "--timestamp", FROZEN])
        .assert()
        .success()
        .stdout("<?xml version=\"1.0\"?><items></items>\n")
        .stderr(predicate::str::contains("filtered catalog"));
}

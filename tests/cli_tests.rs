//! Integration tests running the chatroi binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary isolated from any config outside `dir`
fn chatroi(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatroi"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn estimate_json_uses_selected_tier() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(chatroi(dir.path()).args([
        "estimate",
        "--industry",
        "clinica_dental",
        "--tier",
        "basic",
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["industry"]["key"], "clinica_dental");
    assert_eq!(json["fees"]["setup_fee"], 15_000.0);
    assert_eq!(json["estimate"]["ai_setup_fee_monthly"], 1_250.0);
    assert!(json["errors"].as_object().unwrap().is_empty());
}

#[test]
fn estimate_overrides_go_through_validation() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(chatroi(dir.path()).args([
        "estimate",
        "--set",
        "avg_lead_value=1500,5",
        "--set",
        "conversion_rate=150",
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["inputs"]["avg_lead_value"], 1500.5);
    assert_eq!(json["inputs"]["conversion_rate"], 150.0);
    assert_eq!(json["errors"]["conversion_rate"]["kind"], "out_of_range");
}

#[test]
fn strict_mode_fails_on_invalid_input() {
    let dir = TempDir::new().unwrap();
    let assert = chatroi(dir.path())
        .args(["estimate", "--strict", "--plain", "--set", "human_hourly_wage=abc"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("human_hourly_wage"));
}

#[test]
fn strict_mode_ignores_automation_errors() {
    let dir = TempDir::new().unwrap();
    chatroi(dir.path())
        .args(["estimate", "--strict", "--plain", "--set", "automation_percentage=130"])
        .assert()
        .success();
}

#[test]
fn estimate_writes_markdown_file() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("out").join("report.md");
    chatroi(dir.path())
        .args(["estimate", "--format", "markdown", "--output"])
        .arg(&report)
        .assert()
        .success();

    let markdown = fs::read_to_string(&report).unwrap();
    assert!(markdown.starts_with("# Chat Automation ROI Estimate"));
    assert!(markdown.contains("## Key Takeaways"));
}

#[test]
fn config_file_sets_defaults_and_language() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".chatroi.toml"),
        "[defaults]\ntier = \"enterprise\"\ndays_open = \"weekdays\"\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let out = stdout_of(chatroi(dir.path()).arg("estimate"));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["tier"]["key"], "enterprise");
    assert_eq!(json["estimate"]["days_per_month"], 22.0);
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    chatroi(dir.path())
        .args(["estimate", "--config", "missing.toml"])
        .assert()
        .failure();
}

#[test]
fn payback_command_formats_months() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        stdout_of(chatroi(dir.path()).args(["payback", "13.5"])),
        "1 year 2 months\n"
    );
    assert_eq!(
        stdout_of(chatroi(dir.path()).args(["payback", "0", "--language", "es"])),
        "Inmediato\n"
    );
}

#[test]
fn tiers_lists_all_plans() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(chatroi(dir.path()).args(["tiers", "--format", "json"]));
    let json: Value = serde_json::from_str(&out).unwrap();
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|tier| tier["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["basic", "professional", "enterprise"]);
}

#[test]
fn industries_lists_eleven_profiles() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(chatroi(dir.path()).args(["industries", "--format", "json"]));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 11);
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    chatroi(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".chatroi.toml").exists());

    chatroi(dir.path()).arg("init").assert().failure();
    chatroi(dir.path()).args(["init", "--force"]).assert().success();
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ghostline_cmd() -> Command {
    Command::cargo_bin("ghostline").expect("binary exists")
}

const STROKE_SCRIPT: &str = r#"[
  {"kind": "down", "x": 10, "y": 10},
  {"kind": "move", "x": 50, "y": 60},
  {"kind": "move", "x": 90, "y": 120},
  {"kind": "up"}
]"#;

#[test]
fn ghostline_help_prints_usage() {
    ghostline_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "disappearing-ink stroke surface",
        ));
}

#[test]
fn replay_prints_signals_and_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("stroke.json");
    let config = temp.path().join("config.toml");
    let out = temp.path().join("bitmap.png");
    std::fs::write(&script, STROKE_SCRIPT).unwrap();
    std::fs::write(&config, "color = \"red\"\nstroke_width = 8.0").unwrap();

    ghostline_cmd()
        .args(["--script", script.to_str().unwrap()])
        .args(["--config", config.to_str().unwrap()])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("stroke-started"))
        .stdout(predicate::str::contains("stroke-extended"))
        .stdout(predicate::str::contains("stroke-ended"))
        .stdout(predicate::str::contains("\"color\":\"red\""));

    let png = std::fs::read(&out).unwrap();
    assert!(png.starts_with(b"\x89PNG"), "export is a PNG file");
}

#[test]
fn replay_payload_carries_the_recorded_points() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("stroke.json");
    let config = temp.path().join("config.toml");
    std::fs::write(&script, STROKE_SCRIPT).unwrap();
    std::fs::write(&config, "").unwrap();

    ghostline_cmd()
        .args(["--script", script.to_str().unwrap()])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        // The stroke-ended payload holds the down point plus both moves.
        .stdout(predicate::str::contains(
            r#"{"x":10.0,"y":10.0},{"x":50.0,"y":60.0},{"x":90.0,"y":120.0}"#,
        ));
}

#[test]
fn invalid_config_fails_with_descriptive_error() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("stroke.json");
    let config = temp.path().join("config.toml");
    std::fs::write(&script, STROKE_SCRIPT).unwrap();
    std::fs::write(&config, "stroke_width = -1.0").unwrap();

    ghostline_cmd()
        .args(["--script", script.to_str().unwrap()])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("stroke_width"));
}

#[test]
fn malformed_script_fails_with_its_path() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("broken.json");
    let config = temp.path().join("config.toml");
    std::fs::write(&script, "[{\"kind\": \"wiggle\"}]").unwrap();
    std::fs::write(&config, "").unwrap();

    ghostline_cmd()
        .args(["--script", script.to_str().unwrap()])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn script_is_required() {
    ghostline_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--script"));
}

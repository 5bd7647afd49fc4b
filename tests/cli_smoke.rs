use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

const COMPLETE_ANSWERS: &str = r#"[
  {"questionId": "B1", "value": 5},
  {"questionId": "B2", "value": [1, 2, 0, 3, 0]},
  {"questionId": "B3", "value": 0},
  {"questionId": "B4", "value": 1},
  {"questionId": "B5", "value": [1, 3]},
  {"questionId": "B6", "value": [3, 0, 2, 1, 0, 0, 0]},
  {"questionId": "B7", "value": 1},
  {"questionId": "B8", "value": 0},
  {"questionId": "B9", "value": [1, 2, 3, 0, 0, 0]},
  {"questionId": "B10", "value": 4}
]"#;

const PARTIAL_ANSWERS: &str = r#"{"answers": [{"questionId": "B1", "value": 4}]}"#;

fn outcome() -> Command {
    Command::new(env!("CARGO_BIN_EXE_outcome"))
}

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn score_writes_json_report() {
    let dir = tempdir().unwrap();
    let answers = write(dir.path(), "answers.json", COMPLETE_ANSWERS);
    let out = dir.path().join("report.json");

    let status = outcome()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--out")
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["answered"], 10);
    assert_eq!(report["result"]["overallScore"], 79);
    assert_eq!(report["result"]["subscalePercentages"]["R4"], "n/a");
    assert_eq!(report["result"]["archetype"]["name"], "Developing practitioner");
    assert_eq!(report["answersHash"].as_str().unwrap().len(), 64);
    assert!(!report["feedback"]["exercises"].as_array().unwrap().is_empty());
}

#[test]
fn score_is_deterministic() {
    let dir = tempdir().unwrap();
    let answers = write(dir.path(), "answers.json", COMPLETE_ANSWERS);

    let run = || {
        let output = outcome()
            .args(["score", "--format", "md", "--answers"])
            .arg(&answers)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(a, b);
    assert!(a.contains("- Overall score: 79"));
    assert!(a.contains("- R4 CARE tone: n/a"));
}

#[test]
fn strict_mode_rejects_partial_answers() {
    let dir = tempdir().unwrap();
    let answers = write(dir.path(), "partial.json", PARTIAL_ANSWERS);

    let lenient = outcome()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .output()
        .unwrap();
    assert!(lenient.status.success());

    let strict = outcome()
        .args(["score", "--strict", "--answers"])
        .arg(&answers)
        .output()
        .unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("Missing"), "{stderr}");
}

#[test]
fn score_skips_foreign_entries_in_a_catalog_export() {
    let dir = tempdir().unwrap();
    let answers = write(
        dir.path(),
        "export.json",
        r#"[
          {"questionId": "B1", "value": 5},
          {"questionId": "email", "value": "a@b.c"},
          {"questionId": "B3", "value": null}
        ]"#,
    );

    let output = outcome()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["answered"], 3);
    assert_eq!(report["result"]["overallScore"], 67);
}

#[test]
fn check_lists_issues() {
    let dir = tempdir().unwrap();
    let partial = write(dir.path(), "partial.json", PARTIAL_ANSWERS);
    let complete = write(dir.path(), "complete.json", COMPLETE_ANSWERS);

    let output = outcome()
        .args(["check", "--answers"])
        .arg(&partial)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("B2: no answer"));

    let output = outcome()
        .args(["check", "--answers"])
        .arg(&complete)
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn feedback_config_is_applied_and_validated() {
    let dir = tempdir().unwrap();
    let answers = write(dir.path(), "answers.json", COMPLETE_ANSWERS);
    let strict_bands = write(dir.path(), "fb.json", r#"{"strong_threshold": 95}"#);
    let broken = write(dir.path(), "bad.json", r#"{"moderate_threshold": 99}"#);

    let output = outcome()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--feedback-config")
        .arg(&strict_bands)
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["feedback"]["overall_band"], "moderate");

    let output = outcome()
        .arg("score")
        .arg("--answers")
        .arg(&answers)
        .arg("--feedback-config")
        .arg(&broken)
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn archetypes_and_questions_list_fixed_tables() {
    let output = outcome().arg("archetypes").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 12);
    assert!(stdout.lines().next().unwrap().contains("Cross-functional integrator"));

    let output = outcome().arg("questions").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.contains("R1=2.8 R2=1.2"));
}

#[test]
fn eval_is_deterministic_for_a_seed() {
    let dir = tempdir().unwrap();
    let run = |name: &str| {
        let out = dir.path().join(name);
        let status = outcome()
            .args(["eval", "--respondents", "200", "--seed", "7", "--out"])
            .arg(&out)
            .status()
            .unwrap();
        assert!(status.success());
        std::fs::read_to_string(out).unwrap()
    };

    let a = run("a.json");
    let b = run("b.json");
    assert_eq!(a, b);

    let summary: serde_json::Value = serde_json::from_str(&a).unwrap();
    assert_eq!(summary["respondents"], 200);
    let total: u64 = summary["archetype_counts"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 200);
}

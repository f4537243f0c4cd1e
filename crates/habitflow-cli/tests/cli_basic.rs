//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only
//! commands that operate on explicit input files are exercised here, so
//! the suite leaves the user's data directory untouched.

use std::io::Write;
use std::process::Command;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitflow-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn habits_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{
                "id": "1",
                "name": "Read",
                "category": "learning",
                "frequency": "daily",
                "streak": 2,
                "longestStreak": 6,
                "completedToday": true,
                "completedDates": ["2024-01-01", "2024-01-15"],
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-15T00:00:00Z"
            }},
            {{
                "id": "2",
                "name": "Run",
                "category": "health",
                "frequency": "weekly",
                "targetDays": [1, 3, 5],
                "streak": 0,
                "longestStreak": 3,
                "completedToday": false,
                "completedDates": [],
                "createdAt": "2024-01-10T00:00:00Z",
                "updatedAt": "2024-01-10T00:00:00Z"
            }}
        ]"#
    )
    .unwrap();
    file
}

#[test]
fn test_help() {
    let (_, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "help failed");
}

#[test]
fn test_habit_summary() {
    let file = habits_file();
    let (stdout, _, code) = run_cli(&["habit", "summary", "--file", file.path().to_str().unwrap()]);
    assert_eq!(code, 0, "habit summary failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_habits"], 2);
    assert_eq!(parsed["active_streak_count"], 1);
    assert_eq!(parsed["longest_streak_overall"], 6);
    assert_eq!(parsed["daily_completion_rate"], 50);
}

#[test]
fn test_habit_progress_for_month() {
    let file = habits_file();
    let (stdout, _, code) = run_cli(&[
        "habit",
        "progress",
        "--file",
        file.path().to_str().unwrap(),
        "--month",
        "2024-01",
    ]);
    assert_eq!(code, 0, "habit progress failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["monthly_progress"], 6);
    assert_eq!(parsed[1]["monthly_progress"], 0);
}

#[test]
fn test_habit_categories() {
    let file = habits_file();
    let (stdout, _, code) = run_cli(&[
        "habit",
        "categories",
        "--file",
        file.path().to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "habit categories failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["learning"]["total"], 1);
    assert_eq!(parsed["learning"]["completed_today"], 1);
    assert_eq!(parsed["health"]["completed_today"], 0);
}

#[test]
fn test_invalid_month_is_rejected() {
    let file = habits_file();
    let (_, stderr, code) = run_cli(&[
        "habit",
        "progress",
        "--file",
        file.path().to_str().unwrap(),
        "--month",
        "January",
    ]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid month"));
}

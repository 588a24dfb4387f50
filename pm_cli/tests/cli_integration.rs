//! Integration tests for the pm_cli binary.
//!
//! Runs the compiled binary against roster files on disk and checks its
//! reports and exit status.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const THIRTEEN: &str = "\
Abbott, Ann, Summit, A18
Baker, Ben, Harbor, A20
Cole, Cat, Summit, B17
Diaz, Dev, Summit, B19
Evans, Eli, Summit, B21
Ford, Fay, Summit, C18
Gale, Gus, Summit, C20
Hunt, Hal, Summit, C22
Ives, Ida, Summit, D19
Jonas, Jo, Summit, E20
Kent, Kim, Summit, U
Lowe, Lu, Summit, U
Moss, Max, Summit, U
";

/// Helper to write a roster to a temporary file
fn roster_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Helper to run the binary with a clean pool environment
fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pm_cli"))
        .args(args)
        .env_remove("POOL_SIZE_PAIRS")
        .env_remove("POOL_UNRATED_CLASS")
        .env_remove("POOL_OUTPUT_FORMAT")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_help_flag() {
        let output = run(&["--help"]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("USAGE:"));
        assert!(stdout.contains("POOL_SIZE_PAIRS"));
    }

    #[test]
    fn test_text_report_with_defaults() {
        let file = roster_file(THIRTEEN);
        let output = run(&[path_str(file.path())]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Line Count: 13, Competitor Count: 13, Pools: 1 x 6 + 1 x 7"));
        assert!(stdout.contains("--)------- Pool # 1 -------(-- (6)"));
        assert!(stdout.contains("--)------- Pool # 2 -------(-- (7)"));
        assert!(!stdout.contains("Unplaced"));
    }

    #[test]
    fn test_json_report_per_roster() {
        let first = roster_file(THIRTEEN);
        let second = roster_file("Solo, Sam, , A10\nDuo, Dee, , B10\nTrio, Tia, , C10\n");
        let output = run(&[
            "--format",
            "json",
            "--sizes",
            "3:4",
            path_str(first.path()),
            path_str(second.path()),
        ]);
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let reports: Vec<serde_json::Value> = stdout
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);

        // 13 = 3 + 3 + 3 + 4
        assert_eq!(reports[0]["pools"].as_array().unwrap().len(), 4);
        assert_eq!(reports[1]["pools"].as_array().unwrap().len(), 1);
        assert_eq!(reports[1]["pools"][0]["members"][0]["last"], "Solo");
    }

    #[test]
    fn test_format_from_environment() {
        let file = roster_file(THIRTEEN);
        let output = Command::new(env!("CARGO_BIN_EXE_pm_cli"))
            .arg(file.path())
            .env_remove("POOL_SIZE_PAIRS")
            .env("POOL_OUTPUT_FORMAT", "json")
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["plan"]["small_count"], 1);
        assert_eq!(report["plan"]["large_count"], 1);
    }

    #[test]
    fn test_missing_roster_fails_but_reports_others() {
        let file = roster_file(THIRTEEN);
        let output = run(&["/nonexistent/roster.csv", path_str(file.path())]);
        assert!(!output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        assert!(stdout.contains("Pool # 2"));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("/nonexistent/roster.csv"));
    }

    #[test]
    fn test_incompatible_count_fails() {
        let file = roster_file("Solo, Sam, , A10\nDuo, Dee, , B10\n");
        let output = run(&["--sizes", "3:4", path_str(file.path())]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_invalid_arguments_fail() {
        assert!(!run(&[]).status.success());

        let file = roster_file(THIRTEEN);
        assert!(!run(&["--format", "xml", path_str(file.path())]).status.success());
        assert!(!run(&["--sizes", "7:6", path_str(file.path())]).status.success());
    }
}

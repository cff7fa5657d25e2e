//! Integration tests for the linesplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `count` numbered lines to `dir/name`
fn numbered_file(dir: &Path, name: &str, count: usize) -> String {
    let content: String = (1..=count).map(|i| format!("line {i}\n")).collect();
    fs::write(dir.join(name), &content).unwrap();
    content
}

fn linesplit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("linesplit").unwrap();
    cmd.current_dir(dir).env_remove("LINESPLIT_CONFIG");
    cmd
}

fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn test_split_even_file() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "large_file.txt", 10_000);

    linesplit(temp_dir.path())
        .args(["large_file.txt", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 10000"))
        .stdout(predicate::str::contains("Splitting into 2 files, 5000 lines each"))
        .stdout(predicate::str::contains("Created file: large_file_part001.txt"))
        .stdout(predicate::str::contains("Progress: 5000/10000 (50.0%)"))
        .stdout(predicate::str::contains("Progress: 10000/10000 (100.0%)"))
        .stdout(predicate::str::contains("Split complete!"))
        .stdout(predicate::str::contains("Generated 2 files"))
        .stdout(predicate::str::contains("  large_file_part002.txt: 5000 lines"));

    assert_eq!(line_count(&temp_dir.path().join("large_file_part001.txt")), 5000);
    assert_eq!(line_count(&temp_dir.path().join("large_file_part002.txt")), 5000);
    assert!(!temp_dir.path().join("large_file_part003.txt").exists());
}

#[test]
fn test_split_uneven_file() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 12_345);

    linesplit(temp_dir.path())
        .args(["data.txt", "3000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Splitting into 5 files, 3000 lines each"))
        .stdout(predicate::str::contains("  data_part005.txt: 345 lines"));

    let counts: Vec<usize> = (1..=5)
        .map(|i| line_count(&temp_dir.path().join(format!("data_part{i:03}.txt"))))
        .collect();
    assert_eq!(counts, vec![3000, 3000, 3000, 3000, 345]);
}

#[test]
fn test_progress_is_reported_for_full_parts_only() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 12_345);

    let output = linesplit(temp_dir.path())
        .args(["data.txt", "3000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let progress: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("Progress:"))
        .collect();
    assert_eq!(
        progress,
        vec![
            "Progress: 3000/12345 (24.3%)",
            "Progress: 6000/12345 (48.6%)",
            "Progress: 9000/12345 (72.9%)",
            "Progress: 12000/12345 (97.2%)",
        ]
    );
    assert!(stdout.contains("Created file: data_part005.txt"));
}

#[test]
fn test_carriage_return_line_endings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("mac.txt"), b"a\rb\rc\rd\r").unwrap();

    linesplit(temp_dir.path())
        .args(["mac.txt", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 4"))
        .stdout(predicate::str::contains("Generated 2 files"))
        .stdout(predicate::str::contains("  mac_part002.txt: 2 lines"));

    assert_eq!(fs::read(temp_dir.path().join("mac_part001.txt")).unwrap(), b"a\rb\r");
    assert_eq!(fs::read(temp_dir.path().join("mac_part002.txt")).unwrap(), b"c\rd\r");
}

#[test]
fn test_parts_concatenate_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let content = numbered_file(temp_dir.path(), "data.txt", 1001);

    linesplit(temp_dir.path())
        .args(["data.txt", "100", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let rebuilt: String = (1..=11)
        .map(|i| fs::read_to_string(temp_dir.path().join(format!("data_part{i:03}.txt"))).unwrap())
        .collect();
    assert_eq!(rebuilt, content);
}

#[test]
fn test_flag_form_with_prefix() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "input.txt", 3);

    linesplit(temp_dir.path())
        .args(["-i", "input.txt", "-l", "2", "-p", "split"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File: input.txt"))
        .stdout(predicate::str::contains("Lines per file: 2"));

    assert!(temp_dir.path().join("split_part001.txt").exists());
    assert!(temp_dir.path().join("split_part002.txt").exists());
}

#[test]
fn test_flags_win_over_positional_arguments() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "input.txt", 10);

    linesplit(temp_dir.path())
        .args(["input.txt", "2", "--lines", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 2 files"));
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();

    linesplit(temp_dir.path())
        .args(["nonexistent.txt", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_zero_and_negative_line_counts() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "input.txt", 10);

    for count in ["0", "-3"] {
        linesplit(temp_dir.path())
            .args(["input.txt", count])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid line count"));
    }

    // Only the input is present
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_invalid_line_count_rejected_before_input_is_checked() {
    let temp_dir = TempDir::new().unwrap();

    linesplit(temp_dir.path())
        .args(["nonexistent.txt", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid line count"));
}

#[test]
fn test_missing_arguments() {
    let temp_dir = TempDir::new().unwrap();

    linesplit(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No line count specified"));

    numbered_file(temp_dir.path(), "input.txt", 1);
    linesplit(temp_dir.path())
        .args(["-l", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input file specified"));
}

#[test]
fn test_non_numeric_line_count() {
    let temp_dir = TempDir::new().unwrap();

    linesplit(temp_dir.path())
        .args(["input.txt", "many"])
        .assert()
        .code(1);
}

#[test]
fn test_gbk_input_written_as_utf8() {
    let temp_dir = TempDir::new().unwrap();
    // "中文\n测试\n" in GBK
    fs::write(
        temp_dir.path().join("gbk.txt"),
        [0xD6, 0xD0, 0xCE, 0xC4, b'\n', 0xB2, 0xE2, 0xCA, 0xD4, b'\n'],
    )
    .unwrap();

    linesplit(temp_dir.path())
        .args(["gbk.txt", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Encoding: GBK"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("gbk_part001.txt")).unwrap(),
        "中文\n测试\n"
    );
}

#[test]
fn test_latin1_input_written_as_utf8() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("notes.txt"), b"caf\xE9\n").unwrap();

    linesplit(temp_dir.path())
        .args(["notes.txt", "5"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("notes_part001.txt")).unwrap(),
        "café\n"
    );
}

#[test]
fn test_empty_input_produces_no_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty.txt"), "").unwrap();

    linesplit(temp_dir.path())
        .args(["empty.txt", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Splitting into 0 files"))
        .stdout(predicate::str::contains("Generated 0 files"));

    assert!(!temp_dir.path().join("empty_part001.txt").exists());
}

#[test]
fn test_rerun_overwrites_existing_parts() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 4);
    fs::write(temp_dir.path().join("data_part001.txt"), "stale\n").unwrap();

    for _ in 0..2 {
        linesplit(temp_dir.path())
            .args(["data.txt", "2"])
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("data_part001.txt")).unwrap(),
        "line 1\nline 2\n"
    );
}

#[test]
fn test_output_dir_and_json_report() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 5);

    let output = linesplit(temp_dir.path())
        .args(["data.txt", "2", "-d", "parts", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["encoding"], "UTF-8");
    assert_eq!(report["plan"]["num_files"], 3);
    assert_eq!(report["parts"].as_array().unwrap().len(), 3);
    assert_eq!(report["parts"][2]["lines"], 1);

    assert!(temp_dir.path().join("parts/data_part003.txt").exists());
}

#[test]
fn test_buffered_mode() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 7);

    linesplit(temp_dir.path())
        .args(["data.txt", "3", "--buffered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  data_part003.txt: 1 lines"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 3);
    fs::write(
        temp_dir.path().join("linesplit.toml"),
        "[split]\noutput_dir = \"out\"\npad_width = 2\n",
    )
    .unwrap();

    linesplit(temp_dir.path())
        .args(["data.txt", "2", "--config", "linesplit.toml"])
        .assert()
        .success();

    assert!(temp_dir.path().join("out/data_part01.txt").exists());
    assert!(temp_dir.path().join("out/data_part02.txt").exists());
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 3);
    fs::write(temp_dir.path().join("bad.toml"), "[split]\nlines = 3\n").unwrap();

    linesplit(temp_dir.path())
        .args(["data.txt", "2", "-c", "bad.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_encoding() {
    let temp_dir = TempDir::new().unwrap();
    numbered_file(temp_dir.path(), "data.txt", 3);

    linesplit(temp_dir.path())
        .args(["data.txt", "2", "-e", "klingon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("linesplit").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("fixed number of lines"))
        .stdout(predicate::str::contains("--prefix"));
}

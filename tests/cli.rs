use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn pgap_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("pgap");
    path
}

/// A temp dir plus a config path inside it that does not exist yet, so
/// `find` runs with built-in defaults unless a test writes one.
fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("pgap.toml");
    (tmp, config_path)
}

fn run_pgap(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = pgap_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run pgap binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

/// Like [`run_pgap`], but writes `stdin` to the child's standard input.
fn run_pgap_with_stdin(config_path: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let binary = pgap_binary();
    let mut child = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to run pgap binary at {:?}: {}", binary, e));

    // Dropping the handle closes stdin so the child sees EOF.
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_find_basic_example() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) =
        run_pgap(&config_path, &["find", "--gap", "2", "4", "1", "6", "3", "8"]);
    assert!(success, "find failed: stdout={}, stderr={}", stdout, stderr);
    assert!(
        stdout.contains("pair: (0, 2)  values: (4, 6)"),
        "unexpected output: {}",
        stdout
    );
}

#[test]
fn test_find_comma_separated_values() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_pgap(&config_path, &["find", "-k", "3", "1,5,3,4,2"]);
    assert!(success);
    assert!(stdout.contains("pair: (0, 3)"), "unexpected output: {}", stdout);
}

#[test]
fn test_find_negative_values_after_separator() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_pgap(
        &config_path,
        &["find", "--gap", "2", "--", "-3", "7", "1", "-1", "4"],
    );
    assert!(success, "find failed: stderr={}", stderr);
    assert!(
        stdout.contains("pair: (0, 3)  values: (-3, -1)"),
        "unexpected output: {}",
        stdout
    );
}

#[test]
fn test_find_no_pair_is_success() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_pgap(&config_path, &["find", "--gap", "100", "10", "20", "30"]);
    assert!(success, "absence must not be an error");
    assert!(stdout.contains("no pair found"));
}

#[test]
fn test_find_empty_sequence() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_pgap(&config_path, &["find", "--gap", "5"]);
    assert!(success);
    assert!(stdout.contains("no pair found"));
}

#[test]
fn test_find_json_output() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_pgap(&config_path, &["find", "--gap", "0", "--json", "7", "7", "7"]);
    assert!(success);

    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["indices"], serde_json::json!([0, 1]));
    assert_eq!(body["values"], serde_json::json!([7, 7]));
    assert_eq!(body["message"], "Valid pair found");
}

#[test]
fn test_find_json_no_pair() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) =
        run_pgap(&config_path, &["find", "--gap", "25", "--json", "10", "20", "30"]);
    assert!(success);

    let body: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(body["indices"].is_null());
    assert!(body["values"].is_null());
}

#[test]
fn test_find_negative_gap_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_pgap(&config_path, &["find", "--gap=-1", "1", "2", "3"]);
    assert!(!success, "negative gap must fail: stdout={}", stdout);
    assert!(stderr.contains("invalid argument"), "stderr: {}", stderr);
    assert!(!stdout.contains("pair"));
}

#[test]
fn test_find_rejects_non_integer_argument() {
    let (_tmp, config_path) = setup_test_env();

    let (_, _, success) = run_pgap(&config_path, &["find", "--gap", "1", "1", "2.5"]);
    assert!(!success);
}

#[test]
fn test_find_from_input_file() {
    let (tmp, config_path) = setup_test_env();
    let seq_path = tmp.path().join("prices.json");
    fs::write(&seq_path, "[5, 5, 5]\n").unwrap();

    let (stdout, stderr, success) = run_pgap(
        &config_path,
        &["find", "--gap", "0", "--input", seq_path.to_str().unwrap()],
    );
    assert!(success, "find failed: stderr={}", stderr);
    assert!(stdout.contains("pair: (0, 1)"));
}

#[test]
fn test_find_reads_piped_stdin() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) =
        run_pgap_with_stdin(&config_path, &["find", "--gap", "0"], "[7, 7, 7]");
    assert!(success, "find failed: stderr={}", stderr);
    assert!(stdout.contains("pair: (0, 1)  values: (7, 7)"), "unexpected output: {}", stdout);
}

#[test]
fn test_find_input_dash_reads_stdin() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_pgap_with_stdin(
        &config_path,
        &["find", "--gap", "2", "--input", "-"],
        "4 1 6 3 8\n",
    );
    assert!(success, "find failed: stderr={}", stderr);
    assert!(stdout.contains("pair: (0, 2)  values: (4, 6)"), "unexpected output: {}", stdout);
}

#[test]
fn test_find_piped_stdin_with_non_integer() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) =
        run_pgap_with_stdin(&config_path, &["find", "--gap", "1"], "1 2 three\n");
    assert!(!success, "non-integer stdin must fail: stdout={}", stdout);
    assert!(stderr.contains("not an integer"), "stderr: {}", stderr);
}

#[test]
fn test_find_input_file_with_non_integer() {
    let (tmp, config_path) = setup_test_env();
    let seq_path = tmp.path().join("prices.txt");
    fs::write(&seq_path, "1 2.5 3\n").unwrap();

    let (_, stderr, success) = run_pgap(
        &config_path,
        &["find", "--gap", "1", "--input", seq_path.to_str().unwrap()],
    );
    assert!(!success);
    assert!(stderr.contains("not an integer"), "stderr: {}", stderr);
}

#[test]
fn test_find_tie_break_flag() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, _) = run_pgap(&config_path, &["find", "--gap", "2", "1", "10", "12", "3"]);
    assert!(stdout.contains("pair: (1, 2)"), "default policy: {}", stdout);

    let (stdout, _, success) = run_pgap(
        &config_path,
        &["find", "--gap", "2", "--tie-break", "lexicographic", "1", "10", "12", "3"],
    );
    assert!(success);
    assert!(stdout.contains("pair: (0, 3)"), "lexicographic policy: {}", stdout);
}

#[test]
fn test_find_unknown_tie_break_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_pgap(
        &config_path,
        &["find", "--gap", "2", "--tie-break", "last", "1", "3"],
    );
    assert!(!success);
    assert!(stderr.contains("last"), "stderr: {}", stderr);
}

#[test]
fn test_find_tie_break_from_config() {
    let (_tmp, config_path) = setup_test_env();
    fs::write(&config_path, "[search]\ntie_break = \"lexicographic\"\n").unwrap();

    let (stdout, stderr, success) =
        run_pgap(&config_path, &["find", "--gap", "2", "1", "10", "12", "3"]);
    assert!(success, "find failed: stderr={}", stderr);
    assert!(stdout.contains("pair: (0, 3)"), "unexpected output: {}", stdout);
}

#[test]
fn test_find_invalid_config_fails() {
    let (_tmp, config_path) = setup_test_env();
    fs::write(&config_path, "[server]\nbind = \"nowhere\"\n").unwrap();

    let (_, stderr, success) = run_pgap(&config_path, &["find", "--gap", "2", "4", "6"]);
    assert!(!success);
    assert!(stderr.contains("server.bind"), "stderr: {}", stderr);
}

#[test]
fn test_find_logs_missing_config_at_debug() {
    let (_tmp, config_path) = setup_test_env();

    let output = Command::new(pgap_binary())
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(["find", "--gap", "0", "7", "7"])
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "find failed: stderr={}", stderr);
    assert!(stderr.contains("no config at"), "stderr: {}", stderr);
}

#[test]
fn test_serve_requires_config() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_pgap(&config_path, &["serve"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read config file"), "stderr: {}", stderr);
}

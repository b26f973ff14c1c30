use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn propgen() -> Command {
    let mut cmd = Command::cargo_bin("propgen").unwrap();
    // Keep the user's global and local config files out of the run.
    let scratch = std::env::temp_dir().join("propgen-cli-tests");
    cmd.env("XDG_CONFIG_HOME", scratch.join("config"))
        .current_dir(std::env::temp_dir())
        .arg("--no-color");
    cmd
}

#[test]
fn test_stdin_to_csharp() {
    propgen()
        .write_stdin("[F] cust-num (Integer)\n[F] item-width\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("/// Customer number."))
        .stdout(predicate::str::contains("public int? CustomerNumber { get; set; }"))
        .stdout(predicate::str::contains("public float? ItemWidth { get; set; }"));
}

#[test]
fn test_skipped_line_goes_to_stderr_and_fails() {
    propgen()
        .write_stdin("[F] custName\nnot a field\n[F] prodNum\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CustomerName"))
        .stdout(predicate::str::contains("ProductNumber"))
        .stdout(predicate::str::contains("not a field").not())
        .stderr(predicate::str::contains("Error with not a field : invalid input format"));
}

#[test]
fn test_no_fail_flag() {
    propgen()
        .arg("--no-fail")
        .write_stdin("broken\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("1 line skipped"));
}

#[test]
fn test_typescript_target_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fields.txt");
    fs::write(&input, "[F] activeFlag (Boolean)\n").unwrap();

    propgen()
        .args(["--target", "typescript"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ActiveFlag?: boolean | null;"));
}

#[test]
fn test_config_file_abbreviations() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("propgen.toml");
    fs::write(&config, "[abbreviations]\nqty = \"quantity\"\n").unwrap();

    propgen()
        .arg("--config")
        .arg(&config)
        .write_stdin("[F] orderQty (Real)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("public float? OrderQuantity { get; set; }"));
}

#[test]
fn test_cli_abbreviation() {
    propgen()
        .args(["--abbrev", "amt=amount"])
        .write_stdin("[F] totalAmt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TotalAmount"));
}

#[test]
fn test_json_format() {
    propgen()
        .args(["--format", "json"])
        .write_stdin("[F] cust-num (Integer)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"identifier\": \"CustomerNumber\""))
        .stdout(predicate::str::contains("\"total_skipped\": 0"));
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("Fields.cs");

    propgen()
        .arg("--output-file")
        .arg(&out)
        .write_stdin("[F] custName\n")
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("public string? CustomerName { get; set; }"));
}

#[test]
fn test_abbrev_list() {
    propgen()
        .args(["abbrev", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("descr → description"));
}

#[test]
fn test_missing_file_is_reported() {
    propgen()
        .arg("/nonexistent/fields.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_unreadable_file_fails_run_even_with_valid_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fields.txt");
    fs::write(&input, "[F] custName\n").unwrap();

    propgen()
        .arg(&input)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("CustomerName"))
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_unreadable_file_with_no_fail() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("fields.txt");
    fs::write(&input, "[F] custName\n").unwrap();

    propgen()
        .arg("--no-fail")
        .arg(&input)
        .arg(dir.path().join("missing.txt"))
        .assert()
        .success();
}

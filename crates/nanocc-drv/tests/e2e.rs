//! End-to-end driver tests: compile a `.c` file with the real `nanocc`
//! binary, run the resulting executable, and check its exit code.
//! These need a working `gcc` on PATH, same as the driver itself.

use std::fs;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Writes `source` to `<dir>/prog.c` and returns its path.
fn write_source(dir: &std::path::Path, source: &str) -> std::path::PathBuf {
    let path = dir.join("prog.c");
    fs::write(&path, source).unwrap();
    path
}

fn run_binary_exit_code(binary: &std::path::Path) -> i32 {
    let status = StdCommand::new(binary).status().expect("failed to run compiled binary");
    status.code().expect("process terminated by signal")
}

#[test]
fn scenario_bare_constant_returns_two() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 2; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    let binary = dir.path().join("prog");
    assert_eq!(run_binary_exit_code(&binary), 2);
}

#[test]
fn scenario_complement_of_negation() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return ~(-3); }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 2);
}

#[test]
fn scenario_precedence_multiply_before_add() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 1 + 2 * 3; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 7);
}

#[test]
fn scenario_parentheses_override_precedence() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return (1 + 2) * 3; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 9);
}

#[test]
fn scenario_logical_and_short_circuits_to_zero() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 1 && 0; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 0);
}

#[test]
fn scenario_division_and_remainder_combine() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 6 / 4 + 6 % 4; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 3);
}

#[test]
fn scenario_shift_and_bitwise_or() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 1 << 3 | 1; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).assert().success();

    assert_eq!(run_binary_exit_code(&dir.path().join("prog")), 9);
}

#[test]
fn rejects_a_non_c_source_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.txt");
    fs::write(&path, "int main(void) { return 0; }").unwrap();

    Command::cargo_bin("nanocc")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".c"));
}

#[test]
fn a_lexical_error_is_reported_and_no_files_are_left_behind() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 1 @ 2; }");

    Command::cargo_bin("nanocc")
        .unwrap()
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("lexer"));

    assert!(!dir.path().join("prog.i").exists());
    assert!(!dir.path().join("prog.s").exists());
}

#[test]
fn a_parse_error_is_reported_with_the_parser_stage_tag() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 2 }");

    Command::cargo_bin("nanocc")
        .unwrap()
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parser"));
}

#[test]
fn stop_after_lex_produces_no_output_files() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 2; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).arg("--lex").assert().success();

    assert!(!dir.path().join("prog.i").exists());
    assert!(!dir.path().join("prog.s").exists());
    assert!(!dir.path().join("prog").exists());
}

#[test]
fn stop_after_tacky_produces_no_assembly() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 2; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).arg("--tacky").assert().success();

    assert!(!dir.path().join("prog.s").exists());
    assert!(!dir.path().join("prog").exists());
}

#[test]
fn dash_s_emits_assembly_and_skips_linking() {
    let dir = tempdir().unwrap();
    let src = write_source(dir.path(), "int main(void) { return 2; }");

    Command::cargo_bin("nanocc").unwrap().arg(&src).arg("-S").assert().success();

    let assembly = dir.path().join("prog.s");
    assert!(assembly.exists());
    assert!(!dir.path().join("prog").exists());

    let text = fs::read_to_string(assembly).unwrap();
    assert!(text.contains(".globl main"));
}

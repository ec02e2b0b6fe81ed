use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn missing_input_file_is_an_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("nanocc").unwrap();
    cmd.arg(tmp_dir.path().join("no_such_file.c"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn lex_error_is_nonzero() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.c");
    std::fs::write(&bad_path, "int main(void) { return 1f; }\n").unwrap();

    let mut cmd = Command::cargo_bin("nanocc").unwrap();
    cmd.arg("--lex").arg(&bad_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("illegal constant"));
}

#[test]
fn syntax_error_is_nonzero() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let bad_path = tmp_dir.path().join("bad.c");
    std::fs::write(&bad_path, "int main(void) { return 2 }\n").unwrap();

    let mut cmd = Command::cargo_bin("nanocc").unwrap();
    cmd.arg("--parse").arg(&bad_path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn emit_assembly_writes_dot_s_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let src_path = tmp_dir.path().join("ret2.c");
    std::fs::write(&src_path, "int main(void) { return 2; }\n").unwrap();

    let mut cmd = Command::cargo_bin("nanocc").unwrap();
    cmd.arg("-S").arg(&src_path);
    cmd.assert().success();

    let asm = std::fs::read_to_string(tmp_dir.path().join("ret2.s")).unwrap();
    assert!(asm.contains("\t.globl main"));
    assert!(asm.contains("\tmovl\t$2, %eax"));
    // intermediate preprocessor output is cleaned up
    assert!(!tmp_dir.path().join("ret2.i").exists());
}

#[test]
fn stage_flags_are_mutually_exclusive() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let src_path = tmp_dir.path().join("ret2.c");
    std::fs::write(&src_path, "int main(void) { return 2; }\n").unwrap();

    let mut cmd = Command::cargo_bin("nanocc").unwrap();
    cmd.arg("--lex").arg("--parse").arg(&src_path);
    cmd.assert().failure();
}

//! Runs the built binaries with piped stdin and checks their exact stdout,
//! prompts included.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_bin(path: &str, stdin: &[u8]) -> (String, i32) {
    let mut child = Command::new(path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");

    child.stdin.take().unwrap().write_all(stdin).unwrap();

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8(output.stdout).expect("utf8"),
        output.status.code().unwrap_or(-1),
    )
}

#[test]
fn test_sum_calculator_binary() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_sum-calculator"), b"10\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter the value of n: Sum = 55\n");
}

#[test]
fn test_sum_calculator_invalid_exits_zero() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_sum-calculator"), b"abc\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter the value of n: Number invalid\n");
}

#[test]
fn test_sum_calculator_eof_is_invalid() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_sum-calculator"), b"");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter the value of n: Number invalid\n");
}

#[test]
fn test_sum_calculator_invalid_utf8() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_sum-calculator"), b"12\xff\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter the value of n: Sum = 78\n");

    let (out, code) = run_bin(env!("CARGO_BIN_EXE_sum-calculator"), b"\xff\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter the value of n: Number invalid\n");
}

#[test]
fn test_vowel_checker_binary() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_vowel-checker"), b"EDUCATION\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter word: All vowels are present in education\n");
}

#[test]
fn test_vowel_checker_empty_input() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_vowel-checker"), b"\n");
    assert_eq!(code, 0);
    assert_eq!(out, "Enter word: All vowels are not present in \n");
}

#[test]
fn test_vowel_checker_invalid_utf8() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_vowel-checker"), b"EDUC\xffATION\n");
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "Enter word: All vowels are present in educ\u{FFFD}ation\n"
    );
}

#[test]
fn test_matching_chars_binary() {
    let (out, code) = run_bin(env!("CARGO_BIN_EXE_matching-chars"), b"hello\nworld\n");
    assert_eq!(code, 0);
    assert_eq!(
        out,
        "Enter string-1Enter string-2Matching characters count: 2\n"
    );
}

#[test]
fn test_unexpected_argument_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_vowel-checker"))
        .arg("extra")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
}

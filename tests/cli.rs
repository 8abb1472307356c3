//! End-to-end runs of the `hnboard` binary.

use std::process::Command;

use hnboard::{Board, Hnfen, DEFAULT_START_HNFEN};

const START_TEXT: &str = "\
 - - - O O O O O - - -
 - - - - - O - - - - -
 - - - - - - - - - - -
 O - - - - x - - - - O
 O - - - x x x - - - O
 O O - x x K x x - O O
 O - - - x x x - - - O
 O - - - - x - - - - O
 - - - - - - - - - - -
 - - - - - O - - - - -
 - - - O O O O O - - -
";

fn hnboard(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hnboard"))
        .args(args)
        .env_remove("HNBOARD_SIZE")
        .env_remove("HNBOARD_FORMAT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run hnboard")
}

#[test]
fn prints_starting_board_without_arguments() {
    let output = hnboard(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), START_TEXT);
    assert!(output.stderr.is_empty());
}

#[test]
fn library_and_binary_agree() {
    let board = Board::starting(11).unwrap();
    assert_eq!(board.to_string(), START_TEXT);
    assert_eq!(Board::from_hnfen(DEFAULT_START_HNFEN).unwrap(), board);
}

#[test]
fn hnfen_output() {
    let output = hnboard(&["--format", "hnfen"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        DEFAULT_START_HNFEN
    );
}

#[test]
fn larger_board() {
    let output = hnboard(&["--size", "13"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 13);
    assert_eq!(stdout.lines().nth(6).unwrap(), " O O - - x x K x x - - O O");
}

#[test]
fn bad_size_exits_non_zero() {
    let output = hnboard(&["--size", "8"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("size 8"));
}

#[cfg(unix)]
#[test]
fn broken_pipe_exits_non_zero() {
    let (reader, writer) = std::io::pipe().expect("failed to create pipe");
    drop(reader);
    let output = Command::new(env!("CARGO_BIN_EXE_hnboard"))
        .env_remove("HNBOARD_SIZE")
        .env_remove("HNBOARD_FORMAT")
        .env_remove("RUST_LOG")
        .stdout(writer)
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("failed to run hnboard");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write board"));
}

#[cfg(target_os = "linux")]
#[test]
fn full_device_exits_non_zero() {
    let full = match std::fs::OpenOptions::new().write(true).open("/dev/full") {
        Ok(file) => file,
        Err(_) => return,
    };
    let output = Command::new(env!("CARGO_BIN_EXE_hnboard"))
        .env_remove("HNBOARD_SIZE")
        .env_remove("HNBOARD_FORMAT")
        .env_remove("RUST_LOG")
        .stdout(full)
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("failed to run hnboard");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write board"));
}

//! CLI tests for the `guess` binary.
//!
//! Spawns the binary with piped stdin and checks stdout text and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use guess::core::messages::{INVALID_INTEGER, PROMPT, TOO_HIGH, TOO_LOW, WELCOME, win_message};
use guess::core::target::draw_target;
use guess::exit_codes;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn run_guess(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guess"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn guess");
    // The binary may exit before reading stdin (e.g. config errors); a
    // broken pipe here is expected and the exit status is checked instead.
    if let Err(err) = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
    {
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "write stdin: {err}");
    }
    child.wait_with_output().expect("wait guess")
}

fn seeded_target(seed: u64) -> i64 {
    draw_target(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn seeded_game_prints_exact_transcript() {
    let target = seeded_target(5);
    let input = format!("{}\n{}\n{}\n", target - 100, target + 100, target);

    let output = run_guess(&["--seed", "5"], &input);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let expected = format!(
        "{WELCOME}\n{PROMPT}{TOO_LOW}\n{PROMPT}{TOO_HIGH}\n{PROMPT}{}\n",
        win_message(3)
    );
    assert_eq!(stdout, expected);
}

#[test]
fn invalid_line_reprompts_without_counting() {
    let target = seeded_target(9);
    let input = format!("abc\n{target}\n");

    let output = run_guess(&["--seed", "9"], &input);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.matches(INVALID_INTEGER).count(), 1);
    assert!(stdout.ends_with(&format!("{}\n", win_message(1))));
}

#[test]
fn closed_stdin_exits_with_invalid_code() {
    let output = run_guess(&["--seed", "1"], "");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("input closed"));
}

#[test]
fn invalid_input_cap_exits_with_gave_up_code() {
    let output = run_guess(&["--seed", "1", "--max-invalid-inputs", "2"], "x\ny\n");
    assert_eq!(output.status.code(), Some(exit_codes::GAVE_UP));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.matches(INVALID_INTEGER).count(), 2);
}

#[test]
fn config_file_supplies_seed() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("guess.toml");
    std::fs::write(&path, "seed = 21\n").expect("write config");
    let target = seeded_target(21);

    let output = run_guess(
        &["--config", path.to_str().expect("utf8 path")],
        &format!("{target}\n"),
    );

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.ends_with(&format!("{}\n", win_message(1))));
}

#[test]
fn missing_config_file_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("typo.toml");

    let output = run_guess(&["--config", path.to_str().expect("utf8 path")], "50\n");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("typo.toml"));
}

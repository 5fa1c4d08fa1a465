//! End-to-end tests that run the built binary over real pipes.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the stub in an isolated directory with `input` on stdin.
fn run_stub(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_codec-stub"))
        .args(["--config", dir.join("config.toml").to_str().unwrap()])
        .args(args)
        .current_dir(dir)
        .env_remove("CODEC_STUB_ENCODER")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_binary_identity_default() {
    let dir = TempDir::new().unwrap();
    let output = run_stub(dir.path(), &[], "ENCODE foo\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "foo\n");
}

#[test]
fn test_binary_base64_round_trip() {
    let dir = TempDir::new().unwrap();

    let encoded = run_stub(dir.path(), &["--encoder", "base64"], "ENCODE hello\n");
    assert!(encoded.status.success());
    let ciphertext = stdout_of(&encoded);
    assert_eq!(ciphertext, "aGVsbG8=\n");

    let decoded = run_stub(
        dir.path(),
        &["--encoder", "base64"],
        &format!("DECODE {ciphertext}"),
    );
    assert!(decoded.status.success());
    assert_eq!(stdout_of(&decoded), "hello\n");
}

#[test]
fn test_binary_lowercase_command_decodes() {
    let dir = TempDir::new().unwrap();
    let output = run_stub(dir.path(), &["-e", "base64"], "encode aGk=");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "hi\n");
}

#[test]
fn test_binary_single_token_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = run_stub(dir.path(), &[], "ENCODE\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Insufficient input"), "stderr: {stderr}");
}

#[test]
fn test_binary_encoder_failure_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = run_stub(dir.path(), &["--encoder", "base64"], "DECODE ***");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_unknown_encoder_is_config_error() {
    let dir = TempDir::new().unwrap();
    let output = run_stub(dir.path(), &["--encoder", "rot13"], "ENCODE foo");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration Error"), "stderr: {stderr}");
}

#[test]
fn test_binary_reads_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[encoder]\nkind = \"reverse\"\n",
    )
    .unwrap();

    let output = run_stub(dir.path(), &[], "ENCODE abc");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "cba\n");
}

#[test]
fn test_binary_cli_overrides_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[encoder]\nkind = \"reverse\"\n",
    )
    .unwrap();

    let output = run_stub(dir.path(), &["--encoder", "identity"], "ENCODE abc");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "abc\n");
}

#[test]
fn test_binary_env_selects_encoder() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_codec-stub"))
        .args(["--config", dir.path().join("config.toml").to_str().unwrap()])
        .current_dir(dir.path())
        .env("CODEC_STUB_ENCODER", "reverse")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"ENCODE xyz").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "zyx\n");
}

#[test]
fn test_binary_log_file_keeps_streams_clean() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("logs").join("stub.log");
    let mut child = Command::new(env!("CARGO_BIN_EXE_codec-stub"))
        .args(["--config", dir.path().join("config.toml").to_str().unwrap()])
        .args(["--log-file", log_path.to_str().unwrap()])
        .current_dir(dir.path())
        .env_remove("CODEC_STUB_ENCODER")
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"ENCODE foo").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "foo\n");
    assert!(output.stderr.is_empty());

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Dispatching request"), "log: {log}");
}

//! Error scenario integration tests

use std::process::Command;

use tempfile::TempDir;

fn apprec_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apprec"));
    cmd.env("HOME", config_home.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("PULSE_SERVER");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_audio_format() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["config", "set", "audio_format", "flac"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid audio format"),
        "Expected error about invalid audio format, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_sample_format() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["config", "set", "sample_format", "s12le"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid sample format"),
        "Expected error about invalid sample format, got: {}",
        stderr
    );
}

#[test]
fn invalid_sample_format_flag_is_usage_error() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["--sample-format", "s12le", "out.wav"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("s12le"), "got: {}", stderr);
}

#[test]
fn config_list_with_no_file() {
    let home = TempDir::new().unwrap();
    let output = apprec_bin(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set") && stdout.contains("sample_format"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();

    let first = apprec_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = apprec_bin(&home)
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
}

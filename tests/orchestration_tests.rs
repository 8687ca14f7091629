//! End-to-end orchestration tests against stubbed FFmpeg tools
//!
//! Each test builds a throwaway PATH directory containing shell-script stand-ins
//! for ffprobe/ffmpeg, so exit-code mapping and output parsing are exercised
//! through the real binary without encoding anything.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use transcodex_cli::error::{EXIT_MISSING_INPUT, EXIT_TOOL_NOT_FOUND};

/// Write an executable stub script into the fake PATH directory
fn write_stub(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// A well-formed ffprobe stub reporting a known duration and frame count
fn write_good_ffprobe(dir: &Path) {
    write_stub(
        dir,
        "ffprobe",
        r#"printf '{"streams":[{"duration":"3661.5","nb_frames":"109845"}]}'"#,
    );
}

fn transcodex_with_path(stub_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("transcodex").expect("binary builds");
    cmd.env("PATH", stub_dir);
    cmd
}

fn make_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("sample.mkv");
    fs::write(&input, b"fake video data").unwrap();
    input
}

#[test]
fn test_successful_transcode_reports_output_path() {
    let stubs = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_good_ffprobe(stubs.path());
    write_stub(
        stubs.path(),
        "ffmpeg",
        "echo 'frame=  300 fps= 30 time=00:00:10.00 bitrate=4500.0kbits/s'\nexit 0",
    );

    let input = make_input(work.path());
    transcodex_with_path(stubs.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("duration=01:01:01.50"))
        .stdout(predicate::str::contains("frames=109845"))
        .stdout(predicate::str::contains("sample_1080p30fps.mp4"))
        .stdout(predicate::str::contains("Transcode complete!"));
}

#[test]
fn test_child_exit_code_is_propagated_with_buffered_output() {
    let stubs = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_good_ffprobe(stubs.path());
    write_stub(
        stubs.path(),
        "ffmpeg",
        "echo 'Conversion failed!' >&2\nexit 1",
    );

    let input = make_input(work.path());
    transcodex_with_path(stubs.path())
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Conversion failed!"))
        .stderr(predicate::str::contains("FFmpeg exited with code 1"));
}

#[test]
fn test_missing_ffmpeg_exits_with_code_3() {
    let stubs = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    // Empty PATH directory: neither ffprobe nor ffmpeg resolve

    let input = make_input(work.path());
    transcodex_with_path(stubs.path())
        .arg(&input)
        .assert()
        .failure()
        .code(EXIT_TOOL_NOT_FOUND)
        .stderr(predicate::str::contains("ffmpeg not found"));
}

#[test]
fn test_probe_failure_does_not_block_transcoding() {
    let stubs = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_stub(stubs.path(), "ffprobe", "echo 'broken file' >&2\nexit 1");
    write_stub(stubs.path(), "ffmpeg", "exit 0");

    let input = make_input(work.path());
    transcodex_with_path(stubs.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("duration=N/A, frames=N/A"));
}

#[test]
fn test_missing_input_launches_no_child() {
    let stubs = TempDir::new().unwrap();
    // Spy stubs: record every invocation beside themselves. Only shell
    // builtins are used since the stub directory is the entire PATH.
    write_stub(stubs.path(), "ffprobe", ": > \"${0%/*}/probe_invoked\"");
    write_stub(stubs.path(), "ffmpeg", ": > \"${0%/*}/ffmpeg_invoked\"");

    transcodex_with_path(stubs.path())
        .arg("/nonexistent/definitely_missing.mp4")
        .assert()
        .failure()
        .code(EXIT_MISSING_INPUT);

    assert!(!stubs.path().join("probe_invoked").exists());
    assert!(!stubs.path().join("ffmpeg_invoked").exists());
}

#[test]
fn test_probe_without_video_stream_reports_unknown() {
    let stubs = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_stub(stubs.path(), "ffprobe", r#"printf '{"streams":[]}'"#);
    write_stub(stubs.path(), "ffmpeg", "exit 0");

    let input = make_input(work.path());
    transcodex_with_path(stubs.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("duration=unknown, frames=unknown"));
}

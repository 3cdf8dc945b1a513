//! End-to-end tests for the `emolog-demo` binary.
//!
//! The binary is built with the same profile as this test, so
//! `cfg!(debug_assertions)` tells us whether output is expected.

use std::fs::File;
use std::process::{self, Stdio};

use assert_cmd::Command;
use emolog::LogLevel;

const EXPECT_OUTPUT: bool = cfg!(debug_assertions);

fn demo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_emolog-demo"))
}

fn stdout_lines(args: &[&str]) -> Vec<String> {
    let output = demo().args(args).output().expect("demo runs");
    assert!(output.status.success(), "demo failed: {output:?}");
    assert!(output.stderr.is_empty(), "unexpected stderr: {output:?}");
    String::from_utf8(output.stdout)
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Checks the `yyyy-MM-dd HH:mm ` prefix and returns the rest of the line.
fn after_timestamp(line: &str) -> &str {
    let (stamp, rest) = line.split_at(17);
    for (index, byte) in stamp.bytes().enumerate() {
        match index {
            4 | 7 => assert_eq!(byte, b'-', "{line}"),
            10 | 16 => assert_eq!(byte, b' ', "{line}"),
            13 => assert_eq!(byte, b':', "{line}"),
            _ => assert!(byte.is_ascii_digit(), "{line}"),
        }
    }
    rest
}

#[test]
fn default_run_prints_every_level_in_order() {
    let lines = stdout_lines(&["--message", "something went wrong"]);

    if !EXPECT_OUTPUT {
        assert!(lines.is_empty(), "release build printed {lines:?}");
        return;
    }

    assert_eq!(lines.len(), LogLevel::ALL.len());
    for (line, level) in lines.iter().zip(LogLevel::ALL) {
        let rest = after_timestamp(line);
        assert!(rest.starts_with(level.prefix()), "{line}");
        assert!(rest.contains(" [demo.rs: "), "{line}");
        assert!(rest.ends_with("] log_levels → something went wrong"), "{line}");
    }
}

#[test]
fn level_filter_selects_requested_levels() {
    let lines = stdout_lines(&["--level", "e", "--level", "critical", "-m", "boom"]);

    if !EXPECT_OUTPUT {
        assert!(lines.is_empty());
        return;
    }

    assert_eq!(lines.len(), 2);
    assert!(after_timestamp(&lines[0]).starts_with("[🔧ERROR]"));
    assert!(after_timestamp(&lines[1]).starts_with("[🔥CRITICAL]"));
}

#[test]
fn concurrent_workers_print_whole_lines() {
    const THREADS: usize = 8;
    let threads = THREADS.to_string();
    let lines = stdout_lines(&["--threads", &threads, "-m", "tick"]);

    if !EXPECT_OUTPUT {
        assert!(lines.is_empty());
        return;
    }

    assert_eq!(lines.len(), THREADS * LogLevel::ALL.len());
    for line in &lines {
        let rest = after_timestamp(line);
        assert_eq!(rest.matches(" → tick #").count(), 1, "{line}");
    }
    for worker in 0..THREADS {
        let suffix = format!("→ tick #{worker}");
        let count = lines.iter().filter(|line| line.ends_with(&suffix)).count();
        assert_eq!(count, LogLevel::ALL.len(), "worker {worker}");
    }
}

#[test]
fn invalid_level_exits_with_failure() {
    let assert = demo().args(["--level", "loud"]).assert().failure().code(1);
    let output = assert.get_output();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loud"), "{stderr}");
}

#[test]
fn broken_stdout_pipe_is_ignored() {
    let mut child = process::Command::new(env!("CARGO_BIN_EXE_emolog-demo"))
        .args(["--threads", "8", "-m", "nobody reads this"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("demo spawns");
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("demo exits");
    assert!(output.status.success(), "demo failed: {output:?}");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn unwritable_stdout_is_ignored() {
    let read_only = File::open(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"))
        .expect("manifest opens");

    let output = process::Command::new(env!("CARGO_BIN_EXE_emolog-demo"))
        .args(["-m", "lost line"])
        .stdout(Stdio::from(read_only))
        .stderr(Stdio::piped())
        .output()
        .expect("demo runs");

    assert!(output.status.success(), "demo failed: {output:?}");
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn help_lists_options() {
    let lines = stdout_lines(&["--help"]);
    let help = lines.join("\n");
    assert!(help.contains("--message"));
    assert!(help.contains("--level"));
    assert!(help.contains("--threads"));
}

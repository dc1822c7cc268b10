//! Shared helpers for CLI integration tests.

#![allow(dead_code, unreachable_pub)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use assert_cmd::cargo;

pub fn rfc822_cmd() -> Command {
    Command::new(cargo::cargo_bin!("rfc822"))
}

/// Run `rfc822 <args>` with `stdin` piped in.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = rfc822_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn rfc822");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for rfc822")
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid json ({e}): {stdout}"))
}

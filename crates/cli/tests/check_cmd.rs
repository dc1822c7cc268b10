//! CLI tests for `rfc822 check`: verdicts, exit codes, stdin, limits, strict mode.

mod common;

use common::{rfc822_cmd, run_with_stdin, stdout_json};

#[test]
fn valid_address_json() {
    let output = rfc822_cmd()
        .args(["check", "user@example.com", "--output", "json"])
        .output()
        .expect("run check");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["strict"], false);
    assert_eq!(json["results"][0]["input"], "user@example.com");
    assert_eq!(json["results"][0]["ok"], true);
    assert_eq!(json["results"][0]["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn invalid_address_exits_nonzero_with_error_diagnostic() {
    let output = rfc822_cmd()
        .args(["check", "a..b@c", "--output", "json"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["ok"], false);
    let d = &json["results"][0]["diagnostics"][0];
    assert_eq!(d["id"], "ADDR1007");
    assert_eq!(d["severity"], "error");
    assert_eq!(d["span"]["start"], 2);
}

#[test]
fn any_invalid_address_fails_the_run() {
    let output = rfc822_cmd()
        .args(["check", "a@b.c", "nope", "--output", "json"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["ok"], true);
    assert_eq!(json["results"][1]["ok"], false);
    assert_eq!(json["results"][1]["diagnostics"][0]["id"], "ADDR1008");
}

#[test]
fn warnings_pass_unless_strict() {
    let lenient = rfc822_cmd()
        .args(["check", "a(x)@b.c", "--output", "json"])
        .output()
        .expect("run check");
    assert!(lenient.status.success());
    let json = stdout_json(&lenient);
    assert_eq!(json["results"][0]["diagnostics"][0]["id"], "ADDR2001");
    assert_eq!(json["results"][0]["diagnostics"][0]["severity"], "warn");

    let strict = rfc822_cmd()
        .args(["check", "--strict", "a(x)@b.c", "--output", "json"])
        .output()
        .expect("run check");
    assert_eq!(strict.status.code(), Some(1));
    let json = stdout_json(&strict);
    assert_eq!(json["ok"], false);
    assert_eq!(json["strict"], true);
    assert_eq!(json["results"][0]["ok"], true);
}

#[test]
fn reads_addresses_from_stdin() {
    let output = run_with_stdin(&["check", "-", "--output", "json"], "a@b.c\n\nx\n");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["input"], "a@b.c");
    assert_eq!(results[1]["input"], "x");
    assert_eq!(results[1]["ok"], false);
}

#[test]
fn no_arguments_reads_stdin() {
    let output = run_with_stdin(&["check", "--output", "json"], "a@b.c\r\nc@d.e\r\n");

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["results"][1]["input"], "c@d.e");
}

#[test]
fn comment_depth_limit() {
    let output = rfc822_cmd()
        .args(["check", "a((x))@b.c", "--max-comment-depth", "1", "--output", "json"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["results"][0]["diagnostics"][0]["id"], "ADDR1011");
}

#[test]
fn length_limit() {
    let output = rfc822_cmd()
        .args(["check", "a@b.c", "--max-length", "3", "--output", "json"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let diag = &json["results"][0]["diagnostics"][0];
    assert_eq!(diag["id"], "ADDR1012");
    assert_eq!(diag["message"], "input too long: 5 bytes, limit is 3");
    assert!(diag.get("found").is_none(), "{diag}");
    assert_eq!(diag["span"]["end"], 5);
}

#[test]
fn folded_address_reports_position() {
    let output = rfc822_cmd()
        .args(["check", "a\r\n @b\r\nc", "--output", "json"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let diag = &json["results"][0]["diagnostics"][0];
    assert_eq!(diag["id"], "ADDR1010");
    assert_eq!(diag["position"]["line"], 3);
    assert_eq!(diag["position"]["column"], 1);
}

#[test]
fn pretty_output_prints_verdicts_and_summary() {
    let output = rfc822_cmd()
        .args(["check", "a@b.c", "a..b@c", "--output", "pretty"])
        .output()
        .expect("run check");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid   a@b.c"), "stdout: {stdout}");
    assert!(stdout.contains("invalid a..b@c"), "stdout: {stdout}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ADDR1007"), "stderr: {stderr}");
    assert!(stderr.contains("2 checked"), "stderr: {stderr}");
}

#[test]
fn validate_is_an_alias_for_check() {
    let output = rfc822_cmd()
        .args(["validate", "a@b.c", "--output", "json"])
        .output()
        .expect("run validate");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["ok"], true);
}

#[test]
fn debug_log_level_traces_each_check_to_stderr() {
    let output = rfc822_cmd()
        .args(["check", "a@b.c", "--output", "json", "--log-level", "debug"])
        .output()
        .expect("run check");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("checked"), "stderr: {stderr}");
    // Logs never leak into the JSON on stdout.
    assert_eq!(stdout_json(&output)["ok"], true);
}

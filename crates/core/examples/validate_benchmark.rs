//! Lightweight validate/check benchmark harness for local baselines.
//!
//! Run from repository root:
//! `cargo run -p rfc822_core --example validate_benchmark --release`

use std::time::Instant;

use rfc822_core::{RecognizerConfig, check, parse_fixture, validate};

fn run_benchmark(label: &str, inputs: &[String], iterations: usize) {
    let config = RecognizerConfig::default();
    let bytes: usize = inputs.iter().map(String::len).sum();

    let validate_start = Instant::now();
    let mut accepted = 0usize;
    for _ in 0..iterations {
        accepted = inputs.iter().filter(|s| validate(s).is_ok()).count();
    }
    let validate_elapsed = validate_start.elapsed();

    let check_start = Instant::now();
    for _ in 0..iterations {
        for s in inputs {
            let _ = check(s, &config);
        }
    }
    let check_elapsed = check_start.elapsed();

    println!("Benchmark: {label}");
    println!(
        "  inputs: {} ({} bytes, {} accepted)",
        inputs.len(),
        bytes,
        accepted
    );
    println!(
        "  validate: total={:?}, per_iter={:.3} ms",
        validate_elapsed,
        validate_elapsed.as_secs_f64() * 1000.0 / iterations as f64
    );
    println!(
        "  check:    total={:?}, per_iter={:.3} ms",
        check_elapsed,
        check_elapsed.as_secs_f64() * 1000.0 / iterations as f64
    );
}

fn main() {
    let iterations = std::env::var("RFC822_BENCH_ITERS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(2000);

    let fixture: Vec<String> = parse_fixture(include_str!("../tests/data/testcases.txt"))
        .into_iter()
        .map(|c| c.input)
        .collect();
    run_benchmark("fixture", &fixture, iterations);

    let nested = vec![format!("a{}{}@b", "(".repeat(10_000), ")".repeat(10_000))];
    run_benchmark("nested_comments", &nested, iterations / 100 + 1);

    let long_domain = vec![format!("user@{}com", "label.".repeat(5_000))];
    run_benchmark("long_domain", &long_domain, iterations / 100 + 1);
}

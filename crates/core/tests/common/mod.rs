//! Shared test helpers for `rfc822_core` integration tests.

#![allow(unreachable_pub)]

use rfc822_core::{FixtureCase, RejectionKind, parse_fixture, validate};
use std::sync::LazyLock;

/// The labeled fixture, parsed once per test binary.
pub static FIXTURE: LazyLock<Vec<FixtureCase>> =
    LazyLock::new(|| parse_fixture(include_str!("../data/testcases.txt")));

/// Assert that `input` is rejected with `kind`, and return the offset.
#[allow(dead_code)]
#[track_caller]
pub fn assert_rejects(input: &str, kind: RejectionKind) -> usize {
    match validate(input) {
        Ok(()) => panic!("expected {kind:?} for {input:?}, but it was accepted"),
        Err(r) => {
            assert_eq!(r.kind, kind, "wrong rejection for {input:?}: {r}");
            r.offset
        }
    }
}

/// Assert that `input` is accepted.
#[allow(dead_code)]
#[track_caller]
pub fn assert_accepts(input: &str) {
    if let Err(r) = validate(input) {
        panic!("expected {input:?} to be accepted, got {r}");
    }
}

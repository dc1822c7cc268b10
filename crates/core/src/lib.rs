//! Recognizer for classic RFC 822 mail addresses.
//!
//! Decides whether a string is a syntactically legal `local-part "@" domain`
//! address, including quoted-strings, domain-literals, quoted-pairs, nested
//! comments and folding white space. The main entry points are [`validate`]
//! for a yes/no answer with a [`Rejection`] reason, and [`check`] for
//! diagnostics with warnings.

#![warn(missing_docs)]

/// Diagnostic front end: rejections and warnings as [`Diagnostic`]s.
pub mod check;
/// Recognizer resource limits.
pub mod config;
/// Labeled `+`/`-` fixture corpora.
pub mod corpus;
/// addr-spec grammar: character classes, recognizer, rejection taxonomy.
pub mod grammar;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Recognizer
pub use grammar::recognizer::{is_valid, validate, validate_with_config};

// Rejections
pub use grammar::rejection::{Rejection, RejectionKind};

// Configuration
pub use config::RecognizerConfig;

// Diagnostics
pub use check::{CheckResult, check};
pub use grammar::diag::{Code, Diagnostic, FoldPosition, Severity, Span};

// Fixtures
pub use corpus::{FixtureCase, FixtureReport, parse_fixture, run_fixture};

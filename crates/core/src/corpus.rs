//! Labeled fixture corpora.
//!
//! A fixture is a text file with one case per line. The first character of a
//! line is the expectation (`+` for a valid address, anything else for an
//! invalid one) and the rest of the line is the candidate address.

use serde::Serialize;

use crate::config::RecognizerConfig;
use crate::grammar::recognizer::validate_with_config;
use crate::grammar::rejection::Rejection;

/// One labeled case from a fixture file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureCase {
    /// 1-based line number in the fixture.
    pub line: usize,
    /// Candidate address (the line minus its sentinel).
    pub input: String,
    /// Whether the line was marked `+`.
    pub expect_valid: bool,
}

/// A case whose outcome disagreed with its label.
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    /// The offending case.
    pub case: FixtureCase,
    /// The rejection, when an address labeled valid was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// Outcome of running every case of a fixture.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureReport {
    /// Number of cases run.
    pub total: usize,
    /// Cases that disagreed with their label, in fixture order.
    pub mismatches: Vec<Mismatch>,
}

impl FixtureReport {
    /// `true` when every case matched its label.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Parse fixture text into cases. Empty lines are skipped; a trailing `\r`
/// is not part of the candidate.
pub fn parse_fixture(text: &str) -> Vec<FixtureCase> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let mut chars = line.chars();
            let sentinel = chars.next()?;
            Some(FixtureCase {
                line: i + 1,
                input: chars.as_str().to_string(),
                expect_valid: sentinel == '+',
            })
        })
        .collect()
}

/// Validate every case and collect the disagreements.
pub fn run_fixture(cases: &[FixtureCase], config: &RecognizerConfig) -> FixtureReport {
    let mismatches = cases
        .iter()
        .filter_map(|case| {
            let outcome = validate_with_config(&case.input, config);
            if outcome.is_ok() == case.expect_valid {
                return None;
            }
            Some(Mismatch {
                case: case.clone(),
                rejection: outcome.err(),
            })
        })
        .collect();
    FixtureReport {
        total: cases.len(),
        mismatches,
    }
}

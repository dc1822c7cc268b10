//! Diagnostic-producing front end over the recognizer.
//!
//! [`check`] reports a rejection as an error [`Diagnostic`] and, for accepted
//! addresses, a warning for each construct that the classic grammar allows
//! but that later standards or common validators refuse.

use serde::Serialize;

use crate::config::RecognizerConfig;
use crate::grammar::diag::{Code, Diagnostic, Severity, Span};
use crate::grammar::recognizer::{Observations, recognize};

/// Result of checking one candidate address.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Whether the input is a valid addr-spec. Warnings never affect this.
    pub ok: bool,
    /// The rejection (at most one error) or the warnings, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    /// `true` when the address is valid and produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.ok && self.diagnostics.is_empty()
    }

    /// Whether any diagnostic has `Warn` severity.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, Severity::Warn))
    }
}

/// Check `input`, returning diagnostics rather than a bare `Result`.
pub fn check(input: &str, config: &RecognizerConfig) -> CheckResult {
    match recognize(input, config) {
        Ok(seen) => CheckResult {
            ok: true,
            diagnostics: warnings(&seen),
        },
        Err(rejection) => CheckResult {
            ok: false,
            diagnostics: vec![rejection.to_diagnostic(input)],
        },
    }
}

/// One warning per observed construct, worded by the catalogue summary.
fn warnings(seen: &Observations) -> Vec<Diagnostic> {
    let observed: [(Option<Span>, Code); 6] = [
        (seen.comment, Code::CommentPresent),
        (seen.whitespace, Code::FoldingWhitespace),
        (seen.quoted_string, Code::QuotedLocalPart),
        (seen.domain_literal, Code::DomainLiteral),
        (seen.quoted_pair, Code::QuotedPair),
        (seen.single_label_domain, Code::SingleLabelDomain),
    ];
    let mut out: Vec<Diagnostic> = observed
        .into_iter()
        .filter_map(|(span, code)| span.map(|s| Diagnostic::observed(code, s)))
        .collect();
    out.sort_by_key(|d| d.span.start);
    out
}

//! Pretty diagnostic rendering using ariadne.
//!
//! Each checked address is its own source: reports underline the offending
//! character inside the address. Falls back to structured JSON when the
//! output is piped or when the user explicitly requests it.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use rfc822_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, source-annotated output (ariadne).
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Use the explicit choice, otherwise pretty for terminals and JSON for pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warn => ReportKind::Warning,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
    }
}

/// Short inline label: the offending character for rejections, the code's
/// summary for warnings and whole-input rejections.
fn label_message(diag: &Diagnostic) -> String {
    match &diag.found {
        Some(found) => format!("found {found}"),
        None => diag.id.summary().to_string(),
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render diagnostics for one address to stderr.
///
/// `label` names the address in report headers (`arg 1`, `stdin:3`, or a
/// fixture line). Folded addresses also get a line/column note.
pub(crate) fn render_diagnostics_pretty(source: &str, label: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);
    let mut cache = (label, Source::from(source));

    for diag in diagnostics {
        let range = diag.span.clamped(source.len());
        let mut builder = Report::build(report_kind(diag.severity), (label, range.clone()))
            .with_code(diag.id)
            .with_message(&diag.message)
            .with_config(config)
            .with_label(
                Label::new((label, range))
                    .with_message(label_message(diag))
                    .with_color(severity_color(diag.severity)),
            )
            .with_help(diag.explain());
        if let Some(position) = diag.position {
            builder = builder.with_note(position.to_string());
        }
        builder.finish().eprint(&mut cache).ok();
    }
}

// ── Summary line ────────────────────────────────────────────────────────

/// Tallies for the closing summary line.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Tally {
    pub(crate) checked: usize,
    pub(crate) invalid: usize,
    pub(crate) warnings: usize,
}

impl Tally {
    pub(crate) fn record(&mut self, ok: bool, diagnostics: &[Diagnostic]) {
        self.checked += 1;
        if !ok {
            self.invalid += 1;
        }
        self.warnings += diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warn))
            .count();
    }
}

/// Print a coloured summary line, e.g. `3 checked, 1 invalid, 2 warnings`.
pub(crate) fn print_summary(tally: Tally) {
    use ariadne::Fmt;

    let plural = |n: usize| if n == 1 { "" } else { "s" };
    let mut parts = vec![format!("{} checked", tally.checked)];
    if tally.invalid > 0 {
        parts.push(format!("{}", format!("{} invalid", tally.invalid).fg(Color::Red)));
    }
    if tally.warnings > 0 {
        parts.push(format!(
            "{}",
            format!("{} warning{}", tally.warnings, plural(tally.warnings)).fg(Color::Yellow)
        ));
    }
    eprintln!("{}", parts.join(", "));
}

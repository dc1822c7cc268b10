//! Side-by-side comparison of the recognizer with common regex validators.
//!
//! Each input line becomes one Markdown table row with a ✅ or ❌ per
//! checker. The columns are:
//!
//! - `822`: this crate's recognizer, warnings ignored.
//! - `822!`: the recognizer in strict mode (any warning is a failure).
//! - `HTML5`: the WHATWG `input type=email` pattern.
//! - `5322`: a widely copied "RFC 5322" regex. Its lookarounds are not
//!   supported by the `regex` crate and are evaluated as separate length and
//!   dot checks around the match.

use std::sync::LazyLock;

use regex::Regex;
use rfc822_core::{RecognizerConfig, check, is_valid};

/// A named accept/reject predicate over a candidate address.
pub(crate) struct Checker {
    pub(crate) name: &'static str,
    pub(crate) accepts: fn(&str) -> bool,
}

pub(crate) const CHECKERS: &[Checker] = &[
    Checker {
        name: "822",
        accepts: is_valid,
    },
    Checker {
        name: "822!",
        accepts: strict,
    },
    Checker {
        name: "HTML5",
        accepts: html5,
    },
    Checker {
        name: "5322",
        accepts: rfc5322,
    },
];

/// Longest prefix of an input shown in the first column.
const MAX_SHOWN: usize = 70;

fn strict(input: &str) -> bool {
    check(input, &RecognizerConfig::default()).is_clean()
}

static HTML5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .expect("HTML5 pattern is a valid regex")
});

fn html5(input: &str) -> bool {
    HTML5.is_match(input)
}

static RFC5322: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(?P<local>"[^"\\]*(?:\\.[^"\\]*)*""#,
        r"|(?:[0-9a-zA-Z](?:\.|[-!#$%&'*+/=?^`{}|~0-9a-zA-Z_])*)?[0-9a-zA-Z])",
        r"@(?:(?P<literal>\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\])",
        r"|(?P<dotted>(?:[0-9a-zA-Z][-0-9a-zA-Z_]*\.)+[a-zA-Z0-9][-a-zA-Z0-9]{0,22}[a-zA-Z0-9])",
        r"|(?P<single>[0-9a-zA-Z][-0-9a-zA-Z_]*))$",
    ))
    .expect("RFC 5322 pattern is a valid regex")
});

fn rfc5322(input: &str) -> bool {
    if !at_sign_within(input, 64) {
        return false;
    }
    let Some(caps) = RFC5322.captures(input) else {
        return false;
    };
    let local = &caps["local"];
    if !local.starts_with('"') && local.contains("..") {
        return false;
    }
    if let Some(dotted) = caps.name("dotted") {
        let labels: Vec<&str> = dotted.as_str().split('.').collect();
        // The final label is already bounded by the pattern.
        if labels[..labels.len() - 1].iter().any(|l| l.len() > 63) {
            return false;
        }
        dotted.as_str().len() <= 255
    } else if let Some(single) = caps.name("single") {
        single.as_str().len() <= 63
    } else {
        caps.name("literal").is_some()
    }
}

/// An `@` at character position `1..=limit` with no newline before it.
fn at_sign_within(input: &str, limit: usize) -> bool {
    input
        .chars()
        .take(limit + 1)
        .take_while(|&c| c != '\n')
        .enumerate()
        .any(|(i, c)| i >= 1 && c == '@')
}

/// The Markdown header and separator rows.
pub(crate) fn table_header() -> String {
    let names: Vec<&str> = CHECKERS.iter().map(|c| c.name).collect();
    format!(
        "| String | {} |\n|----{}|",
        names.join(" | "),
        "|----".repeat(CHECKERS.len())
    )
}

/// One Markdown row for `line`. The full line is checked; only the shown
/// text is truncated.
pub(crate) fn table_row(line: &str) -> String {
    let shown: String = line.chars().take(MAX_SHOWN).collect();
    let marks: Vec<&str> = CHECKERS
        .iter()
        .map(|c| if (c.accepts)(line) { "✅" } else { "❌" })
        .collect();
    format!(
        "| ``{}`` | {} |",
        shown.replace('|', "\\|"),
        marks.join(" | ")
    )
}

/// Per-checker verdicts for `line`, in column order.
pub(crate) fn verdicts(line: &str) -> Vec<(&'static str, bool)> {
    CHECKERS
        .iter()
        .map(|c| (c.name, (c.accepts)(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html5_pattern() {
        assert!(html5("user@example.com"));
        assert!(html5("a@b"));
        assert!(!html5("\"a\"@b"));
        assert!(!html5("a@-b"));
        assert!(!html5("a(c)@b"));
    }

    #[test]
    fn rfc5322_pattern() {
        assert!(rfc5322("user@example.com"));
        assert!(rfc5322("a@localhost"));
        assert!(rfc5322("a@[1.2.3.4]"));
        assert!(rfc5322("\"a b\"@example.com"));
        assert!(rfc5322("first.last@example.com"));
    }

    #[test]
    fn rfc5322_lookaround_checks() {
        assert!(!rfc5322("a..b@example.com"));
        assert!(rfc5322("\"a..b\"@example.com"));
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!rfc5322(&long_local));
        let long_label = format!("a@{}.com", "b".repeat(64));
        assert!(!rfc5322(&long_label));
        let long_single = format!("a@{}", "b".repeat(64));
        assert!(!rfc5322(&long_single));
        assert!(!rfc5322("@example.com"));
    }

    #[test]
    fn strict_column_rejects_warnings() {
        assert!(strict("a@b.c"));
        assert!(!strict("a(x)@b.c"));
        assert!(!strict("a@b"));
    }

    #[test]
    fn header_lists_every_checker() {
        let header = table_header();
        assert!(header.starts_with("| String | 822 | 822! | HTML5 | 5322 |"));
        assert_eq!(header.lines().nth(1), Some("|----|----|----|----|----|"));
    }

    #[test]
    fn row_escapes_pipes_and_truncates() {
        let row = table_row("a|b@c");
        assert!(row.starts_with("| ``a\\|b@c`` |"));

        let long = "x".repeat(100);
        let row = table_row(&long);
        assert!(row.contains(&"x".repeat(70)));
        assert!(!row.contains(&"x".repeat(71)));
        assert_eq!(row.matches('❌').count(), 4);
    }

    #[test]
    fn verdicts_follow_column_order() {
        let names: Vec<&str> = verdicts("user@example.com").iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["822", "822!", "HTML5", "5322"]);
        assert!(verdicts("user@example.com").iter().all(|(_, ok)| *ok));
        // Single-character top-level labels fail the 5322 pattern only.
        let split: Vec<bool> = verdicts("a@b.c").iter().map(|(_, ok)| *ok).collect();
        assert_eq!(split, [true, true, true, false]);
    }
}

//! Diagnostics for the rfc822 address validator.
//!
//! Every finding is keyed by a catalogued [`Code`]: `ADDR1nnn` for the
//! rejection kinds, `ADDR2nnn` for warnings about legal but unusual syntax.
//! A [`Diagnostic`] ties a code to a byte [`Span`] of the candidate address
//! and, for folded addresses, to a [`FoldPosition`].

#![warn(missing_docs)]

mod code;

pub use code::Code;

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Whether a finding rejects the address or only flags it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The address is not an addr-spec.
    Error,
    /// The address is valid but uses a construct most mail software refuses.
    Warn,
}

impl Severity {
    /// `"error"` or `"warn"`, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open byte range into a candidate address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
}

impl Span {
    /// The bytes `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span {start}..{end} is inverted");
        Self { start, end }
    }

    /// A zero-width span, used where input ended early.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Width in bytes.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// `true` for a zero-width span.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range`, clamped to an input of `len` bytes.
    pub fn clamped(self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        start..self.end.clamp(start, len)
    }
}

/// 1-based line and column of a byte in a folded address.
///
/// An addr-spec is one logical line. Its only legal line breaks are CRLF
/// folds (CRLF followed by a space or tab), so physical lines are split at
/// `"\r\n"` and nowhere else. A bare CR or LF is not a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldPosition {
    /// Physical line, counting folds before the byte.
    pub line: usize,
    /// Byte column within that line.
    pub column: usize,
}

impl FoldPosition {
    /// Position of byte `offset` in `input`.
    ///
    /// Returns `None` when `input` has no CRLF: an unfolded address is a
    /// single line and its offset already says where the byte is. Offsets
    /// past the end are treated as the end.
    pub fn locate(input: &str, offset: usize) -> Option<Self> {
        let bytes = input.as_bytes();
        if !bytes.windows(2).any(|w| w == b"\r\n") {
            return None;
        }
        let end = offset.min(bytes.len());
        let mut line = 1;
        let mut line_start = 0;
        for (i, pair) in bytes[..end].windows(2).enumerate() {
            if pair == b"\r\n" {
                line += 1;
                line_start = i + 2;
            }
        }
        Some(Self {
            line,
            column: end - line_start + 1,
        })
    }
}

impl fmt::Display for FoldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A rejection or warning about one candidate address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Catalogue code, serialized as its `ADDRnnnn` ID.
    pub id: Code,
    /// Always the code's catalogue severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// The offending bytes, or the construct a warning is about.
    pub span: Span,
    /// The offending character as shown to users (`'x'`, `U+00E9`, or
    /// `end of input`). Only rejections that point at a character set it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    /// Where `span` starts, for addresses that contain CRLF folds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<FoldPosition>,
}

impl Diagnostic {
    /// A diagnostic for `code` over `span`.
    pub fn new(code: Code, message: impl Into<String>, span: Span) -> Self {
        Self {
            id: code,
            severity: code.severity(),
            message: message.into(),
            span,
            found: None,
            position: None,
        }
    }

    /// A diagnostic whose message is the catalogue summary, as used for
    /// warnings about observed constructs.
    pub fn observed(code: Code, span: Span) -> Self {
        Self::new(code, code.summary(), span)
    }

    /// Record the offending character.
    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    /// Attach the fold position of `span.start` within `input`.
    pub fn located_in(mut self, input: &str) -> Self {
        self.position = FoldPosition::locate(input, self.span.start);
        self
    }

    /// The catalogue explanation for this diagnostic's code.
    pub fn explain(&self) -> &'static str {
        self.id.explain()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ", self.id, self.severity)?;
        match self.position {
            Some(pos) => write!(f, "{pos}")?,
            None => write!(f, "byte {}", self.span.start)?,
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfolded_input_has_no_position() {
        assert_eq!(FoldPosition::locate("user@host", 4), None);
        assert_eq!(FoldPosition::locate("", 0), None);
        // A bare LF or CR is not a fold.
        assert_eq!(FoldPosition::locate("a\n b@c", 3), None);
        assert_eq!(FoldPosition::locate("a\r b@c", 3), None);
    }

    #[test]
    fn fold_position_counts_crlf_lines() {
        let input = "a\r\n b\r\n\t@c";
        let at = |offset| FoldPosition::locate(input, offset).map(|p| (p.line, p.column));
        assert_eq!(at(0), Some((1, 1)));
        assert_eq!(at(1), Some((1, 2))); // CR
        assert_eq!(at(2), Some((1, 3))); // LF still ends line 1
        assert_eq!(at(3), Some((2, 1))); // fold whitespace
        assert_eq!(at(8), Some((3, 2))); // '@'
        assert_eq!(at(100), Some((3, 4)));
    }

    #[test]
    fn span_helpers() {
        let s = Span::new(2, 5);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert!(Span::point(7).is_empty());
        assert_eq!(s.clamped(10), 2..5);
        assert_eq!(s.clamped(3), 2..3);
        assert_eq!(Span::point(9).clamped(4), 4..4);
    }

    #[test]
    fn severity_comes_from_the_code() {
        let d = Diagnostic::new(Code::MissingAtSign, "missing '@'", Span::point(3));
        assert_eq!(d.severity, Severity::Error);
        let w = Diagnostic::observed(Code::CommentPresent, Span::new(1, 4));
        assert_eq!(w.severity, Severity::Warn);
        assert_eq!(w.message, Code::CommentPresent.summary());
        assert_eq!(w.explain(), Code::CommentPresent.explain());
    }

    #[test]
    fn display_uses_fold_position_when_present() {
        let d = Diagnostic::new(Code::EmptyAtom, "empty atom", Span::new(2, 3));
        assert_eq!(d.to_string(), "ADDR1007 error at byte 2: empty atom");

        let d = Diagnostic::new(Code::MalformedLineFold, "bad fold", Span::point(3)).located_in("a\r\nb@c");
        assert_eq!(d.to_string(), "ADDR1010 error at line 2, column 1: bad fold");
    }

    #[test]
    fn serialized_shape() {
        let d = Diagnostic::new(Code::InvalidCharacter, "invalid character", Span::new(3, 5))
            .with_found("U+00E9");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["id"], "ADDR1002");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["span"], serde_json::json!({ "start": 3, "end": 5 }));
        assert_eq!(json["found"], "U+00E9");
        assert!(json.get("position").is_none());

        let w = Diagnostic::observed(Code::FoldingWhitespace, Span::new(1, 4)).located_in("a\r\n @b");
        let json = serde_json::to_value(&w).unwrap();
        assert!(json.get("found").is_none());
        assert_eq!(json["position"], serde_json::json!({ "line": 1, "column": 2 }));
    }
}

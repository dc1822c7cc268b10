//! Rejection taxonomy for the address recognizer.

use serde::Serialize;

use super::diag::{Code, Diagnostic, Span};

/// Why an input is not an addr-spec.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The input has zero length.
    #[error("empty input")]
    EmptyInput,
    /// A non-ASCII byte, or a control character outside a quoted-pair.
    #[error("invalid character")]
    InvalidCharacter,
    /// Input ended inside a quoted-string.
    #[error("unterminated quoted-string")]
    UnterminatedQuotedString,
    /// Input ended inside a domain-literal.
    #[error("unterminated domain-literal")]
    UnterminatedDomainLiteral,
    /// Input ended inside a comment.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A `)` with no matching `(`.
    #[error("unbalanced comment delimiter")]
    UnbalancedComment,
    /// A word or sub-domain had no characters.
    #[error("empty atom")]
    EmptyAtom,
    /// The local-part was not followed by `@`.
    #[error("missing '@' after local-part")]
    MissingAtSign,
    /// Something other than comments or whitespace follows the domain.
    #[error("trailing characters after domain")]
    TrailingGarbage,
    /// A CRLF was not followed by a space or tab.
    #[error("line fold not followed by whitespace")]
    MalformedLineFold,
    /// Comment nesting exceeded [`RecognizerConfig::max_comment_depth`](crate::RecognizerConfig).
    #[error("comments nested too deeply")]
    CommentTooDeep,
    /// Input exceeded [`RecognizerConfig::max_input_len`](crate::RecognizerConfig).
    #[error("input too long")]
    InputTooLong,
}

impl RejectionKind {
    /// Catalogue code for this kind (e.g. [`Code::EmptyAtom`], `ADDR1007`).
    pub fn code(self) -> Code {
        match self {
            Self::EmptyInput => Code::EmptyInput,
            Self::InvalidCharacter => Code::InvalidCharacter,
            Self::UnterminatedQuotedString => Code::UnterminatedQuotedString,
            Self::UnterminatedDomainLiteral => Code::UnterminatedDomainLiteral,
            Self::UnterminatedComment => Code::UnterminatedComment,
            Self::UnbalancedComment => Code::UnbalancedComment,
            Self::EmptyAtom => Code::EmptyAtom,
            Self::MissingAtSign => Code::MissingAtSign,
            Self::TrailingGarbage => Code::TrailingGarbage,
            Self::MalformedLineFold => Code::MalformedLineFold,
            Self::CommentTooDeep => Code::CommentTooDeep,
            Self::InputTooLong => Code::InputTooLong,
        }
    }

    /// Snake-case name, as used in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidCharacter => "invalid_character",
            Self::UnterminatedQuotedString => "unterminated_quoted_string",
            Self::UnterminatedDomainLiteral => "unterminated_domain_literal",
            Self::UnterminatedComment => "unterminated_comment",
            Self::UnbalancedComment => "unbalanced_comment",
            Self::EmptyAtom => "empty_atom",
            Self::MissingAtSign => "missing_at_sign",
            Self::TrailingGarbage => "trailing_garbage",
            Self::MalformedLineFold => "malformed_line_fold",
            Self::CommentTooDeep => "comment_too_deep",
            Self::InputTooLong => "input_too_long",
        }
    }
}

/// The first grammar violation found in an input.
///
/// `offset` is a byte offset. Since every non-ASCII byte is itself a
/// rejection point, it is also the character index of the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct Rejection {
    /// What went wrong.
    pub kind: RejectionKind,
    /// Where it was detected.
    pub offset: usize,
}

impl Rejection {
    /// Create a rejection of `kind` at byte `offset`.
    pub fn new(kind: RejectionKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Convert into an error [`Diagnostic`] against the rejected `input`.
    ///
    /// Grammar violations point at the offending character, or at an empty
    /// span where the input ended early, and name it in `found`. The two
    /// whole-input rejections, empty input and the length limit, cover the
    /// whole input and name no character.
    pub fn to_diagnostic(&self, input: &str) -> Diagnostic {
        let code = self.kind.code();
        match self.kind {
            RejectionKind::EmptyInput => Diagnostic::new(code, self.kind.to_string(), Span::point(0)),
            RejectionKind::InputTooLong => Diagnostic::new(
                code,
                format!(
                    "{}: {} bytes, limit is {}",
                    self.kind,
                    input.len(),
                    self.offset
                ),
                Span::new(0, input.len()),
            ),
            _ => {
                let found = input.get(self.offset..).and_then(|rest| rest.chars().next());
                let (span, found) = match found {
                    Some(c) => (
                        Span::new(self.offset, self.offset + c.len_utf8()),
                        describe_char(c),
                    ),
                    None => (
                        Span::point(self.offset.min(input.len())),
                        "end of input".to_string(),
                    ),
                };
                Diagnostic::new(code, format!("{}, found {found}", self.kind), span)
                    .with_found(found)
                    .located_in(input)
            }
        }
    }
}

/// Printable ASCII is quoted as-is, everything else as a code point.
fn describe_char(c: char) -> String {
    if c.is_ascii_graphic() || c == ' ' {
        format!("'{c}'")
    } else {
        format!("U+{:04X}", c as u32)
    }
}

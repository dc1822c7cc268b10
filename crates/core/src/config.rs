//! Recognizer configuration.

/// Optional resource ceilings for the recognizer.
///
/// The grammar itself is unbounded. Both limits default to `None`, which
/// recognizes exactly the addr-spec grammar. Setting a limit adds the
/// corresponding rejection ([`CommentTooDeep`] or [`InputTooLong`]) for
/// callers that need bounded work on hostile input.
///
/// [`CommentTooDeep`]: crate::RejectionKind::CommentTooDeep
/// [`InputTooLong`]: crate::RejectionKind::InputTooLong
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Maximum nesting depth of comments. `Some(0)` forbids comments.
    pub max_comment_depth: Option<usize>,
    /// Maximum input length in bytes.
    pub max_input_len: Option<usize>,
}

impl RecognizerConfig {
    /// Limit comment nesting to `depth` levels.
    pub fn with_max_comment_depth(mut self, depth: usize) -> Self {
        self.max_comment_depth = Some(depth);
        self
    }

    /// Reject inputs longer than `len` bytes before parsing them.
    pub fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = Some(len);
        self
    }
}

use super::{
    chars,
    diag::Span,
    rejection::{Rejection, RejectionKind::*, RejectionKind},
};
use crate::config::RecognizerConfig;

type Step = Result<(), Rejection>;

// ─── Public API ─────────────────────────────────────────────────────────────

/// Validate `input` as an addr-spec with the default (unbounded) configuration.
///
/// Returns the first grammar violation on rejection. The function is pure:
/// calling it again on the same input gives the same answer.
///
/// ```
/// use rfc822_core::{RejectionKind, validate};
///
/// assert!(validate("john.doe(home)@example.com").is_ok());
/// assert_eq!(validate("a..b@c").unwrap_err().kind, RejectionKind::EmptyAtom);
/// ```
pub fn validate(input: &str) -> Result<(), Rejection> {
    validate_with_config(input, &RecognizerConfig::default())
}

/// Validate `input` as an addr-spec, honoring the limits in `config`.
pub fn validate_with_config(input: &str, config: &RecognizerConfig) -> Result<(), Rejection> {
    recognize(input, config).map(|_| ())
}

/// Shorthand for `validate(input).is_ok()`.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Run the recognizer and return what it saw along the way.
pub(crate) fn recognize(input: &str, config: &RecognizerConfig) -> Result<Observations, Rejection> {
    let mut recognizer = Recognizer::new(input, config);
    match recognizer.addr_spec() {
        Ok(()) => Ok(recognizer.observed),
        Err(rejection) => {
            tracing::trace!(
                kind = rejection.kind.name(),
                offset = rejection.offset,
                "address rejected"
            );
            Err(rejection)
        }
    }
}

/// First occurrence of each optional construct in an accepted address.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Observations {
    pub(crate) comment: Option<Span>,
    pub(crate) whitespace: Option<Span>,
    pub(crate) quoted_string: Option<Span>,
    pub(crate) domain_literal: Option<Span>,
    pub(crate) quoted_pair: Option<Span>,
    pub(crate) single_label_domain: Option<Span>,
}

// ─── Recognizer Implementation ─────────────────────────────────────────────

/// One method per grammar production. Every method starts at the first byte
/// of its production and leaves `pos` just past it.
struct Recognizer<'a> {
    input: &'a [u8],
    pos: usize,
    config: &'a RecognizerConfig,
    observed: Observations,
}

impl<'a> Recognizer<'a> {
    fn new(input: &'a str, config: &'a RecognizerConfig) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            config,
            observed: Observations::default(),
        }
    }

    // ── Cursor helpers ──────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Reject at the cursor. An illegal byte or a stray `)` outranks the
    /// structural `kind` the caller was expecting.
    fn unexpected(&self, kind: RejectionKind) -> Rejection {
        let kind = match self.peek() {
            Some(b) if !b.is_ascii() || chars::is_ctl(b) => InvalidCharacter,
            Some(b')') => UnbalancedComment,
            _ => kind,
        };
        Rejection::new(kind, self.pos)
    }

    // ── addr-spec = local-part "@" domain ───────────────────────────────

    fn addr_spec(&mut self) -> Step {
        if self.input.is_empty() {
            return Err(Rejection::new(EmptyInput, 0));
        }
        if let Some(max) = self.config.max_input_len
            && self.input.len() > max
        {
            return Err(Rejection::new(InputTooLong, max));
        }

        self.skip_cfws()?;
        self.local_part()?;
        if self.peek() != Some(b'@') {
            return Err(self.unexpected(MissingAtSign));
        }
        self.pos += 1;
        self.skip_cfws()?;
        self.domain()?;

        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected(TrailingGarbage))
        }
    }

    /// `word *("." word)`, including the CFWS after the last word.
    fn local_part(&mut self) -> Step {
        self.word()?;
        self.skip_cfws()?;
        while self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_cfws()?;
            self.word()?;
            self.skip_cfws()?;
        }
        Ok(())
    }

    fn word(&mut self) -> Step {
        if self.peek() == Some(b'"') {
            let start = self.pos;
            self.delimited(b'"', chars::is_qtext, UnterminatedQuotedString)?;
            self.observed
                .quoted_string
                .get_or_insert(Span::new(start, self.pos));
            Ok(())
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Step {
        let start = self.pos;
        while self.peek().is_some_and(chars::is_atom_char) {
            self.pos += 1;
        }
        if self.pos == start {
            Err(self.unexpected(EmptyAtom))
        } else {
            Ok(())
        }
    }

    /// `sub-domain *("." sub-domain)`, including trailing CFWS.
    fn domain(&mut self) -> Step {
        let start = self.pos;
        self.sub_domain()?;
        let first_end = self.pos;
        self.skip_cfws()?;
        let mut labels = 1usize;
        while self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_cfws()?;
            self.sub_domain()?;
            self.skip_cfws()?;
            labels += 1;
        }
        if labels == 1 {
            self.observed.single_label_domain = Some(Span::new(start, first_end));
        }
        Ok(())
    }

    fn sub_domain(&mut self) -> Step {
        if self.peek() == Some(b'[') {
            let start = self.pos;
            self.delimited(b']', chars::is_dtext, UnterminatedDomainLiteral)?;
            self.observed
                .domain_literal
                .get_or_insert(Span::new(start, self.pos));
            Ok(())
        } else {
            self.atom()
        }
    }

    // ── Quoted constructs ───────────────────────────────────────────────

    /// Scan a quoted-string or domain-literal whose opening delimiter is at
    /// the cursor, up to and including the unescaped `close`.
    fn delimited(&mut self, close: u8, is_text: fn(u8) -> bool, unterminated: RejectionKind) -> Step {
        self.pos += 1;
        loop {
            let Some(b) = self.peek() else {
                return Err(Rejection::new(unterminated, self.pos));
            };
            match b {
                _ if b == close => {
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => self.quoted_pair(unterminated)?,
                b'\r' => self.line_fold()?,
                b'\t' => self.pos += 1,
                _ if is_text(b) => self.pos += 1,
                _ => return Err(Rejection::new(InvalidCharacter, self.pos)),
            }
        }
    }

    /// `"\" CHAR`. Any 7-bit byte may be escaped, including CR and NUL.
    fn quoted_pair(&mut self, unterminated: RejectionKind) -> Step {
        let start = self.pos;
        self.pos += 1;
        match self.peek() {
            None => Err(Rejection::new(unterminated, self.pos)),
            Some(b) if b.is_ascii() => {
                self.pos += 1;
                self.observed
                    .quoted_pair
                    .get_or_insert(Span::new(start, self.pos));
                Ok(())
            }
            Some(_) => Err(Rejection::new(InvalidCharacter, self.pos)),
        }
    }

    /// A CRLF fold at the cursor. Consumes CR, LF and the first whitespace
    /// byte that must follow them.
    fn line_fold(&mut self) -> Step {
        let cr = self.pos;
        if self.input.get(cr + 1) != Some(&b'\n') {
            return Err(Rejection::new(InvalidCharacter, cr));
        }
        match self.input.get(cr + 2) {
            Some(&b) if chars::is_lwsp(b) => {
                self.pos = cr + 3;
                Ok(())
            }
            _ => Err(Rejection::new(MalformedLineFold, cr + 2)),
        }
    }

    // ── CFWS ────────────────────────────────────────────────────────────

    /// Skip any mix of whitespace, CRLF folds and comments.
    fn skip_cfws(&mut self) -> Step {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r') => {
                    let start = self.pos;
                    while let Some(b) = self.peek() {
                        match b {
                            b' ' | b'\t' => self.pos += 1,
                            b'\r' => self.line_fold()?,
                            _ => break,
                        }
                    }
                    self.observed
                        .whitespace
                        .get_or_insert(Span::new(start, self.pos));
                }
                Some(b'(') => self.comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// A comment, with nesting tracked by a counter rather than recursion so
    /// that deep nesting costs no stack.
    fn comment(&mut self) -> Step {
        let start = self.pos;
        let mut depth = 0usize;
        loop {
            let Some(b) = self.peek() else {
                return Err(Rejection::new(UnterminatedComment, self.pos));
            };
            match b {
                b'(' => {
                    depth += 1;
                    if let Some(max) = self.config.max_comment_depth
                        && depth > max
                    {
                        return Err(Rejection::new(CommentTooDeep, self.pos));
                    }
                    self.pos += 1;
                }
                b')' => {
                    self.pos += 1;
                    depth -= 1;
                    if depth == 0 {
                        self.observed
                            .comment
                            .get_or_insert(Span::new(start, self.pos));
                        return Ok(());
                    }
                }
                b'\\' => self.quoted_pair(UnterminatedComment)?,
                b'\r' => self.line_fold()?,
                b'\t' => self.pos += 1,
                _ if chars::is_ctext(b) => self.pos += 1,
                _ => return Err(Rejection::new(InvalidCharacter, self.pos)),
            }
        }
    }
}

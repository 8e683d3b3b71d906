use crate::ByteSpan;
use crate::token::EdmType;
use crate::token::ODataTokenKind;
use crate::token::ODataTokenValue;
use std::borrow::Cow;

/// The result of a successful recognizer: the matched span, the
/// semantic value, and the grammar category that produced it.
///
/// Tokens are immutable once built. Every recognizer constructs its
/// result through [`tokenize()`], so every token has the same shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ODataToken<'src> {
    /// The grammar category that produced this token.
    pub kind: ODataTokenKind,

    /// The matched bytes, `[start, next)`.
    pub span: ByteSpan,

    /// The semantic payload.
    pub value: ODataTokenValue<'src>,
}

impl<'src> ODataToken<'src> {
    /// Offset of the first matched byte. Always equal to the index the
    /// recognizer was called with.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Offset immediately after the match, where the caller resumes.
    #[inline]
    pub fn next(&self) -> usize {
        self.span.end
    }

    /// Returns the type tag if this token's value is a plain tag.
    pub fn edm_type(&self) -> Option<EdmType> {
        match &self.value {
            ODataTokenValue::Edm(edm_type) => Some(*edm_type),
            _ => None,
        }
    }

    /// Returns the bytes this token spans within `source`.
    ///
    /// `source` must be the buffer the token was recognized in.
    pub fn text<'a>(&self, source: &'a [u8]) -> &'a [u8] {
        &source[self.span.start..self.span.end]
    }

    /// Builds a new token covering the same span with a different type
    /// tag. The original token is consumed, never modified.
    pub fn with_edm_type(self, edm_type: EdmType) -> Self {
        Self {
            kind: self.kind,
            span: self.span,
            value: ODataTokenValue::Edm(edm_type),
        }
    }

    /// Builds a new token covering the same span and value with a
    /// different kind.
    pub fn with_kind(self, kind: ODataTokenKind) -> Self {
        Self {
            kind,
            span: self.span,
            value: self.value,
        }
    }
}

/// Builds the token for a successful match of `source[start..next]`.
///
/// This is the single exit point for every recognizer. It performs no
/// validation of the value.
///
/// # Panics
///
/// Panics if `next < start` or `next > source.len()`. Either indicates
/// a recognizer bug, not malformed input.
#[inline]
pub fn tokenize<'src>(
    source: &[u8],
    start: usize,
    next: usize,
    value: ODataTokenValue<'src>,
    kind: ODataTokenKind,
) -> ODataToken<'src> {
    assert!(
        start <= next,
        "recognizer reported a match ending at {next} before its start {start}",
    );
    assert!(
        next <= source.len(),
        "recognizer reported a match ending at {next} past the end of a \
        {}-byte source",
        source.len(),
    );
    ODataToken {
        kind,
        span: ByteSpan::new(start, next),
        value,
    }
}

/// Borrows `source[start..end]` as text, or `None` if those bytes are
/// not valid UTF-8.
#[inline]
pub fn source_text(source: &[u8], start: usize, end: usize) -> Option<Cow<'_, str>> {
    std::str::from_utf8(&source[start..end]).ok().map(Cow::Borrowed)
}

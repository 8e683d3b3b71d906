/// Compact byte-offset span.
///
/// Represents a half-open interval `[start, end)` of byte offsets
/// into the source buffer a recognizer was run against. Both offsets
/// are 0-based, and `end` is the offset at which a caller resumes
/// parsing after a successful match.
///
/// Offsets are `usize` because recognizers index the source buffer
/// directly; a span is never stored long enough for its width to
/// matter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ByteSpan {
    /// Byte offset of the first matched byte (0-based, inclusive).
    pub start: usize,
    /// Byte offset one past the last matched byte (0-based,
    /// exclusive).
    pub end: usize,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end
    /// (exclusive) byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

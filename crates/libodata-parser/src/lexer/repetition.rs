//! Bounded repetition and fixed-text matching over a byte buffer.

/// Returns the byte at `index`, or `None` past the end of `source`.
#[inline]
pub fn byte_at(source: &[u8], index: usize) -> Option<u8> {
    source.get(index).copied()
}

/// Returns `true` if the byte at `index` exists and satisfies
/// `predicate`.
#[inline]
pub fn byte_is(source: &[u8], index: usize, predicate: fn(u8) -> bool) -> bool {
    byte_at(source, index).is_some_and(predicate)
}

/// Matches a run of bytes satisfying `predicate` starting at `index`.
///
/// Consumes as many bytes as possible up to `max` (unbounded when
/// `None`) and returns the offset after the run, or `None` if fewer
/// than `min` bytes matched. A byte beyond `max` that would also
/// satisfy `predicate` is left unconsumed; callers that must reject
/// such input check the following byte themselves.
///
/// With `min == 0` an empty run is a successful match that returns
/// `index` itself.
pub fn required(
    source: &[u8],
    index: usize,
    predicate: fn(u8) -> bool,
    min: usize,
    max: Option<usize>,
) -> Option<usize> {
    let remaining = source.get(index..).unwrap_or_default();
    let limit = max.unwrap_or(usize::MAX);
    let count = remaining
        .iter()
        .take(limit)
        .take_while(|&&byte| predicate(byte))
        .count();
    if count >= min {
        Some(index + count)
    } else {
        None
    }
}

/// Returns `true` if `source` contains exactly `literal` at `index`.
/// The comparison is case-sensitive.
#[inline]
pub fn equals(source: &[u8], index: usize, literal: &str) -> bool {
    source
        .get(index..)
        .is_some_and(|rest| rest.starts_with(literal.as_bytes()))
}

/// Matches `expected` at `index`, returning the offset after it.
#[inline]
pub fn exact(source: &[u8], index: usize, expected: &str) -> Option<usize> {
    equals(source, index, expected).then(|| index + expected.len())
}

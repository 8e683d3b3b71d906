use crate::recognizer::Recognizer;
use crate::token::EdmType;

/// Runs `recognizer` at offset 0 and returns the matched span end and
/// type tag, or `None` on no match.
pub(super) fn match_at_start(
    recognizer: Recognizer,
    source: &str,
) -> Option<(usize, Option<EdmType>)> {
    recognizer(source.as_bytes(), 0).map(|token| {
        assert_eq!(token.start(), 0);
        (token.next(), token.edm_type())
    })
}

/// Asserts that `recognizer` consumes all of `source` and tags the
/// token `expected`.
#[track_caller]
pub(super) fn assert_full_match(recognizer: Recognizer, source: &str, expected: EdmType) {
    assert_eq!(
        match_at_start(recognizer, source),
        Some((source.len(), Some(expected))),
        "{source:?}",
    );
}

/// Asserts that `recognizer` does not match at offset 0.
#[track_caller]
pub(super) fn assert_no_match(recognizer: Recognizer, source: &str) {
    assert_eq!(match_at_start(recognizer, source), None, "{source:?}");
}

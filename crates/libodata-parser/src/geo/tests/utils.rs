use crate::token::ODataToken;
use crate::token::ODataTokenValue;

/// Returns the child list of an `Items` token.
#[track_caller]
pub(super) fn items<'a, 'src>(token: &'a ODataToken<'src>) -> &'a [ODataToken<'src>] {
    match &token.value {
        ODataTokenValue::Items(items) => items,
        other => panic!("expected Items, got {other:?}"),
    }
}

/// Returns the inner token of a `Nested` token.
#[track_caller]
pub(super) fn nested<'a, 'src>(token: &'a ODataToken<'src>) -> &'a ODataToken<'src> {
    match &token.value {
        ODataTokenValue::Nested(inner) => inner,
        other => panic!("expected Nested, got {other:?}"),
    }
}

//! Deeply nested `Collection(...)` literals.
//!
//! A collection may contain collections, so the rule is self-recursive.
//! Nesting is bounded by `MAX_RECURSION_DEPTH`; anything deeper must be
//! an ordinary no match rather than a stack overflow.

use crate::geo::collection_literal;
use crate::geo::geo_literal;
use crate::geo::geography_collection;
use crate::literal::primitive_literal;
use crate::recognizer::MAX_RECURSION_DEPTH;

fn nested_collections(depth: usize) -> String {
    format!(
        "{}Point(1.0 2.0){}",
        "Collection(".repeat(depth),
        ")".repeat(depth),
    )
}

/// Verifies that collections nested exactly to the limit still match.
#[test]
fn collections_at_depth_limit_match() {
    let source = nested_collections(MAX_RECURSION_DEPTH);
    let token = collection_literal(source.as_bytes(), 0).unwrap();
    assert_eq!(token.next(), source.len());
}

/// Verifies that one level past the limit is no match.
#[test]
fn collections_past_depth_limit_do_not_match() {
    let source = nested_collections(MAX_RECURSION_DEPTH + 1);
    assert!(collection_literal(source.as_bytes(), 0).is_none());
    assert!(geo_literal(source.as_bytes(), 0).is_none());
}

/// Verifies that a huge run of unclosed collections is no match.
///
/// Previously this recursed once per `Collection(` and overflowed the
/// stack.
#[test]
fn unclosed_collection_run_does_not_overflow() {
    let source = "Collection(".repeat(200_000);
    assert!(geo_literal(source.as_bytes(), 0).is_none());

    let typed = format!("geography'SRID=0;{source}");
    assert!(geography_collection(typed.as_bytes(), 0).is_none());
    assert!(primitive_literal(typed.as_bytes(), 0).is_none());
}

/// Verifies that the nesting count is released after a failed deep
/// match, so later matches on the same thread see the full limit.
#[test]
fn depth_is_released_after_failure() {
    let too_deep = nested_collections(MAX_RECURSION_DEPTH + 1);
    assert!(geo_literal(too_deep.as_bytes(), 0).is_none());

    let at_limit = nested_collections(MAX_RECURSION_DEPTH);
    assert!(geo_literal(at_limit.as_bytes(), 0).is_some());
}

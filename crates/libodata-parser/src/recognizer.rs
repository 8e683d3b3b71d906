//! The uniform recognizer signature and ordered-alternative dispatch.

use crate::token::ODataToken;
use std::cell::Cell;

/// A grammar rule: given a source buffer and an offset, either returns
/// the token matched at exactly that offset or `None` without any
/// observable effect.
///
/// Recognizers are plain function pointers so that grammar factories
/// (spatial lists, JSON key/value pairs) can be parameterized by other
/// rules without capturing state.
pub type Recognizer = for<'src> fn(&'src [u8], usize) -> Option<ODataToken<'src>>;

/// A recognizer together with the grammar rule name it implements.
#[derive(Clone, Copy)]
pub struct NamedRecognizer {
    /// The ABNF rule name (e.g. `"int32Value"`).
    pub name: &'static str,
    pub recognize: Recognizer,
}

impl NamedRecognizer {
    pub const fn new(name: &'static str, recognize: Recognizer) -> Self {
        Self { name, recognize }
    }
}

impl std::fmt::Debug for NamedRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamedRecognizer").field(&self.name).finish()
    }
}

/// Tries each alternative in order at `index` and returns the first
/// match. Later alternatives are not evaluated once one matches.
pub fn first_match<'src>(
    source: &'src [u8],
    index: usize,
    alternatives: &[NamedRecognizer],
) -> Option<ODataToken<'src>> {
    alternatives
        .iter()
        .find_map(|alternative| (alternative.recognize)(source, index))
}

/// Like [`first_match()`], but also reports which alternative matched.
pub fn first_match_named<'src>(
    source: &'src [u8],
    index: usize,
    alternatives: &[NamedRecognizer],
) -> Option<(&'static str, ODataToken<'src>)> {
    alternatives.iter().find_map(|alternative| {
        (alternative.recognize)(source, index).map(|token| (alternative.name, token))
    })
}

/// Maximum nesting depth of the self-recursive rules (`Collection(...)`
/// inside a collection, JSON objects inside objects).
///
/// Deeper input is no match instead of exhausting the stack. Real
/// spatial collections and JSON-in-URI values nest a handful of levels.
pub const MAX_RECURSION_DEPTH: usize = 64;

thread_local! {
    static RECURSION_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// One level of nesting in a self-recursive rule, held for the duration
/// of the nested match and released on drop.
///
/// The depth is per thread and returns to its prior value when the
/// guard drops, so recognizers stay free of observable side effects.
#[must_use]
pub(crate) struct RecursionGuard {
    _private: (),
}

impl RecursionGuard {
    /// Enters one level of nesting, or `None` once
    /// [`MAX_RECURSION_DEPTH`] levels are already active.
    pub(crate) fn enter() -> Option<Self> {
        RECURSION_DEPTH.with(|depth| {
            let current = depth.get();
            if current >= MAX_RECURSION_DEPTH {
                return None;
            }
            depth.set(current + 1);
            Some(Self { _private: () })
        })
    }
}

impl Drop for RecursionGuard {
    fn drop(&mut self) {
        RECURSION_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

use crate::lexer::byte_at;
use crate::lexer::close;
use crate::lexer::comma;
use crate::lexer::pchar_no_squote;
use crate::lexer::rws;
use crate::lexer::squote;
use crate::literal::edm_literal;
use crate::token::EdmType;
use crate::token::ODataToken;

/// `string = SQUOTE *( SQUOTE-in-string / pchar-no-SQUOTE ) SQUOTE`
///
/// where `SQUOTE-in-string = SQUOTE SQUOTE` is an embedded quote.
/// Whitespace (`RWS`) is also allowed inside the quotes. Any form of
/// SQUOTE (`'` or `%27`) can open, close or escape.
///
/// An unterminated string is no match. So is a closing quote that runs
/// straight into another path character (as in `'a'b`), unless that
/// character is `&`, `)` or `,`, or whitespace follows.
pub fn string_value(source: &[u8], index: usize) -> Option<ODataToken<'_>> {
    let mut cursor = squote(source, index)?;
    loop {
        if let Some(after_quote) = squote(source, cursor) {
            if let Some(after_escape) = squote(source, after_quote) {
                cursor = after_escape;
                continue;
            }
            if runs_into_path_char(source, after_quote) {
                return None;
            }
            return Some(edm_literal(source, index, after_quote, EdmType::String));
        }

        // The longer of a whitespace run and a single path char (which
        // can be a 3-byte percent-encoding).
        let next = match (rws(source, cursor), pchar_no_squote(source, cursor)) {
            (Some(a), Some(b)) => a.max(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => return None,
        };
        cursor = next;
    }
}

fn runs_into_path_char(source: &[u8], index: usize) -> bool {
    pchar_no_squote(source, index).is_some()
        && byte_at(source, index) != Some(b'&')
        && close(source, index).is_none()
        && comma(source, index).is_none()
        && rws(source, index).is_none()
}

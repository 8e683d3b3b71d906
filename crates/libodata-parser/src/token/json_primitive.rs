use std::borrow::Cow;

/// The extracted value of a JSON primitive embedded in a URI or a
/// request body.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum JsonPrimitive<'src> {
    /// The raw text between the quotation marks. Escape sequences and
    /// percent-encodings are left exactly as written.
    ///
    /// Always borrowed from the source; a body that is not valid UTF-8
    /// is not a string.
    String(Cow<'src, str>),
    Number(f64),
    Boolean(bool),
    Null,
}

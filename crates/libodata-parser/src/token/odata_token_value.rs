use crate::token::EdmType;
use crate::token::JsonPrimitive;
use crate::token::ODataToken;
use std::borrow::Cow;

/// Storage for the child tokens of list-shaped literals (spatial item
/// lists, JSON arrays and objects, enumeration members). Children live
/// on the heap since a token may contain tokens of its own type.
pub type ODataTokenVec<'src> = Vec<ODataToken<'src>>;

/// The semantic payload of an [`ODataToken`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ODataTokenValue<'src> {
    /// The untyped `null` literal.
    Null,

    /// A primitive literal, identified by its type tag.
    Edm(EdmType),

    /// A `longitude latitude` pair. Both coordinates are
    /// `Edm.Double` tokens.
    Position {
        longitude: Box<ODataToken<'src>>,
        latitude: Box<ODataToken<'src>>,
    },

    /// A token that wraps exactly one inner token (e.g. `Point(...)`
    /// wraps its point data, which wraps its position).
    Nested(Box<ODataToken<'src>>),

    /// An ordered list of child tokens. An empty list is still a match.
    Items(ODataTokenVec<'src>),

    /// The numeric spatial reference identifier of an `SRID=n;` prefix.
    Srid(u32),

    /// A spatial literal qualified by its SRID prefix.
    FullGeo {
        srid: Box<ODataToken<'src>>,
        value: Box<ODataToken<'src>>,
    },

    /// A qualified enumeration literal and its members.
    Enum {
        type_name: Cow<'src, str>,
        members: ODataTokenVec<'src>,
    },

    /// A name: an identifier, an enumeration member or an annotation
    /// term (without the leading `@`).
    Identifier(Cow<'src, str>),

    /// A `"key":value` pair inside a JSON object.
    KeyValue {
        key: Box<ODataToken<'src>>,
        value: Box<ODataToken<'src>>,
    },

    /// A JSON primitive.
    Json(JsonPrimitive<'src>),
}

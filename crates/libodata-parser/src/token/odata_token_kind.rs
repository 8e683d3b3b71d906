/// The grammar category that produced an [`ODataToken`](crate::token::ODataToken).
///
/// Downstream consumers use the kind to decide how to interpret the
/// token's [`value`](crate::token::ODataTokenValue).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ODataTokenKind {
    /// A primitive, temporal, binary, spatial or JSON primitive literal,
    /// or one of the nested pieces of a spatial literal.
    Literal,

    // =========================================================================
    // Enumerations
    // =========================================================================
    /// A complete `Namespace.EnumType'Member,...'` literal.
    Enum,
    /// A symbolic enumeration member (`Red`).
    EnumMember,
    /// A numeric enumeration member (`4`).
    EnumMemberValue,

    // =========================================================================
    // Names
    // =========================================================================
    /// A simple OData identifier.
    Identifier,
    /// An `@Namespace.Term` annotation name.
    AnnotationTerm,

    // =========================================================================
    // JSON-in-URI structures
    // =========================================================================
    /// A `"name":value` member of a JSON object.
    Property,
    /// A `"@Namespace.Term":value` member of a JSON object.
    Annotation,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
    /// The outer wrapper produced by `array_or_object`.
    ArrayOrObject,
}

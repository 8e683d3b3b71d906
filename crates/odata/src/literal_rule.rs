use libodata_parser::geo::GEO_LITERAL_ALTERNATIVES;
use libodata_parser::geo::geo_literal;
use libodata_parser::json::ARRAY_OR_OBJECT_ALTERNATIVES;
use libodata_parser::json::JSON_VALUE_ALTERNATIVES;
use libodata_parser::json::array_or_object;
use libodata_parser::json::json_value;
use libodata_parser::literal::PRIMITIVE_LITERAL_ALTERNATIVES;
use libodata_parser::literal::primitive_literal;
use libodata_parser::recognizer::NamedRecognizer;
use libodata_parser::recognizer::Recognizer;

/// The grammar rule a command matches its input against.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum LiteralRule {
    /// Any EDM primitive literal, including typed spatial literals.
    #[default]
    Primitive,
    /// An untyped spatial literal (`Point(...)`, `Collection(...)`, ...).
    Geo,
    /// A JSON object, array or primitive.
    Json,
    /// A JSON object or array.
    ArrayOrObject,
}

impl LiteralRule {
    pub(crate) fn recognizer(self) -> Recognizer {
        match self {
            Self::Primitive => primitive_literal,
            Self::Geo => geo_literal,
            Self::Json => json_value,
            Self::ArrayOrObject => array_or_object,
        }
    }

    /// The ordered alternatives behind this rule, used to report which
    /// one matched.
    pub(crate) fn alternatives(self) -> &'static [NamedRecognizer] {
        match self {
            Self::Primitive => PRIMITIVE_LITERAL_ALTERNATIVES,
            Self::Geo => GEO_LITERAL_ALTERNATIVES,
            Self::Json => JSON_VALUE_ALTERNATIVES,
            Self::ArrayOrObject => ARRAY_OR_OBJECT_ALTERNATIVES,
        }
    }
}

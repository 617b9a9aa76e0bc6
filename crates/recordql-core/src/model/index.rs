use crate::IDENTIFIER_EXPR;

///
/// IndexTarget
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum IndexTarget {
    Column(String),
    /// The engine's intrinsic row identifier.
    Identifier,
}

impl IndexTarget {
    /// Expression placed inside `ON <table> (...)`.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::Column(name) => name,
            Self::Identifier => IDENTIFIER_EXPR,
        }
    }
}

///
/// IndexDirective
///
/// One index requested by a field tag.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IndexDirective {
    pub name: String,
    pub unique: bool,
    pub target: IndexTarget,
}

use crate::{model::IndexDirective, types::ColumnType};

///
/// FieldDescriptor
///
/// Derived per eligible field by the layout pass; never persisted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub source_name: &'static str,
    /// Declaration position in `RecordType::fields`.
    pub position: usize,
    pub column_name: String,
    pub column_type: ColumnType,
    pub nullable: bool,
    /// Stands in for the intrinsic row identifier and produces no column.
    pub is_identifier_alias: bool,
    pub index: Option<IndexDirective>,
}

impl FieldDescriptor {
    /// Whether this field materializes as a table column.
    #[must_use]
    pub const fn is_column(&self) -> bool {
        !self.is_identifier_alias
    }
}

use crate::{schema::TableLayout, types::ColumnType};

///
/// ColumnRow
///
/// What the engine's `__Column` table holds for one column once the DDL ran.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnRow {
    pub table: String,
    /// 1-based column position.
    pub ordinal: usize,
    pub name: String,
    pub ty: ColumnType,
}

///
/// IndexRow
///
/// What the engine's `__Index` table holds for one index once the DDL ran.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexRow {
    pub table: String,
    /// Column name, or `id()` for identifier indexes.
    pub column: String,
    pub name: String,
    pub unique: bool,
}

impl TableLayout {
    #[must_use]
    pub fn column_rows(&self, table: &str) -> Vec<ColumnRow> {
        self.columns()
            .enumerate()
            .map(|(i, col)| ColumnRow {
                table: table.to_string(),
                ordinal: i + 1,
                name: col.column_name.clone(),
                ty: col.column_type,
            })
            .collect()
    }

    #[must_use]
    pub fn index_rows(&self, table: &str) -> Vec<IndexRow> {
        self.indexes()
            .map(|index| IndexRow {
                table: table.to_string(),
                column: index.target.expression().to_string(),
                name: index.name.clone(),
                unique: index.unique,
            })
            .collect()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::{
        model::FieldDef,
        schema::TableLayout,
        test_support::leak_record,
        types::{ColumnType, NativeKind, NativeScalar},
    };

    #[test]
    fn ordinals_skip_the_identifier_alias() {
        let ty = leak_record(
            "Catalog",
            vec![
                FieldDef::new("ID", NativeKind::scalar(NativeScalar::Int64))
                    .with_tag("uindex xID"),
                FieldDef::new("Code", NativeKind::pointer(NativeScalar::Uint16)),
            ],
        );
        let layout = TableLayout::derive(ty).unwrap();

        let columns = layout.column_rows("catalog");
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].ordinal, 1);
        assert_eq!(columns[0].name, "Code");
        assert_eq!(columns[0].ty, ColumnType::Uint16);

        let indexes = layout.index_rows("catalog");
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes[0].column, "id()");
        assert!(indexes[0].unique);
    }
}

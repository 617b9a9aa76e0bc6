use crate::{
    IDENTIFIER_FIELD,
    error::{Error, Result},
    model::{FieldDescriptor, FieldDef, IndexDirective, IndexTarget, RecordType},
    tag::{Directives, parse_opt_tag},
    types::{ColumnType, NativeKind, NativeScalar},
};
use std::collections::HashMap;
use tracing::trace;

///
/// TableLayout
///
/// Option-independent result of walking a record type: the eligible fields
/// in declaration order and the index directives they carry.
/// The schema builder and the marshaler both read this one value, which is
/// what keeps DDL columns and marshaled values positionally aligned.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TableLayout {
    record: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl TableLayout {
    /// Walk `ty` and derive its layout.
    pub fn derive(ty: &RecordType) -> Result<Self> {
        let mut fields = Vec::with_capacity(ty.fields.len());
        let mut index_owners: HashMap<String, &'static str> = HashMap::new();

        for (position, def) in ty.fields.iter().enumerate() {
            let Some(desc) = describe_field(ty, position, def)? else {
                continue;
            };

            if let Some(index) = &desc.index
                && let Some(owner) = index_owners.insert(index.name.clone(), def.name)
            {
                return Err(Error::DirectiveConflict {
                    record: ty.name.to_string(),
                    field: def.name.to_string(),
                    message: format!("index name '{}' already used by field '{owner}'", index.name),
                });
            }

            fields.push(desc);
        }

        if !fields.iter().any(FieldDescriptor::is_column) {
            return Err(Error::input_shape(format!(
                "record '{}' has no eligible fields",
                ty.name
            )));
        }

        Ok(Self {
            record: ty.name,
            fields,
        })
    }

    /// Bare record type name.
    #[must_use]
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Eligible fields, identifier alias included.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields that become table columns, in column order.
    pub fn columns(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_column())
    }

    /// Index directives in field declaration order.
    pub fn indexes(&self) -> impl Iterator<Item = &IndexDirective> {
        self.fields.iter().filter_map(|f| f.index.as_ref())
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns().count()
    }

    /// `insert into <table> (<columns>) values ($1, ...)`, placeholders in
    /// marshaled value order.
    #[must_use]
    pub fn insert_statement(&self, table: &str) -> String {
        let columns = self
            .columns()
            .map(|c| c.column_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let params = (1..=self.column_count())
            .map(|i| format!("${i}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!("insert into {table} ({columns}) values ({params})")
    }
}

/// Apply the eligibility rules to one field.
/// `Ok(None)` means the field contributes nothing to the layout.
fn describe_field(
    ty: &RecordType,
    position: usize,
    def: &FieldDef,
) -> Result<Option<FieldDescriptor>> {
    if !def.exported {
        trace!(record = ty.name, field = def.name, "skipping private field");
        return Ok(None);
    }

    let directives =
        parse_opt_tag(def.tag).map_err(|err| Error::from_tag(ty.name, def.name, err))?;
    if directives.is_excluded() {
        trace!(record = ty.name, field = def.name, "skipping excluded field");
        return Ok(None);
    }

    if is_identifier_alias(def, &directives) {
        trace!(record = ty.name, field = def.name, "eliding identifier field");

        return Ok(Some(FieldDescriptor {
            source_name: def.name,
            position,
            column_name: def.name.to_string(),
            column_type: ColumnType::Int64,
            nullable: false,
            is_identifier_alias: true,
            index: index_directive(&directives, IndexTarget::Identifier),
        }));
    }

    let column_type = def
        .kind
        .column_type()
        .ok_or_else(|| Error::UnsupportedType {
            record: ty.name.to_string(),
            field: def.name.to_string(),
            ty: def.kind.to_string(),
        })?;
    let column_name = directives.column_name(def.name).to_string();
    let index = index_directive(&directives, IndexTarget::Column(column_name.clone()));

    Ok(Some(FieldDescriptor {
        source_name: def.name,
        position,
        column_name,
        column_type,
        nullable: def.kind.is_nullable(),
        is_identifier_alias: false,
        index,
    }))
}

// A field named `ID` of plain i64 with no rename stands for the row identifier.
fn is_identifier_alias(def: &FieldDef, directives: &Directives) -> bool {
    def.name == IDENTIFIER_FIELD
        && def.kind == NativeKind::scalar(NativeScalar::Int64)
        && directives.name.is_none()
}

fn index_directive(directives: &Directives, target: IndexTarget) -> Option<IndexDirective> {
    directives.index.as_ref().map(|spec| IndexDirective {
        name: spec.name.clone(),
        unique: spec.unique,
        target,
    })
}

///
/// TESTS
///

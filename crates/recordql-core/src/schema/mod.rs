//! Schema synthesis.
//!
//! A record type is walked once into a [`TableLayout`] (cached by the
//! registry), then rendered into a [`SchemaScript`] under the caller's
//! [`SchemaOptions`].

mod catalog;
mod layout;
mod options;
mod script;

#[cfg(test)]
mod property;

pub use catalog::{ColumnRow, IndexRow};
pub use layout::TableLayout;
pub use options::SchemaOptions;
pub use script::{SchemaScript, Statement};

use crate::{
    error::{Error, Result},
    model::RecordType,
    registry,
    traits::{Record, RecordKind, Reflect, Shape},
};
use tracing::instrument;

/// Schema script for the record behind `instance`.
///
/// `instance` may be a record, a reference or box to one, or an optional
/// holding one; anything else (including an empty optional) fails with
/// an input-shape error. An empty `name` selects the record's type name.
#[instrument(level = "debug", skip(instance, options))]
pub fn schema<T: Reflect + ?Sized>(
    instance: &T,
    name: &str,
    options: &SchemaOptions,
) -> Result<SchemaScript> {
    let record = expect_record(instance, "schema")?;

    schema_of(record.record_type(), name, options)
}

/// [`schema`] rendered to DDL text.
pub fn build_schema<T: Reflect + ?Sized>(
    instance: &T,
    name: &str,
    options: &SchemaOptions,
) -> Result<String> {
    schema(instance, name, options).map(String::from)
}

/// Schema script for a record type, without an instance.
pub fn schema_for<R: RecordKind>(name: &str, options: &SchemaOptions) -> Result<SchemaScript> {
    schema_of(R::RECORD, name, options)
}

/// [`schema`] for call sites whose record types were validated offline.
///
/// # Panics
/// Panics on any schema error.
#[must_use]
pub fn must_schema<T: Reflect + ?Sized>(
    instance: &T,
    name: &str,
    options: &SchemaOptions,
) -> SchemaScript {
    match schema(instance, name, options) {
        Ok(script) => script,
        Err(err) => panic!("recordql: {err}"),
    }
}

/// Schema script for an explicit descriptor table.
pub fn schema_of(
    ty: &'static RecordType,
    name: &str,
    options: &SchemaOptions,
) -> Result<SchemaScript> {
    let layout = registry::layout(ty)?;

    Ok(render(&layout, name, options))
}

/// `insert` statement whose placeholders line up with [`crate::marshal::marshal`]
/// output for the same record type.
pub fn insert_statement<T: Reflect + ?Sized>(
    instance: &T,
    name: &str,
    options: &SchemaOptions,
) -> Result<String> {
    let record = expect_record(instance, "insert_statement")?;
    let ty = record.record_type();
    let layout = registry::layout(ty)?;

    Ok(layout.insert_statement(&options.table_name(ty.name, name)))
}

/// Render a layout into its statement list.
#[must_use]
pub fn render(layout: &TableLayout, name: &str, options: &SchemaOptions) -> SchemaScript {
    let table = options.table_name(layout.record(), name);
    let if_not_exists = !options.no_if_not_exists;
    let mut statements = Vec::new();

    if !options.no_transaction {
        statements.push(Statement::BeginTransaction);
    }

    statements.push(Statement::CreateTable {
        table: table.clone(),
        if_not_exists,
        columns: layout
            .columns()
            .map(|c| (c.column_name.clone(), c.column_type))
            .collect(),
    });

    statements.extend(layout.indexes().map(|index| Statement::CreateIndex {
        name: index.name.clone(),
        table: table.clone(),
        unique: index.unique,
        if_not_exists,
        expression: index.target.expression().to_string(),
    }));

    if !options.no_transaction {
        statements.push(Statement::Commit);
    }

    SchemaScript::new(statements)
}

// Resolve a dynamic input to the record it holds.
pub(crate) fn expect_record<'a, T: Reflect + ?Sized>(
    instance: &'a T,
    op: &str,
) -> Result<&'a dyn Record> {
    match instance.shape() {
        Shape::Record(record) => Ok(record),
        Shape::Nil => Err(Error::input_shape(format!("{op}: input is nil"))),
        Shape::Other(ty) => Err(Error::input_shape(format!(
            "{op}: '{ty}' is not a record type"
        ))),
    }
}

///
/// TESTS
///

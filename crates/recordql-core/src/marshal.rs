//! Record → ordered column values.
//!
//! Values are produced from the same cached layout the schema builder
//! renders, so position *i* of the output is column *i* of the table.

use crate::{
    error::{Error, Result},
    registry,
    schema::expect_record,
    traits::{Record, Reflect},
    value::Value,
};

/// Column values of the record behind `instance`, in column order.
///
/// Accepts the same inputs as [`crate::schema::schema`]; nil and non-record
/// values fail with an input-shape error. The instance is only read.
pub fn marshal<T: Reflect + ?Sized>(instance: &T) -> Result<Vec<Value>> {
    let record = expect_record(instance, "marshal")?;

    marshal_record(record)
}

/// [`marshal`] for an already-resolved record.
pub fn marshal_record(record: &dyn Record) -> Result<Vec<Value>> {
    let ty = record.record_type();
    let layout = registry::layout(ty)?;
    let mut values = Vec::with_capacity(layout.column_count());

    for column in layout.columns() {
        let value = record.field_value(column.position).ok_or_else(|| {
            Error::input_shape(format!(
                "record '{}' did not yield a value for field '{}'",
                ty.name, column.source_name
            ))
        })?;

        if !value.fits(column.column_type, column.nullable) {
            return Err(Error::input_shape(format!(
                "record '{}' field '{}' yielded {value:?} for a {}{} column",
                ty.name,
                column.source_name,
                if column.nullable { "nullable " } else { "" },
                column.column_type,
            )));
        }

        values.push(value);
    }

    Ok(values)
}

///
/// TESTS
///

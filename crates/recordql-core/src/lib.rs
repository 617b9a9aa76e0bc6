//! Core runtime for recordql: record descriptors, the `ql` field tag
//! language, the column type table, schema synthesis, and value marshaling.
#![warn(unreachable_pub)]

pub mod error;
pub mod marshal;
pub mod model;
pub mod registry;
pub mod schema;
pub mod tag;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, ErrorClass, Result};

///
/// CONSTANTS
///

/// Table-name prefix reserved by the engine, applied by `keep_reserved_prefix`.
pub const RESERVED_PREFIX: &str = "ql_";

/// Field name that aliases the engine's intrinsic row identifier.
pub const IDENTIFIER_FIELD: &str = "ID";

/// Index expression addressing the intrinsic row identifier.
pub const IDENTIFIER_EXPR: &str = "id()";

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Builders and marshaling entry points are reached through their modules.
///

pub mod prelude {
    pub use crate::{
        model::{FieldDef, RecordType},
        schema::SchemaOptions,
        traits::{NativeType, Record, RecordKind, Reflect},
        types::{ColumnType, NativeKind, NativeScalar},
        value::Value,
    };
}

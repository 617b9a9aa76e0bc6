//! recordql: relational DDL and row values derived from Rust record types.
//!
//! This is the public meta-crate. Downstream users depend on **recordql**
//! only; it re-exports the runtime from `recordql-core` and the `Record`
//! derive from `recordql-derive`.
//!
//! ```ignore
//! use recordql::{Record, SchemaOptions};
//!
//! #[derive(Record)]
//! struct Department {
//!     #[ql("uindex xName")]
//!     pub Name: String,
//!     pub HQ: i32,
//! }
//!
//! let ddl = recordql::build_schema(&dept, "", &SchemaOptions::default())?;
//! ```

pub use recordql_core::{
    IDENTIFIER_EXPR, IDENTIFIER_FIELD, RESERVED_PREFIX, error, marshal, model, registry, schema,
    tag, traits, types, value,
};

//
// Derive
//

pub use recordql_derive::Record;

//
// Entry points
//

pub use recordql_core::{
    Error, ErrorClass, Result,
    marshal::marshal,
    schema::{
        SchemaOptions, SchemaScript, build_schema, insert_statement, must_schema, schema,
        schema_for,
    },
};

//
// Prelude
//

pub mod prelude {
    pub use crate::Record;
    pub use recordql_core::prelude::*;
}

//
// Field types
// Crates whose types back columns, re-exported so record definitions and
// the derive agree on one version of each.
//

pub mod __reexports {
    pub use num_bigint;
    pub use num_complex;
    pub use num_rational;
    pub use time;
}

//! Descriptor types.
//!
//! `record` holds the static, per-type tables produced by the derive (or
//! written by hand); `field` and `index` hold what the layout pass derives
//! from them. In general:
//! - records define *what is declared*
//! - descriptors define *what becomes a column*
mod field;
mod index;
mod record;

pub use field::FieldDescriptor;
pub use index::{IndexDirective, IndexTarget};
pub use record::{FieldDef, RecordType};

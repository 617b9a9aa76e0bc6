use crate::types::ColumnType;
use num_bigint::BigInt;
use num_complex::{Complex32, Complex64};
use num_rational::BigRational;
use time::{Duration, OffsetDateTime};

///
/// Value
///
/// One normalized column value handed to the engine's insertion path.
///
/// Null  → the field is an empty optional (SQL NULL).
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Complex64(Complex32),
    Complex128(Complex64),
    Blob(Vec<u8>),
    BigInt(BigInt),
    BigRat(BigRational),
    String(String),
    Time(OffsetDateTime),
    Duration(Duration),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Column type this value belongs to; `None` for the null marker.
    #[must_use]
    pub const fn column_type(&self) -> Option<ColumnType> {
        let ty = match self {
            Self::Null => return None,
            Self::Bool(_) => ColumnType::Bool,
            Self::Int8(_) => ColumnType::Int8,
            Self::Int16(_) => ColumnType::Int16,
            Self::Int32(_) => ColumnType::Int32,
            Self::Int64(_) => ColumnType::Int64,
            Self::Uint8(_) => ColumnType::Uint8,
            Self::Uint16(_) => ColumnType::Uint16,
            Self::Uint32(_) => ColumnType::Uint32,
            Self::Uint64(_) => ColumnType::Uint64,
            Self::Float32(_) => ColumnType::Float32,
            Self::Float64(_) => ColumnType::Float64,
            Self::Complex64(_) => ColumnType::Complex64,
            Self::Complex128(_) => ColumnType::Complex128,
            Self::Blob(_) => ColumnType::Blob,
            Self::BigInt(_) => ColumnType::BigInt,
            Self::BigRat(_) => ColumnType::BigRat,
            Self::String(_) => ColumnType::String,
            Self::Time(_) => ColumnType::Time,
            Self::Duration(_) => ColumnType::Duration,
        };

        Some(ty)
    }

    /// Whether this value may occupy a column of type `ty`.
    #[must_use]
    pub fn fits(&self, ty: ColumnType, nullable: bool) -> bool {
        if self.is_null() {
            return nullable;
        }

        self.column_type() == Some(ty)
    }
}

///
/// TESTS
///

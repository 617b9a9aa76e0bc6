use std::fmt::{self, Display};

///
/// NativeScalar
///
/// Native field type as seen by the column type table.
/// `Opaque` carries the spelled type name of anything the table does not know.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NativeScalar {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Bytes,
    BigInt,
    BigRat,
    Text,
    Time,
    Duration,
    Opaque(&'static str),
}

impl NativeScalar {
    /// Rust spelling of the native type, for diagnostics.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "isize",
            Self::Int8 => "i8",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Uint => "usize",
            Self::Uint8 => "u8",
            Self::Uint16 => "u16",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Complex64 => "Complex32",
            Self::Complex128 => "Complex64",
            Self::Bytes => "Vec<u8>",
            Self::BigInt => "BigInt",
            Self::BigRat => "BigRational",
            Self::Text => "String",
            Self::Time => "OffsetDateTime",
            Self::Duration => "Duration",
            Self::Opaque(name) => name,
        }
    }
}

///
/// NativeKind
///
/// A field's native type: the scalar plus whether it sits behind an
/// optional wrapper. Nesting deeper than one wrapper is not representable
/// and is recorded as `Opaque`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NativeKind {
    pub scalar: NativeScalar,
    pub pointer: bool,
}

impl NativeKind {
    #[must_use]
    pub const fn scalar(scalar: NativeScalar) -> Self {
        Self {
            scalar,
            pointer: false,
        }
    }

    #[must_use]
    pub const fn pointer(scalar: NativeScalar) -> Self {
        Self {
            scalar,
            pointer: true,
        }
    }

    #[must_use]
    pub const fn opaque(name: &'static str) -> Self {
        Self::scalar(NativeScalar::Opaque(name))
    }

    /// Column type of this kind, or `None` when the table has no entry.
    #[must_use]
    pub const fn column_type(self) -> Option<ColumnType> {
        column_type(self.scalar)
    }

    /// Whether a column of this kind accepts the null marker.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        self.pointer
    }
}

impl Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pointer {
            write!(f, "Option<{}>", self.scalar.type_name())
        } else {
            f.write_str(self.scalar.type_name())
        }
    }
}

///
/// ColumnType
///
/// Relational column type tokens understood by the engine.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Blob,
    BigInt,
    BigRat,
    String,
    Time,
    Duration,
}

impl ColumnType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Blob => "blob",
            Self::BigInt => "bigInt",
            Self::BigRat => "bigRat",
            Self::String => "string",
            Self::Time => "time",
            Self::Duration => "duration",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The column type table.
///
/// Platform-width integers widen to their 64-bit tokens.
#[must_use]
pub const fn column_type(scalar: NativeScalar) -> Option<ColumnType> {
    let ty = match scalar {
        NativeScalar::Bool => ColumnType::Bool,
        NativeScalar::Int8 => ColumnType::Int8,
        NativeScalar::Int16 => ColumnType::Int16,
        NativeScalar::Int32 => ColumnType::Int32,
        NativeScalar::Int | NativeScalar::Int64 => ColumnType::Int64,
        NativeScalar::Uint8 => ColumnType::Uint8,
        NativeScalar::Uint16 => ColumnType::Uint16,
        NativeScalar::Uint32 => ColumnType::Uint32,
        NativeScalar::Uint | NativeScalar::Uint64 => ColumnType::Uint64,
        NativeScalar::Float32 => ColumnType::Float32,
        NativeScalar::Float64 => ColumnType::Float64,
        NativeScalar::Complex64 => ColumnType::Complex64,
        NativeScalar::Complex128 => ColumnType::Complex128,
        NativeScalar::Bytes => ColumnType::Blob,
        NativeScalar::BigInt => ColumnType::BigInt,
        NativeScalar::BigRat => ColumnType::BigRat,
        NativeScalar::Text => ColumnType::String,
        NativeScalar::Time => ColumnType::Time,
        NativeScalar::Duration => ColumnType::Duration,
        NativeScalar::Opaque(_) => return None,
    };

    Some(ty)
}

///
/// TESTS
///

use crate::{
    model::RecordType,
    types::{NativeKind, NativeScalar},
    value::Value,
};
use num_bigint::BigInt;
use num_complex::{Complex32, Complex64};
use num_rational::BigRational;
use std::{rc::Rc, sync::Arc};
use time::{Duration, OffsetDateTime};

// ============================================================================
// FIELD TYPES
// ============================================================================

///
/// NativeType
///
/// A Rust type that can back a column.
/// Implemented for every entry of the column type table and for `Option<T>`
/// of each of them; nothing else can appear as a derived record field.
///

#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot back a record column",
    note = "use a supported column type or exclude the field with `#[ql(\"-\")]`"
)]
pub trait NativeType {
    const KIND: NativeKind;

    /// Normalized value of `self`; empty optionals become `Value::Null`.
    fn to_value(&self) -> Value;
}

macro_rules! impl_native_type {
    ( $( $ty:ty => $scalar:ident, |$v:ident| $value:expr; )* ) => {
        $(
            impl NativeType for $ty {
                const KIND: NativeKind = NativeKind::scalar(NativeScalar::$scalar);

                fn to_value(&self) -> Value {
                    let $v = self;
                    $value
                }
            }

            impl NativeType for Option<$ty> {
                const KIND: NativeKind = NativeKind::pointer(NativeScalar::$scalar);

                fn to_value(&self) -> Value {
                    match self {
                        Some($v) => $value,
                        None => Value::Null,
                    }
                }
            }

            impl Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other(NativeScalar::$scalar.type_name())
                }
            }
        )*
    };
}

// isize/usize are at most 64 bits wide on every supported target
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod native_impls {
    use super::*;

    impl_native_type! {
        bool => Bool, |v| Value::Bool(*v);
        isize => Int, |v| Value::Int64(*v as i64);
        i8 => Int8, |v| Value::Int8(*v);
        i16 => Int16, |v| Value::Int16(*v);
        i32 => Int32, |v| Value::Int32(*v);
        i64 => Int64, |v| Value::Int64(*v);
        usize => Uint, |v| Value::Uint64(*v as u64);
        u8 => Uint8, |v| Value::Uint8(*v);
        u16 => Uint16, |v| Value::Uint16(*v);
        u32 => Uint32, |v| Value::Uint32(*v);
        u64 => Uint64, |v| Value::Uint64(*v);
        f32 => Float32, |v| Value::Float32(*v);
        f64 => Float64, |v| Value::Float64(*v);
        Complex32 => Complex64, |v| Value::Complex64(*v);
        Complex64 => Complex128, |v| Value::Complex128(*v);
        Vec<u8> => Bytes, |v| Value::Blob(v.clone());
        BigInt => BigInt, |v| Value::BigInt(v.clone());
        BigRational => BigRat, |v| Value::BigRat(v.clone());
        String => Text, |v| Value::String(v.clone());
        OffsetDateTime => Time, |v| Value::Time(*v);
        Duration => Duration, |v| Value::Duration(*v);
    }
}

// ============================================================================
// RECORDS
// ============================================================================

///
/// Record
///
/// A record value with a static field descriptor table.
/// `field_value` is addressed by declaration position in
/// `RecordType::fields` and returns `None` for fields it cannot read
/// (private or excluded ones).
///

pub trait Record {
    fn record_type(&self) -> &'static RecordType;

    fn field_value(&self, position: usize) -> Option<Value>;
}

///
/// RecordKind
///
/// Type-level access to a record's descriptor table, for schema synthesis
/// without an instance.
///

pub trait RecordKind: Record {
    const RECORD: &'static RecordType;
}

// ============================================================================
// DYNAMIC INPUT
// ============================================================================

///
/// Shape
///
/// What a value handed to the schema builder or marshaler turned out to be.
///

pub enum Shape<'a> {
    /// An empty optional or null reference.
    Nil,
    Record(&'a dyn Record),
    /// Anything without field structure; carries the type name.
    Other(&'static str),
}

///
/// Reflect
///
/// Entry point for the dynamic `schema`/`marshal` calls.
/// Records implement it through the derive; references, boxes and
/// optionals forward to their pointee.
///

pub trait Reflect {
    fn shape(&self) -> Shape<'_>;
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_ref().map_or(Shape::Nil, Reflect::shape)
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Other("()")
    }
}

impl Reflect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Other("str")
    }
}

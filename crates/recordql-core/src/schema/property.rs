use crate::{
    marshal::marshal,
    model::FieldDef,
    registry,
    schema::{SchemaOptions, TableLayout, build_schema, render},
    test_support::{TestRecord, leak_record},
    types::{NativeKind, NativeScalar},
    value::Value,
};
use num_bigint::BigInt;
use num_complex::{Complex32, Complex64};
use num_rational::BigRational;
use proptest::prelude::*;
use time::{Duration, OffsetDateTime};

const SCALARS: [NativeScalar; 21] = [
    NativeScalar::Bool,
    NativeScalar::Int,
    NativeScalar::Int8,
    NativeScalar::Int16,
    NativeScalar::Int32,
    NativeScalar::Int64,
    NativeScalar::Uint,
    NativeScalar::Uint8,
    NativeScalar::Uint16,
    NativeScalar::Uint32,
    NativeScalar::Uint64,
    NativeScalar::Float32,
    NativeScalar::Float64,
    NativeScalar::Complex64,
    NativeScalar::Complex128,
    NativeScalar::Bytes,
    NativeScalar::BigInt,
    NativeScalar::BigRat,
    NativeScalar::Text,
    NativeScalar::Time,
    NativeScalar::Duration,
];

// Zero value of a scalar, normalized the way the derive would emit it.
fn zero_value(scalar: NativeScalar) -> Value {
    match scalar {
        NativeScalar::Bool => Value::Bool(false),
        NativeScalar::Int8 => Value::Int8(0),
        NativeScalar::Int16 => Value::Int16(0),
        NativeScalar::Int32 => Value::Int32(0),
        NativeScalar::Int | NativeScalar::Int64 => Value::Int64(0),
        NativeScalar::Uint8 => Value::Uint8(0),
        NativeScalar::Uint16 => Value::Uint16(0),
        NativeScalar::Uint32 => Value::Uint32(0),
        NativeScalar::Uint | NativeScalar::Uint64 => Value::Uint64(0),
        NativeScalar::Float32 => Value::Float32(0.0),
        NativeScalar::Float64 => Value::Float64(0.0),
        NativeScalar::Complex64 => Value::Complex64(Complex32::new(0.0, 0.0)),
        NativeScalar::Complex128 => Value::Complex128(Complex64::new(0.0, 0.0)),
        NativeScalar::Bytes => Value::Blob(Vec::new()),
        NativeScalar::BigInt => Value::BigInt(BigInt::default()),
        NativeScalar::BigRat => Value::BigRat(BigRational::from_integer(BigInt::default())),
        NativeScalar::Text => Value::String(String::new()),
        NativeScalar::Time => Value::Time(OffsetDateTime::UNIX_EPOCH),
        NativeScalar::Duration => Value::Duration(Duration::ZERO),
        NativeScalar::Opaque(_) => Value::Null,
    }
}

///
/// FieldSpec
///

#[derive(Clone, Debug)]
struct FieldSpec {
    name: &'static str,
    kind: NativeKind,
    exported: bool,
    tag: Option<&'static str>,
    null: bool,
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn arb_field(i: usize) -> impl Strategy<Value = FieldSpec> {
    (
        prop::sample::select(SCALARS.to_vec()),
        any::<bool>(),
        prop::bool::weighted(0.8),
        0_u8..5,
        prop::bool::weighted(0.1),
        any::<bool>(),
    )
        .prop_map(move |(scalar, pointer, exported, tag, is_id, null)| {
            let name = if is_id { "ID" } else { leak(format!("F{i}")) };
            let tag = match tag {
                0 => None,
                1 => Some("-"),
                2 => Some(leak(format!("name c{i}"))),
                3 => Some(leak(format!("index i{i}"))),
                _ => Some(leak(format!("uindex u{i}"))),
            };

            FieldSpec {
                name,
                kind: NativeKind { scalar, pointer },
                exported,
                tag,
                null: pointer && null,
            }
        })
}

fn arb_fields() -> impl Strategy<Value = Vec<FieldSpec>> {
    (1_usize..8).prop_flat_map(|n| (0..n).map(arb_field).collect::<Vec<_>>())
}

fn record(specs: &[FieldSpec]) -> TestRecord {
    let defs = specs
        .iter()
        .map(|s| {
            let def = if s.exported {
                FieldDef::new(s.name, s.kind)
            } else {
                FieldDef::private(s.name, s.kind)
            };
            s.tag.map_or(def, |tag| def.with_tag(tag))
        })
        .collect();
    let values = specs
        .iter()
        .map(|s| {
            Some(if s.null {
                Value::Null
            } else {
                zero_value(s.kind.scalar)
            })
        })
        .collect();

    TestRecord::new(leak_record("Generated", defs), values)
}

fn arb_options() -> impl Strategy<Value = SchemaOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(prefix, guard, txn)| {
        SchemaOptions::new()
            .keep_reserved_prefix(prefix)
            .no_if_not_exists(guard)
            .no_transaction(txn)
    })
}

proptest! {
    #[test]
    fn schema_text_is_deterministic(specs in arb_fields(), options in arb_options()) {
        let rec = record(&specs);
        let ty = crate::traits::Record::record_type(&rec);
        let derive_and_render = || {
            TableLayout::derive(ty)
                .map(|layout| render(&layout, "", &options).to_string())
                .map_err(|e| e.class())
        };

        let first = derive_and_render();
        let second = derive_and_render();
        prop_assert_eq!(&first, &second);

        // the cached path renders the same text as a fresh derivation
        let cached = build_schema(&rec, "", &options).map_err(|e| e.class());
        prop_assert_eq!(&cached, &first);
    }

    #[test]
    fn marshaled_values_align_with_columns(specs in arb_fields()) {
        let rec = record(&specs);
        let Ok(layout) = registry::layout(crate::traits::Record::record_type(&rec)) else {
            prop_assert!(marshal(&rec).is_err());
            return Ok(());
        };

        let values = marshal(&rec).unwrap();
        prop_assert_eq!(values.len(), layout.column_count());
        for (value, column) in values.iter().zip(layout.columns()) {
            prop_assert!(value.fits(column.column_type, column.nullable));
        }
    }

    #[test]
    fn plain_id_never_becomes_a_column(specs in arb_fields()) {
        let rec = record(&specs);
        let Ok(layout) = registry::layout(crate::traits::Record::record_type(&rec)) else {
            return Ok(());
        };

        for column in layout.columns() {
            let spec = &specs[column.position];
            let elidable = spec.name == "ID"
                && spec.kind == NativeKind::scalar(NativeScalar::Int64)
                && !spec.tag.is_some_and(|t| t.starts_with("name"));
            prop_assert!(!elidable);
        }
    }
}

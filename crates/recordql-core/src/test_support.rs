use crate::{
    model::{FieldDef, RecordType},
    traits::{Record, Reflect, Shape},
    value::Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_PATH: AtomicUsize = AtomicUsize::new(0);

/// Leak a descriptor table under a path no other test shares.
pub(crate) fn leak_record(name: &'static str, fields: Vec<FieldDef>) -> &'static RecordType {
    let n = NEXT_PATH.fetch_add(1, Ordering::Relaxed);
    let path: &'static str = Box::leak(format!("test_support::{name}#{n}").into_boxed_str());

    Box::leak(Box::new(RecordType::new(
        path,
        name,
        Box::leak(fields.into_boxed_slice()),
    )))
}

///
/// TestRecord
///
/// Hand-written record whose field values are supplied by position.
///

pub(crate) struct TestRecord {
    ty: &'static RecordType,
    values: Vec<Option<Value>>,
}

impl TestRecord {
    pub(crate) const fn new(ty: &'static RecordType, values: Vec<Option<Value>>) -> Self {
        Self { ty, values }
    }
}

impl Record for TestRecord {
    fn record_type(&self) -> &'static RecordType {
        self.ty
    }

    fn field_value(&self, position: usize) -> Option<Value> {
        self.values.get(position).cloned().flatten()
    }
}

impl Reflect for TestRecord {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(self)
    }
}

//! Process-wide layout cache.
//!
//! Layouts are derived once per record type and shared afterwards; the key
//! is the record's fully-qualified path. Entries are immutable, so a
//! poisoned lock still guards consistent data and is recovered from.

use crate::{error::Result, model::RecordType, schema::TableLayout};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};
use tracing::{debug, warn};

///
/// Entry
///

struct Entry {
    ty: RecordType,
    layout: Arc<TableLayout>,
}

static LAYOUTS: LazyLock<RwLock<HashMap<&'static str, Entry>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Layout of `ty`, deriving and caching it on first use.
///
/// Derivation errors are not cached; a failing type fails again on every
/// call.
pub fn layout(ty: &'static RecordType) -> Result<Arc<TableLayout>> {
    if let Some(layout) = cached(ty) {
        return Ok(layout);
    }

    let layout = Arc::new(TableLayout::derive(ty)?);

    let mut map = LAYOUTS.write().unwrap_or_else(PoisonError::into_inner);
    match map.get(ty.path) {
        // another caller won the race
        Some(entry) if entry.ty == *ty => Ok(Arc::clone(&entry.layout)),
        Some(_) => {
            warn!(path = ty.path, "record path shared by distinct descriptors; layout not cached");
            Ok(layout)
        }
        None => {
            debug!(path = ty.path, columns = layout.column_count(), "registered record layout");
            map.insert(
                ty.path,
                Entry {
                    ty: *ty,
                    layout: Arc::clone(&layout),
                },
            );
            Ok(layout)
        }
    }
}

/// Eagerly derive and cache the layout of `ty`.
///
/// Lets call sites validate their record types at startup instead of on
/// the first schema or marshal call.
pub fn register(ty: &'static RecordType) -> Result<()> {
    layout(ty).map(|_| ())
}

/// Whether a layout for `ty` is cached.
#[must_use]
pub fn is_registered(ty: &RecordType) -> bool {
    cached(ty).is_some()
}

fn cached(ty: &RecordType) -> Option<Arc<TableLayout>> {
    let map = LAYOUTS.read().unwrap_or_else(PoisonError::into_inner);

    map.get(ty.path)
        .filter(|entry| entry.ty == *ty)
        .map(|entry| Arc::clone(&entry.layout))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::FieldDef,
        test_support::leak_record,
        types::{NativeKind, NativeScalar},
    };

    #[test]
    fn layout_is_cached_and_shared() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let ty = leak_record(
            "Cached",
            vec![FieldDef::new("A", NativeKind::scalar(NativeScalar::Bool))],
        );
        assert!(!is_registered(ty));

        let first = layout(ty).unwrap();
        assert!(is_registered(ty));
        let second = layout(ty).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failures_are_not_cached() {
        let ty = leak_record("Failing", vec![FieldDef::new("A", NativeKind::opaque("X"))]);

        assert!(register(ty).is_err());
        assert!(!is_registered(ty));
        assert!(layout(ty).is_err());
    }

    #[test]
    fn colliding_paths_do_not_share_layouts() {
        let first: &'static RecordType = Box::leak(Box::new(RecordType::new(
            "registry::tests::Collide",
            "Collide",
            Box::leak(Box::new([FieldDef::new(
                "A",
                NativeKind::scalar(NativeScalar::Bool),
            )])),
        )));
        let second: &'static RecordType = Box::leak(Box::new(RecordType::new(
            "registry::tests::Collide",
            "Collide",
            Box::leak(Box::new([FieldDef::new(
                "B",
                NativeKind::scalar(NativeScalar::Text),
            )])),
        )));

        let a = layout(first).unwrap();
        let b = layout(second).unwrap();
        assert_eq!(a.columns().next().unwrap().column_name, "A");
        assert_eq!(b.columns().next().unwrap().column_name, "B");
    }
}

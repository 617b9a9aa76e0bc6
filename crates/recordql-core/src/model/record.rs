use crate::types::NativeKind;

///
/// RecordType
///
/// Static field descriptor table of one record type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordType {
    /// Fully-qualified Rust type path; the registry keys layouts on it.
    pub path: &'static str,
    /// Bare type name, the default table name.
    pub name: &'static str,
    /// Every declared field, in declaration order.
    pub fields: &'static [FieldDef],
}

impl RecordType {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, fields: &'static [FieldDef]) -> Self {
        Self { path, name, fields }
    }
}

///
/// FieldDef
///
/// One declared field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    /// Part of the type's public surface (`pub`).
    pub exported: bool,
    /// Raw `ql` tag, if any.
    pub tag: Option<&'static str>,
    pub kind: NativeKind,
}

impl FieldDef {
    /// An exported, untagged field.
    #[must_use]
    pub const fn new(name: &'static str, kind: NativeKind) -> Self {
        Self {
            name,
            exported: true,
            tag: None,
            kind,
        }
    }

    /// A field outside the type's public surface.
    #[must_use]
    pub const fn private(name: &'static str, kind: NativeKind) -> Self {
        Self {
            exported: false,
            ..Self::new(name, kind)
        }
    }

    #[must_use]
    pub const fn with_tag(self, tag: &'static str) -> Self {
        Self {
            tag: Some(tag),
            ..self
        }
    }
}

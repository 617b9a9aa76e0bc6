use crate::{RESERVED_PREFIX, error::Result};
use serde::Deserialize;

///
/// SchemaOptions
///
/// Formatting switches for one schema build. All default to `false`, which
/// yields a transaction-wrapped, `if not exists`-guarded script for the
/// unprefixed table name.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct SchemaOptions {
    /// Prepend the engine-reserved `ql_` prefix to the table name.
    pub keep_reserved_prefix: bool,
    /// Omit `if not exists` guards.
    pub no_if_not_exists: bool,
    /// Emit bare statements instead of a `begin transaction; ... commit;` script.
    pub no_transaction: bool,
}

impl SchemaOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keep_reserved_prefix: false,
            no_if_not_exists: false,
            no_transaction: false,
        }
    }

    #[must_use]
    pub const fn keep_reserved_prefix(mut self, yes: bool) -> Self {
        self.keep_reserved_prefix = yes;
        self
    }

    #[must_use]
    pub const fn no_if_not_exists(mut self, yes: bool) -> Self {
        self.no_if_not_exists = yes;
        self
    }

    #[must_use]
    pub const fn no_transaction(mut self, yes: bool) -> Self {
        self.no_transaction = yes;
        self
    }

    /// Load options from a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Table name for a record: the explicit name when non-empty, otherwise
    /// the record's own name, prefixed when requested.
    #[must_use]
    pub fn table_name(&self, record: &str, explicit: &str) -> String {
        let base = if explicit.is_empty() { record } else { explicit };

        if self.keep_reserved_prefix {
            format!("{RESERVED_PREFIX}{base}")
        } else {
            base.to_string()
        }
    }
}

///
/// TESTS
///

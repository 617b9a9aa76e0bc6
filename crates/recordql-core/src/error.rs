use crate::tag::TagError;
use thiserror::Error as ThisError;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

///
/// Error
///
/// Every failure surfaced by schema synthesis or marshaling.
/// All of them are definition mistakes, so nothing here is retryable and no
/// partial output ever accompanies an error.
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// Nil input, a non-record value, or a record with no eligible fields.
    #[error("{message}")]
    InputShape { message: String },

    /// A field's native type has no entry in the column type table.
    #[error("record '{record}' field '{field}': unsupported type '{ty}'")]
    UnsupportedType {
        record: String,
        field: String,
        ty: String,
    },

    /// A field tag could not be parsed.
    #[error("record '{record}' field '{field}': {source}")]
    DirectiveSyntax {
        record: String,
        field: String,
        source: TagError,
    },

    /// Index directives conflict on one field or across fields.
    #[error("record '{record}' field '{field}': {message}")]
    DirectiveConflict {
        record: String,
        field: String,
        message: String,
    },

    /// Schema options could not be loaded.
    #[error("invalid schema options: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn input_shape(message: impl Into<String>) -> Self {
        Self::InputShape {
            message: message.into(),
        }
    }

    /// Wrap a tag failure with its record/field context.
    ///
    /// `index` + `uindex` on one field is classified as a conflict, every
    /// other tag failure as a syntax error.
    pub(crate) fn from_tag(record: &str, field: &str, err: TagError) -> Self {
        if err.is_conflict() {
            Self::DirectiveConflict {
                record: record.to_string(),
                field: field.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::DirectiveSyntax {
                record: record.to_string(),
                field: field.to_string(),
                source: err,
            }
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InputShape { .. } => ErrorClass::InputShape,
            Self::UnsupportedType { .. } => ErrorClass::UnsupportedType,
            Self::DirectiveSyntax { .. } => ErrorClass::DirectiveSyntax,
            Self::DirectiveConflict { .. } => ErrorClass::DirectiveConflict,
            Self::Config(_) => ErrorClass::Config,
        }
    }
}

///
/// ErrorClass
///
/// Stable classification of [`Error`], for callers that branch on the kind
/// of failure rather than its message.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    InputShape,
    UnsupportedType,
    DirectiveSyntax,
    DirectiveConflict,
    Config,
}

//! Error types for task descriptor validation.

use std::fmt;
use thiserror::Error;

/// Required descriptor fields that must be non-empty at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Owning organization identifier.
    OrganizationUuid,
    /// Task identifier.
    Uuid,
    /// Logical task kind.
    Type,
}

impl RequiredField {
    /// Returns the field name as exposed in the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrganizationUuid => "organizationUuid",
            Self::Uuid => "uuid",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while building a task descriptor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDescriptorError {
    /// A required field was never set or was set to an empty string.
    #[error("{0} can't be null nor empty")]
    EmptyField(RequiredField),

    /// Exactly one of the component and main component was provided.
    #[error("None or both component and main component must be non null")]
    UnpairedComponent,
}

impl TaskDescriptorError {
    /// Returns the offending field for empty-field failures.
    #[must_use]
    pub const fn field(&self) -> Option<RequiredField> {
        match self {
            Self::EmptyField(field) => Some(*field),
            Self::UnpairedComponent => None,
        }
    }
}

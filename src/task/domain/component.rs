//! Component references carried by task descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight reference to the project or module a task operates on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentRef {
    uuid: String,
    key: String,
    name: String,
}

impl ComponentRef {
    /// Creates a component reference.
    #[must_use]
    pub fn new(uuid: impl Into<String>, key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            key: key.into(),
            name: name.into(),
        }
    }

    /// Returns the component identifier.
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Returns the component key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.uuid)
    }
}

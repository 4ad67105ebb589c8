//! Issue severities, ordered from least to most severe.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity reported for an external issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational finding.
    Info,
    /// Minor quality flaw.
    Minor,
    /// Quality flaw with significant impact.
    Major,
    /// Likely bug or security flaw.
    Critical,
    /// Must be fixed immediately.
    Blocker,
}

impl Severity {
    /// Returns the canonical severity name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Blocker => "BLOCKER",
        }
    }
}

impl TryFrom<&str> for Severity {
    type Error = IssueDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "INFO" => Ok(Self::Info),
            "MINOR" => Ok(Self::Minor),
            "MAJOR" => Ok(Self::Major),
            "CRITICAL" => Ok(Self::Critical),
            "BLOCKER" => Ok(Self::Blocker),
            _ => Err(IssueDomainError::InvalidSeverity(value.to_owned())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

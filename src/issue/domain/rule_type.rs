//! Rule types an external issue can be classified under.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of problem an external issue reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    /// Maintainability problem.
    CodeSmell,
    /// Reliability problem.
    Bug,
    /// Security problem.
    Vulnerability,
}

impl RuleType {
    /// Returns the canonical rule type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeSmell => "CODE_SMELL",
            Self::Bug => "BUG",
            Self::Vulnerability => "VULNERABILITY",
        }
    }
}

impl TryFrom<&str> for RuleType {
    type Error = IssueDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CODE_SMELL" => Ok(Self::CodeSmell),
            "BUG" => Ok(Self::Bug),
            "VULNERABILITY" => Ok(Self::Vulnerability),
            _ => Err(IssueDomainError::InvalidRuleType(value.to_owned())),
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Rule keys in `repository:rule` form.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a rule within the repository of the engine that defines it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleKey {
    repository: String,
    rule: String,
}

impl RuleKey {
    /// Creates a rule key from its two parts.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidRuleKey`] when either part is empty
    /// or has surrounding whitespace, or when the repository contains a colon.
    pub fn new(
        repository: impl Into<String>,
        rule: impl Into<String>,
    ) -> Result<Self, IssueDomainError> {
        let repository_owned = repository.into();
        let rule_owned = rule.into();
        if !is_valid_part(&repository_owned)
            || !is_valid_part(&rule_owned)
            || repository_owned.contains(':')
        {
            return Err(IssueDomainError::InvalidRuleKey(format!(
                "{repository_owned}:{rule_owned}"
            )));
        }

        Ok(Self {
            repository: repository_owned,
            rule: rule_owned,
        })
    }

    /// Parses `repository:rule`, splitting on the first colon.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidRuleKey`] when the colon is missing
    /// or either part is empty or padded with whitespace.
    pub fn parse(value: &str) -> Result<Self, IssueDomainError> {
        let (repository, rule) = value
            .split_once(':')
            .ok_or_else(|| IssueDomainError::InvalidRuleKey(value.to_owned()))?;
        Self::new(repository, rule)
            .map_err(|_| IssueDomainError::InvalidRuleKey(value.to_owned()))
    }

    /// Returns the rule repository, usually named after the engine.
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Returns the rule identifier within its repository.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

fn is_valid_part(part: &str) -> bool {
    !part.is_empty() && part.trim() == part
}

impl TryFrom<String> for RuleKey {
    type Error = IssueDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RuleKey> for String {
    fn from(key: RuleKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.rule)
    }
}

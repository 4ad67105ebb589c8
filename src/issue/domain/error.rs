//! Error types for external issue validation and parsing.

use thiserror::Error;

/// Errors returned while constructing external issue values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// The rule key is not in `repository:rule` form.
    #[error("invalid rule key '{0}', expected repository:rule")]
    InvalidRuleKey(String),

    /// The location does not name a component.
    #[error("issue location component key must not be empty")]
    EmptyComponentKey,

    /// The text range is empty, reversed or starts before line 1.
    #[error("invalid text range {start}..{end}, expected 1 <= start <= end")]
    InvalidTextRange {
        /// First line of the range.
        start: u32,
        /// Last line of the range.
        end: u32,
    },

    /// The severity value is unsupported.
    #[error("unknown severity: {0}")]
    InvalidSeverity(String),

    /// The rule type value is unsupported.
    #[error("unknown rule type: {0}")]
    InvalidRuleType(String),
}

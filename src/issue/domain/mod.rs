//! Domain model for externally reported issues.

mod error;
mod external_issue;
mod location;
mod rule_key;
mod rule_type;
mod severity;

pub use error::IssueDomainError;
pub use external_issue::ExternalIssue;
pub use location::{IssueLocation, TextRange};
pub use rule_key::RuleKey;
pub use rule_type::RuleType;
pub use severity::Severity;

//! Issue raised by an external rule engine and imported by a sensor.

use super::{IssueLocation, RuleKey, RuleType, Severity};
use serde::Serialize;

/// Issue imported from an external rule engine.
///
/// Unlike issues raised by built-in rules, an external issue carries its own
/// severity and type, plus an optional link to the rule documentation and an
/// optional remediation effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIssue {
    rule_key: RuleKey,
    primary_location: IssueLocation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    flows: Vec<Vec<IssueLocation>>,
    severity: Severity,
    #[serde(rename = "type")]
    rule_type: RuleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    description_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remediation_effort: Option<u64>,
}

impl ExternalIssue {
    /// Creates an external issue with no flows, link or effort.
    #[must_use]
    pub const fn new(
        rule_key: RuleKey,
        primary_location: IssueLocation,
        severity: Severity,
        rule_type: RuleType,
    ) -> Self {
        Self {
            rule_key,
            primary_location,
            flows: Vec::new(),
            severity,
            rule_type,
            description_url: None,
            remediation_effort: None,
        }
    }

    /// Appends a secondary flow. Empty flows are ignored.
    #[must_use]
    pub fn with_flow(mut self, flow: impl IntoIterator<Item = IssueLocation>) -> Self {
        let locations: Vec<IssueLocation> = flow.into_iter().collect();
        if !locations.is_empty() {
            self.flows.push(locations);
        }
        self
    }

    /// Sets the rule documentation link. An empty URL is treated as absent.
    #[must_use]
    pub fn with_description_url(mut self, description_url: impl Into<String>) -> Self {
        let value = description_url.into();
        self.description_url = (!value.is_empty()).then_some(value);
        self
    }

    /// Sets the effort to fix the issue, in minutes.
    #[must_use]
    pub fn with_remediation_effort(mut self, minutes: u64) -> Self {
        self.remediation_effort = Some(minutes);
        self
    }

    /// Returns the key of the rule that raised the issue.
    #[must_use]
    pub const fn rule_key(&self) -> &RuleKey {
        &self.rule_key
    }

    /// Returns the main location of the issue.
    #[must_use]
    pub const fn primary_location(&self) -> &IssueLocation {
        &self.primary_location
    }

    /// Returns secondary flows in the order they were added.
    #[must_use]
    pub fn flows(&self) -> &[Vec<IssueLocation>] {
        &self.flows
    }

    /// Returns the issue severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the issue type.
    #[must_use]
    pub const fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Returns the link to the rule documentation, if any.
    #[must_use]
    pub fn description_url(&self) -> Option<&str> {
        self.description_url.as_deref()
    }

    /// Returns the effort to fix the issue in minutes, if known.
    #[must_use]
    pub const fn remediation_effort(&self) -> Option<u64> {
        self.remediation_effort
    }
}

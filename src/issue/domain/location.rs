//! Source locations an issue points at.

use super::IssueDomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Inclusive, 1-based line range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRange {
    start_line: u32,
    end_line: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextRange {
    start_line: u32,
    end_line: u32,
}

impl TextRange {
    /// Creates a validated line range.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidTextRange`] when `start_line` is
    /// zero or greater than `end_line`.
    pub const fn new(start_line: u32, end_line: u32) -> Result<Self, IssueDomainError> {
        if start_line == 0 || start_line > end_line {
            return Err(IssueDomainError::InvalidTextRange {
                start: start_line,
                end: end_line,
            });
        }
        Ok(Self {
            start_line,
            end_line,
        })
    }

    /// Creates a range covering a single line.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::InvalidTextRange`] when `line` is zero.
    pub const fn line(line: u32) -> Result<Self, IssueDomainError> {
        Self::new(line, line)
    }

    /// Returns the first line.
    #[must_use]
    pub const fn start_line(self) -> u32 {
        self.start_line
    }

    /// Returns the last line.
    #[must_use]
    pub const fn end_line(self) -> u32 {
        self.end_line
    }
}

impl<'de> Deserialize<'de> for TextRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTextRange::deserialize(deserializer)?;
        Self::new(raw.start_line, raw.end_line).map_err(serde::de::Error::custom)
    }
}

/// A component, optionally narrowed to a text range, with an optional message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLocation {
    component_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_range: Option<TextRange>,
}

impl IssueLocation {
    /// Creates a location on the whole component.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::EmptyComponentKey`] when the key is empty
    /// after trimming.
    pub fn new(component_key: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw_key = component_key.into();
        let normalized_key = raw_key.trim();
        if normalized_key.is_empty() {
            return Err(IssueDomainError::EmptyComponentKey);
        }

        Ok(Self {
            component_key: normalized_key.to_owned(),
            message: None,
            text_range: None,
        })
    }

    /// Sets the location message. An empty message is treated as absent.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let value = message.into();
        self.message = (!value.is_empty()).then_some(value);
        self
    }

    /// Narrows the location to a text range.
    #[must_use]
    pub fn with_text_range(mut self, text_range: TextRange) -> Self {
        self.text_range = Some(text_range);
        self
    }

    /// Returns the key of the component holding the location.
    #[must_use]
    pub fn component_key(&self) -> &str {
        &self.component_key
    }

    /// Returns the location message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the text range, if the location is narrower than the component.
    #[must_use]
    pub const fn text_range(&self) -> Option<TextRange> {
        self.text_range
    }
}

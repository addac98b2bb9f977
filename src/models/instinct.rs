//! Instinct record types and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to records that carry none.
pub const DEFAULT_CATEGORY: &str = "general";

/// Confidence assumed for records that carry none.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Unique identifier for an instinct.
///
/// Uniqueness within a store is expected but not enforced; it is the
/// de-duplication key during import.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstinctId(String);

impl InstinctId {
    /// Creates a new instinct ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstinctId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for InstinctId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InstinctId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A recorded behavioral pattern with a confidence score.
///
/// Instincts are appended to the store by `import` (or by an external
/// observer process); the commands here never edit or delete them in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instinct {
    /// Unique identifier.
    pub id: InstinctId,
    /// Free-text description of the observed pattern.
    pub pattern: String,
    /// Confidence score, conventionally in [0.0, 1.0]. Not clamped.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Grouping label. Absent means [`DEFAULT_CATEGORY`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

const fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

impl Instinct {
    /// Creates a new instinct with the given id and pattern.
    #[must_use]
    pub fn new(id: impl Into<InstinctId>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            confidence: DEFAULT_CONFIDENCE,
            category: None,
        }
    }

    /// Sets the confidence score.
    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the category label, defaulting when absent.
    #[must_use]
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

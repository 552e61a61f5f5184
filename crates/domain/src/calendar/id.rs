//! Validated identifier for calendar definitions

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a calendar definition.
///
/// Must be a lowercase slug: letters, digits, hyphens, and underscores,
/// at most 64 characters. This keeps ids stable across serialization,
/// file names, and module settings keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarId(String);

impl CalendarId {
    pub const MAX_LENGTH: usize = 64;

    /// Create a new calendar id, validating the slug format.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::invalid_id("calendar id cannot be empty"));
        }
        if id.len() > Self::MAX_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "calendar id cannot exceed {} characters",
                Self::MAX_LENGTH
            )));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(DomainError::invalid_id(format!(
                "calendar id '{id}' must contain only lowercase letters, digits, hyphens, and underscores"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CalendarId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CalendarId> for String {
    fn from(id: CalendarId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

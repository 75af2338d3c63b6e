use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::category::errors::CategoryIdError;

/// Globally shared taxonomy entry, administrator-managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category unique identifier type (database-assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Parse a category ID from an HTTP path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, CategoryIdError> {
        s.parse::<i64>()
            .map(CategoryId)
            .map_err(|e| CategoryIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated category fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

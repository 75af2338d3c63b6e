use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::book::errors::BookIdError;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::user::models::UserId;

/// Book aggregate entity, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_year: i32,
    pub description: String,
    pub user_id: UserId,
    pub categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book unique identifier type (database-assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl BookId {
    /// Parse a book ID from an HTTP path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - string is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, BookIdError> {
        s.parse::<i64>()
            .map(BookId)
            .map_err(|e| BookIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated book fields for create and update.
///
/// `category_ids` is the caller-supplied association list; the service
/// resolves it against the category store before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_year: i32,
    pub description: String,
    pub category_ids: Vec<CategoryId>,
}

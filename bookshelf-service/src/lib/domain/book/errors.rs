use thiserror::Error;

/// Error for BookId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookIdError {
    #[error("Invalid book ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for book operations
#[derive(Debug, Clone, Error)]
pub enum BookError {
    /// Also covers "exists but owned by someone else": a foreign book is
    /// indistinguishable from a nonexistent one.
    #[error("Book not found: {0}")]
    NotFound(i64),

    #[error("Category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

use thiserror::Error;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid category ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(i64),

    #[error("Category name already exists: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(String),
}

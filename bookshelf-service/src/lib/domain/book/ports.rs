use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::user::models::UserId;

/// Port for book operations.
///
/// Every read and mutation except `list_by_category` is scoped to the calling
/// user's identity; there is no way to reach another user's books.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// Create a book owned by `user_id`.
    ///
    /// # Errors
    /// * `CategoryNotFound` - an id in the draft's association list does not
    ///   resolve; nothing is persisted
    /// * `Database` - storage operation failed
    async fn create(&self, user_id: UserId, draft: BookDraft) -> Result<Book, BookError>;

    /// List the caller's books.
    async fn list(&self, user_id: UserId) -> Result<Vec<Book>, BookError>;

    /// Retrieve one of the caller's books.
    ///
    /// # Errors
    /// * `NotFound` - absent, soft-deleted, or owned by someone else
    async fn get(&self, id: BookId, user_id: UserId) -> Result<Book, BookError>;

    /// Replace one of the caller's books, including its association list.
    ///
    /// # Errors
    /// * `NotFound` - absent or owned by someone else
    /// * `CategoryNotFound` - association list did not fully resolve
    async fn update(&self, id: BookId, user_id: UserId, draft: BookDraft)
        -> Result<Book, BookError>;

    /// Soft-delete one of the caller's books.
    ///
    /// # Errors
    /// * `NotFound` - the scoped delete affected zero rows
    async fn delete(&self, id: BookId, user_id: UserId) -> Result<(), BookError>;

    /// List all live books carrying the given category (public browse).
    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError>;
}

/// Persistence operations for books.
///
/// Implementations must exclude soft-deleted rows from every lookup and write
/// the book row and its category associations in one transaction.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book with the pre-resolved category list.
    async fn create(
        &self,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Book, BookError>;

    /// Retrieve all live books owned by `user_id`, categories attached.
    async fn find_all(&self, user_id: UserId) -> Result<Vec<Book>, BookError>;

    /// Retrieve a book by `(id, owner)`; None when absent or foreign.
    async fn find_by_id(&self, id: BookId, user_id: UserId) -> Result<Option<Book>, BookError>;

    /// Update a book scoped by `(id, owner)`, replacing its associations;
    /// None when no live owned row matched.
    async fn update(
        &self,
        id: BookId,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Option<Book>, BookError>;

    /// Soft-delete a book scoped by `(id, owner)`, returning whether a live
    /// row was affected.
    async fn delete(&self, id: BookId, user_id: UserId) -> Result<bool, BookError>;

    /// Retrieve all live books associated with a category.
    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError>;
}

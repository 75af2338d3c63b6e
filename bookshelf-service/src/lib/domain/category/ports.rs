use async_trait::async_trait;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryDraft;
use crate::category::models::CategoryId;

/// Port for category operations.
///
/// Reads are public; mutations are reachable only behind the admin gate and
/// carry no ownership scoping (the taxonomy is a global resource).
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category.
    ///
    /// # Errors
    /// * `DuplicateName` - a live category with this name already exists
    /// * `Database` - storage operation failed
    async fn create(&self, draft: CategoryDraft) -> Result<Category, CategoryError>;

    /// List all live categories.
    async fn list(&self) -> Result<Vec<Category>, CategoryError>;

    /// Retrieve one category.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist
    async fn get(&self, id: CategoryId) -> Result<Category, CategoryError>;

    /// Replace a category's fields.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist
    /// * `DuplicateName` - new name collides with a live category
    async fn update(&self, id: CategoryId, draft: CategoryDraft) -> Result<Category, CategoryError>;

    /// Soft-delete a category.
    ///
    /// # Errors
    /// * `NotFound` - category does not exist (zero rows affected)
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for categories.
///
/// Implementations must exclude soft-deleted rows from every lookup.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist a new category; the store assigns id and timestamps.
    ///
    /// # Errors
    /// * `DuplicateName` - unique constraint on name rejected the write
    /// * `Database` - storage operation failed
    async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryError>;

    /// Retrieve all live categories.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;

    /// Retrieve category by identifier.
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve the categories matching the given identifiers.
    ///
    /// Missing ids are skipped without error; the caller decides whether an
    /// incomplete resolution is fatal.
    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError>;

    /// Update an existing category, returning None when no live row matched.
    ///
    /// # Errors
    /// * `DuplicateName` - new name collides with a live category
    /// * `Database` - storage operation failed
    async fn update(
        &self,
        id: CategoryId,
        draft: &CategoryDraft,
    ) -> Result<Option<Category>, CategoryError>;

    /// Soft-delete a category, returning whether a live row was affected.
    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryError>;
}

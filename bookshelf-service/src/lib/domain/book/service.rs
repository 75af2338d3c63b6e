use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::book::ports::BookRepository;
use crate::book::ports::BookServicePort;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::category::ports::CategoryRepository;
use crate::user::models::UserId;

/// Domain service for per-user book collections.
///
/// Ownership scoping lives in the repository queries; this service adds the
/// all-or-nothing category resolution on top.
pub struct BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    repository: Arc<BR>,
    category_repository: Arc<CR>,
}

impl<BR, CR> BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<BR>, category_repository: Arc<CR>) -> Self {
        Self {
            repository,
            category_repository,
        }
    }

    /// Resolve the draft's association list against the category store.
    ///
    /// Any unresolved id fails the whole operation; partial lists are never
    /// handed to the repository.
    async fn resolve_categories(
        &self,
        category_ids: &[CategoryId],
    ) -> Result<Vec<Category>, BookError> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let categories = self
            .category_repository
            .find_by_ids(category_ids)
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        let found: HashSet<CategoryId> = categories.iter().map(|c| c.id).collect();
        if let Some(missing) = category_ids.iter().find(|id| !found.contains(id)) {
            return Err(BookError::CategoryNotFound(missing.0));
        }

        Ok(categories)
    }
}

#[async_trait]
impl<BR, CR> BookServicePort for BookService<BR, CR>
where
    BR: BookRepository,
    CR: CategoryRepository,
{
    async fn create(&self, user_id: UserId, draft: BookDraft) -> Result<Book, BookError> {
        let categories = self.resolve_categories(&draft.category_ids).await?;
        self.repository.create(user_id, &draft, categories).await
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Book>, BookError> {
        self.repository.find_all(user_id).await
    }

    async fn get(&self, id: BookId, user_id: UserId) -> Result<Book, BookError> {
        self.repository
            .find_by_id(id, user_id)
            .await?
            .ok_or(BookError::NotFound(id.0))
    }

    async fn update(
        &self,
        id: BookId,
        user_id: UserId,
        draft: BookDraft,
    ) -> Result<Book, BookError> {
        let categories = self.resolve_categories(&draft.category_ids).await?;
        self.repository
            .update(id, user_id, &draft, categories)
            .await?
            .ok_or(BookError::NotFound(id.0))
    }

    async fn delete(&self, id: BookId, user_id: UserId) -> Result<(), BookError> {
        if !self.repository.delete(id, user_id).await? {
            return Err(BookError::NotFound(id.0));
        }
        Ok(())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError> {
        self.repository.find_by_category(category_id).await
    }
}

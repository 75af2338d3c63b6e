use std::sync::Arc;

use async_trait::async_trait;

use crate::category::errors::CategoryError;
use crate::category::models::Category;
use crate::category::models::CategoryDraft;
use crate::category::models::CategoryId;
use crate::category::ports::CategoryRepository;
use crate::category::ports::CategoryServicePort;

/// Domain service for the shared category taxonomy.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create(&self, draft: CategoryDraft) -> Result<Category, CategoryError> {
        self.repository.create(&draft).await
    }

    async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        self.repository.find_all().await
    }

    async fn get(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id.0))
    }

    async fn update(&self, id: CategoryId, draft: CategoryDraft) -> Result<Category, CategoryError> {
        self.repository
            .update(id, &draft)
            .await?
            .ok_or(CategoryError::NotFound(id.0))
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        if !self.repository.delete(id).await? {
            return Err(CategoryError::NotFound(id.0));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;

    mock! {
        pub TestCategoryRepository {}

        #[async_trait]
        impl CategoryRepository for TestCategoryRepository {
            async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryError>;
            async fn find_all(&self) -> Result<Vec<Category>, CategoryError>;
            async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;
            async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CategoryError>;
            async fn update(&self, id: CategoryId, draft: &CategoryDraft) -> Result<Option<Category>, CategoryError>;
            async fn delete(&self, id: CategoryId) -> Result<bool, CategoryError>;
        }
    }

    fn category(id: i64, name: &str) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CategoryService::new(Arc::new(repository));

        let result = service.get(CategoryId(404)).await;
        assert!(matches!(result, Err(CategoryError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_delete_zero_rows_is_not_found() {
        let mut repository = MockTestCategoryRepository::new();
        repository.expect_delete().times(1).returning(|_| Ok(false));

        let service = CategoryService::new(Arc::new(repository));

        let result = service.delete(CategoryId(404)).await;
        assert!(matches!(result, Err(CategoryError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_create_surfaces_duplicate_name() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|draft| Err(CategoryError::DuplicateName(draft.name.clone())));

        let service = CategoryService::new(Arc::new(repository));

        let result = service
            .create(CategoryDraft {
                name: "Fiction".to_string(),
                description: String::new(),
            })
            .await;
        assert!(matches!(result, Err(CategoryError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut repository = MockTestCategoryRepository::new();
        repository
            .expect_update()
            .times(1)
            .returning(|id, draft| Ok(Some(category(id.0, &draft.name))));

        let service = CategoryService::new(Arc::new(repository));

        let updated = service
            .update(
                CategoryId(3),
                CategoryDraft {
                    name: "History".to_string(),
                    description: "non-fiction".to_string(),
                },
            )
            .await
            .expect("update failed");
        assert_eq!(updated.name, "History");
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::Transaction;

use crate::book::errors::BookError;
use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::book::models::BookId;
use crate::book::ports::BookRepository;
use crate::category::models::Category;
use crate::category::models::CategoryId;
use crate::user::models::UserId;

/// Postgres-backed book store.
///
/// A book row and its category associations are written in one transaction;
/// a failed association insert rolls back the book itself. Ownership scoping
/// lives in the SQL predicates, not in the caller.
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn replace_associations(
        tx: &mut Transaction<'_, Postgres>,
        book_id: i64,
        categories: &[Category],
    ) -> Result<(), BookError> {
        sqlx::query("DELETE FROM book_categories WHERE book_id = $1")
            .bind(book_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        for category in categories {
            sqlx::query(
                r#"
                INSERT INTO book_categories (book_id, category_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(book_id)
            .bind(category.id.0)
            .execute(&mut **tx)
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;
        }

        Ok(())
    }

    /// Category lists for a set of books, keyed by book id.
    async fn load_categories(
        &self,
        book_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Category>>, BookError> {
        let rows = sqlx::query_as::<_, BookCategoryRow>(
            r#"
            SELECT bc.book_id, c.id, c.name, c.description, c.created_at, c.updated_at
            FROM book_categories bc
            JOIN categories c ON c.id = bc.category_id
            WHERE bc.book_id = ANY($1) AND c.deleted_at IS NULL
            ORDER BY c.name
            "#,
        )
        .bind(book_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        let mut by_book: HashMap<i64, Vec<Category>> = HashMap::new();
        for row in rows {
            by_book.entry(row.book_id).or_default().push(Category {
                id: CategoryId(row.id),
                name: row.name,
                description: row.description,
                created_at: row.created_at,
                updated_at: row.updated_at,
            });
        }

        Ok(by_book)
    }

    async fn attach_categories(&self, rows: Vec<BookRow>) -> Result<Vec<Book>, BookError> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut by_book = self.load_categories(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let categories = by_book.remove(&row.id).unwrap_or_default();
                row.into_book(categories)
            })
            .collect())
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    isbn: String,
    publish_year: i32,
    description: String,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self, categories: Vec<Category>) -> Book {
        Book {
            id: BookId(self.id),
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            publish_year: self.publish_year,
            description: self.description,
            user_id: UserId(self.user_id),
            categories,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookCategoryRow {
    book_id: i64,
    id: i64,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(
        &self,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Book, BookError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (title, author, isbn, publish_year, description, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, author, isbn, publish_year, description, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.isbn)
        .bind(draft.publish_year)
        .bind(&draft.description)
        .bind(user_id.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        Self::replace_associations(&mut tx, row.id, &categories).await?;

        tx.commit()
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        Ok(row.into_book(categories))
    }

    async fn find_all(&self, user_id: UserId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn, publish_year, description, user_id,
                   created_at, updated_at
            FROM books
            WHERE user_id = $1 AND deleted_at IS NULL
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        self.attach_categories(rows).await
    }

    async fn find_by_id(&self, id: BookId, user_id: UserId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn, publish_year, description, user_id,
                   created_at, updated_at
            FROM books
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        match row {
            Some(row) => {
                let mut books = self.attach_categories(vec![row]).await?;
                Ok(books.pop())
            }
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        id: BookId,
        user_id: UserId,
        draft: &BookDraft,
        categories: Vec<Category>,
    ) -> Result<Option<Book>, BookError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET title = $3, author = $4, isbn = $5, publish_year = $6,
                description = $7, updated_at = NOW()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            RETURNING id, title, author, isbn, publish_year, description, user_id,
                      created_at, updated_at
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.isbn)
        .bind(draft.publish_year)
        .bind(&draft.description)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        let Some(row) = row else {
            tx.rollback()
                .await
                .map_err(|e| BookError::Database(e.to_string()))?;
            return Ok(None);
        };

        Self::replace_associations(&mut tx, row.id, &categories).await?;

        tx.commit()
            .await
            .map_err(|e| BookError::Database(e.to_string()))?;

        Ok(Some(row.into_book(categories)))
    }

    async fn delete(&self, id: BookId, user_id: UserId) -> Result<bool, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET deleted_at = NOW()
            WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_category(&self, category_id: CategoryId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT b.id, b.title, b.author, b.isbn, b.publish_year, b.description,
                   b.user_id, b.created_at, b.updated_at
            FROM books b
            JOIN book_categories bc ON bc.book_id = b.id
            WHERE bc.category_id = $1 AND b.deleted_at IS NULL
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(category_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookError::Database(e.to_string()))?;

        self.attach_categories(rows).await
    }
}

use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

/// Postgres-backed user store.
///
/// Soft deletes: every lookup filters on `deleted_at IS NULL`, and the
/// partial unique index on email only covers live rows, so a deleted
/// account's email can be registered again.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// A stored row that fails value-object parsing is data corruption, not
    /// caller input; it surfaces as a `Database` error.
    fn into_user(self) -> Result<User, AuthError> {
        let name = UserName::new(self.name).map_err(|e| AuthError::Database(e.to_string()))?;
        let email =
            EmailAddress::new(self.email).map_err(|e| AuthError::Database(e.to_string()))?;
        let role = Role::from_str(&self.role).map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(User {
            id: UserId(self.id),
            name,
            email,
            password_hash: self.password_hash,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_email_live_idx")
                {
                    return AuthError::DuplicateEmail(user.email.as_str().to_string());
                }
            }
            AuthError::Database(e.to_string())
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    async fn admin_exists(&self) -> Result<bool, AuthError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE role = 'admin' AND deleted_at IS NULL
            )
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::Database(e.to_string()))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::inbound::http::handlers::ApiError;

    fn row(role: &str) -> UserRow {
        let now = Utc::now();
        UserRow {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            role: role.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_row_with_valid_role_parses() {
        let user = row("admin").into_user().expect("valid row rejected");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_corrupt_role_is_a_database_error() {
        let result = row("superuser").into_user();
        assert!(matches!(result, Err(AuthError::Database(_))));

        // And it reaches the client as a 500, never a 400
        let api_error = ApiError::from(result.unwrap_err());
        assert!(matches!(api_error, ApiError::InternalServerError(_)));
    }
}

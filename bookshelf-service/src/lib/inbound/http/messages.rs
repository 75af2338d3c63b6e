//! Serializable message types for the HTTP layer (infrastructure).
//!
//! These types separate domain models from serialization concerns. Request
//! bodies validate themselves into domain commands here, at the boundary;
//! response views deliberately have no field for the password digest.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::book::models::Book;
use crate::book::models::BookDraft;
use crate::category::models::Category;
use crate::category::models::CategoryDraft;
use crate::category::models::CategoryId;
use crate::inbound::http::handlers::ApiError;
use crate::user::errors::EmailError;
use crate::user::errors::UserNameError;
use crate::user::models::EmailAddress;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::UserName;

/// Outward view of a user. No password field exists on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Body returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub token: String,
    pub user: UserData,
    pub expire_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Category> for CategoryData {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.0,
            name: category.name.clone(),
            description: category.description.clone(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookData {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_year: i32,
    pub description: String,
    pub user_id: i64,
    pub categories: Vec<CategoryData>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            publish_year: book.publish_year,
            description: book.description.clone(),
            user_id: book.user_id.0,
            categories: book.categories.iter().map(CategoryData::from).collect(),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// HTTP request body for registration (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Error)]
pub enum ParseRegisterRequestError {
    #[error("{0}")]
    Name(#[from] UserNameError),

    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("Password too short: minimum {min} characters")]
    PasswordTooShort { min: usize },
}

impl RegisterRequestBody {
    const MIN_PASSWORD_LENGTH: usize = 6;

    pub fn try_into_command(self) -> Result<RegisterUserCommand, ParseRegisterRequestError> {
        let name = UserName::new(self.name)?;
        let email = EmailAddress::new(self.email)?;
        if self.password.chars().count() < Self::MIN_PASSWORD_LENGTH {
            return Err(ParseRegisterRequestError::PasswordTooShort {
                min: Self::MIN_PASSWORD_LENGTH,
            });
        }
        Ok(RegisterUserCommand::new(name, email, self.password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// HTTP request body for login (raw JSON).
///
/// Deliberately unvalidated beyond presence: a malformed email must fail the
/// same way as an unknown one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    pub email: String,
    pub password: String,
}

/// HTTP request body for book create and update (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRequestBody {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publish_year: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseBookRequestError {
    #[error("Title must be 1-255 characters")]
    InvalidTitle,

    #[error("Author must be 1-100 characters")]
    InvalidAuthor,

    #[error("ISBN must be 10-20 characters")]
    InvalidIsbn,

    #[error("Publish year must be between 1000 and 9999")]
    InvalidPublishYear,

    #[error("Description too long: maximum 1000 characters")]
    InvalidDescription,
}

impl BookRequestBody {
    pub fn try_into_draft(self) -> Result<BookDraft, ParseBookRequestError> {
        let title = self.title.trim().to_string();
        if title.is_empty() || title.chars().count() > 255 {
            return Err(ParseBookRequestError::InvalidTitle);
        }

        let author = self.author.trim().to_string();
        if author.is_empty() || author.chars().count() > 100 {
            return Err(ParseBookRequestError::InvalidAuthor);
        }

        let isbn_length = self.isbn.chars().count();
        if !(10..=20).contains(&isbn_length) {
            return Err(ParseBookRequestError::InvalidIsbn);
        }

        if !(1000..=9999).contains(&self.publish_year) {
            return Err(ParseBookRequestError::InvalidPublishYear);
        }

        if self.description.chars().count() > 1000 {
            return Err(ParseBookRequestError::InvalidDescription);
        }

        Ok(BookDraft {
            title,
            author,
            isbn: self.isbn,
            publish_year: self.publish_year,
            description: self.description,
            category_ids: self.category_ids.into_iter().map(CategoryId).collect(),
        })
    }
}

impl From<ParseBookRequestError> for ApiError {
    fn from(err: ParseBookRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// HTTP request body for category create and update (raw JSON).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRequestBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCategoryRequestError {
    #[error("Name must be 2-100 characters")]
    InvalidName,

    #[error("Description too long: maximum 255 characters")]
    InvalidDescription,
}

impl CategoryRequestBody {
    pub fn try_into_draft(self) -> Result<CategoryDraft, ParseCategoryRequestError> {
        let name = self.name.trim().to_string();
        if !(2..=100).contains(&name.chars().count()) {
            return Err(ParseCategoryRequestError::InvalidName);
        }

        if self.description.chars().count() > 255 {
            return Err(ParseCategoryRequestError::InvalidDescription);
        }

        Ok(CategoryDraft {
            name,
            description: self.description,
        })
    }
}

impl From<ParseCategoryRequestError> for ApiError {
    fn from(err: ParseCategoryRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

use async_trait::async_trait;

use crate::user::errors::AuthError;
use crate::user::models::AuthOutcome;
use crate::user::models::EmailAddress;
use crate::user::models::NewUser;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::UserName;

/// Port for the authentication flow.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a bearer token.
    ///
    /// # Errors
    /// * `DuplicateEmail` - a live user with this email already exists
    /// * `Password` / `Token` - hashing or signing failed
    /// * `Database` - storage operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<AuthOutcome, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown email or wrong password, deliberately
    ///   indistinguishable
    /// * `Database` - storage operation failed
    async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError>;

    /// Retrieve a user by identifier, for the profile endpoint.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn get_user(&self, id: UserId) -> Result<User, AuthError>;

    /// Create the bootstrap administrator if no admin row exists yet.
    ///
    /// Idempotent: a no-op when an admin is already present.
    ///
    /// # Errors
    /// * `Password` - hashing failed
    /// * `Database` - storage operation failed
    async fn ensure_admin(
        &self,
        name: UserName,
        email: EmailAddress,
        password: &str,
    ) -> Result<(), AuthError>;
}

/// Persistence operations for the user aggregate.
///
/// Implementations must exclude soft-deleted rows from every lookup.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; the store assigns id and timestamps.
    ///
    /// # Errors
    /// * `DuplicateEmail` - unique constraint on email rejected the write
    /// * `Database` - storage operation failed
    async fn create(&self, user: NewUser) -> Result<User, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Whether any live admin user exists.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn admin_exists(&self) -> Result<bool, AuthError>;
}

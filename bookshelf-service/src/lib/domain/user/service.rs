use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;

use crate::user::errors::AuthError;
use crate::user::models::AuthOutcome;
use crate::user::models::EmailAddress;
use crate::user::models::NewUser;
use crate::user::models::RegisterUserCommand;
use crate::user::models::Role;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::UserName;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Authentication flow: registration, login, and identity lookup.
///
/// Orchestrates the password hasher and token service from the auth library
/// over the user repository.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl_hours: i64,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>, token_ttl_hours: i64) -> Self {
        Self {
            repository,
            authenticator,
            token_ttl_hours,
        }
    }

    fn claims_for(&self, user: &User) -> Claims {
        Claims::for_identity(
            user.id.0,
            user.email.as_str(),
            user.role.as_str(),
            self.token_ttl_hours,
        )
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<AuthOutcome, AuthError> {
        // Fast-path duplicate check; the storage unique constraint stays
        // authoritative under concurrent registration.
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(AuthError::DuplicateEmail(existing.email.to_string()));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
                role: Role::User,
            })
            .await?;

        let claims = self.claims_for(&user);
        let token = self.authenticator.issue_token(&claims)?;

        Ok(AuthOutcome {
            token,
            expires_at: claims.expires_at(),
            user,
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let claims = self.claims_for(&user);

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                auth::AuthenticationError::Password(err) => AuthError::Password(err.to_string()),
                auth::AuthenticationError::Jwt(err) => AuthError::Token(err.to_string()),
            })?;

        Ok(AuthOutcome {
            token: result.access_token,
            expires_at: claims.expires_at(),
            user,
        })
    }

    async fn get_user(&self, id: UserId) -> Result<User, AuthError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthError::NotFound(id.to_string()))
    }

    async fn ensure_admin(
        &self,
        name: UserName,
        email: EmailAddress,
        password: &str,
    ) -> Result<(), AuthError> {
        if self.repository.admin_exists().await? {
            return Ok(());
        }

        let password_hash = self.authenticator.hash_password(password)?;
        let created = self
            .repository
            .create(NewUser {
                name,
                email,
                password_hash,
                role: Role::Admin,
            })
            .await?;

        tracing::info!(email = %created.email, "Bootstrap admin user created");
        Ok(())
    }
}

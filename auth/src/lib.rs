//! Authentication library for the bookshelf service
//!
//! Provides the credential infrastructure the HTTP service builds on:
//! - Password hashing (Argon2id, random salt per digest)
//! - JWT bearer token issuance and validation (HS256, shared secret)
//! - Authentication coordination (verify credentials, then issue a token)
//!
//! The service defines its own domain types and adapts these primitives; this
//! crate knows nothing about storage or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let digest = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_identity(42, "alice@example.com", "user", 24);
//! let result = auth.authenticate("password123", &digest, &claims).unwrap();
//!
//! // Validate token on subsequent requests
//! let decoded = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;

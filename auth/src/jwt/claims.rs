use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token payload.
///
/// Self-contained identity: everything the service needs to scope a request
/// travels inside the token, nothing is looked up during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: numeric user identifier
    pub sub: i64,

    /// Email address of the authenticated user
    pub email: String,

    /// Role string ("user" or "admin"); the service parses it into its
    /// closed role enum and rejects anything else
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for an authenticated identity.
    ///
    /// Sets `iat` to now and `exp` to now + `expiration_hours`.
    pub fn for_identity(
        user_id: i64,
        email: impl Into<String>,
        role: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id,
            email: email.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Absolute expiry of the token, for the `expire_at` field in auth
    /// responses.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_identity_sets_window() {
        let claims = Claims::for_identity(7, "alice@example.com", "user", 24);

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_expires_at_matches_exp() {
        let claims = Claims::for_identity(7, "alice@example.com", "admin", 1);
        assert_eq!(claims.expires_at().timestamp(), claims.exp);
    }
}

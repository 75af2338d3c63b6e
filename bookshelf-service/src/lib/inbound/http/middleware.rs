use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use std::str::FromStr;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::models::Role;
use crate::user::models::UserId;

/// Extension type carrying the authenticated identity through the request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}

/// Middleware that validates bearer tokens and stores the identity in
/// request extensions.
///
/// Rejections never reveal whether a token was expired, forged, or malformed
/// beyond the header shape itself.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims: auth::Claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("token validation failed: {}", e);
        ApiError::Unauthorized("invalid or expired token".to_string()).into_response()
    })?;

    let role = Role::from_str(&claims.role).map_err(|_| {
        tracing::warn!(role = %claims.role, "token carried unknown role");
        ApiError::Unauthorized("invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(CurrentUser {
        user_id: UserId(claims.sub),
        email: claims.email,
        role,
    });

    Ok(next.run(req).await)
}

/// Middleware gating admin-only routes. Must run after `authenticate`.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    check_admin(&req).map_err(IntoResponse::into_response)?;
    Ok(next.run(req).await)
}

/// Forbidden whether the identity is missing or simply not an admin.
fn check_admin(req: &Request) -> Result<(), ApiError> {
    match req.extensions().get::<CurrentUser>() {
        Some(user) if user.role == Role::Admin => Ok(()),
        _ => Err(ApiError::Forbidden("admin privileges required".to_string())),
    }
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("missing authorization header".to_string()).into_response()
        })?;

    let header = header.to_str().map_err(|_| {
        ApiError::Unauthorized("invalid token format".to_string()).into_response()
    })?;

    // Exactly two space-separated parts with a Bearer scheme. An empty second
    // part is shape-valid; it goes on to token validation and fails there.
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(ApiError::Unauthorized("invalid token format".to_string()).into_response()),
    }
}

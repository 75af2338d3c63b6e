use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::messages::AuthResponseData;
use crate::inbound::http::messages::LoginRequestBody;
use crate::inbound::http::messages::UserData;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let outcome = state
        .auth_service
        .login(&body.email, &body.password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            token: outcome.token,
            user: UserData::from(&outcome.user),
            expire_at: outcome.expires_at,
        },
    ))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::messages::AuthResponseData;
use crate::inbound::http::messages::RegisterRequestBody;
use crate::inbound::http::messages::UserData;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<AuthResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let outcome = state.auth_service.register(command).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        AuthResponseData {
            token: outcome.token,
            user: UserData::from(&outcome.user),
            expire_at: outcome.expires_at,
        },
    ))
}

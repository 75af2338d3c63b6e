use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::category::models::CategoryId;
use crate::inbound::http::router::AppState;

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = CategoryId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.category_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

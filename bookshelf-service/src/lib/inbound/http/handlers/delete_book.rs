use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::book::models::BookId;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_book(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = BookId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state.book_service.delete(id, current_user.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::BookId;
use crate::inbound::http::messages::BookData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_book(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let id = BookId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let book = state.book_service.get(id, current_user.user_id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, BookData::from(&book)))
}

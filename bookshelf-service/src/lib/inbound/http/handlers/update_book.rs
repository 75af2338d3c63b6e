use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::book::models::BookId;
use crate::inbound::http::messages::BookData;
use crate::inbound::http::messages::BookRequestBody;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<BookRequestBody>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let id = BookId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let draft = body.try_into_draft()?;

    let book = state
        .book_service
        .update(id, current_user.user_id, draft)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, BookData::from(&book)))
}

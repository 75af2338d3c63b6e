use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::messages::BookData;
use crate::inbound::http::messages::BookRequestBody;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<BookRequestBody>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let draft = body.try_into_draft()?;

    let book = state
        .book_service
        .create(current_user.user_id, draft)
        .await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, BookData::from(&book)))
}

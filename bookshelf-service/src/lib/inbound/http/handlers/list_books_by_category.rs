use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::category::models::CategoryId;
use crate::inbound::http::messages::BookData;
use crate::inbound::http::router::AppState;

/// Public browse endpoint: all live books across all owners that carry the
/// given category.
pub async fn list_books_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    let id = CategoryId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let books = state.book_service.list_by_category(id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        books.iter().map(BookData::from).collect(),
    ))
}

use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::messages::CategoryData;
use crate::inbound::http::router::AppState;

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CategoryData>>, ApiError> {
    let categories = state.category_service.list().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        categories.iter().map(CategoryData::from).collect(),
    ))
}

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::category::models::CategoryId;
use crate::inbound::http::messages::CategoryData;
use crate::inbound::http::router::AppState;

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let id = CategoryId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let category = state.category_service.get(id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, CategoryData::from(&category)))
}

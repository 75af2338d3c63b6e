use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::category::models::CategoryId;
use crate::inbound::http::messages::CategoryData;
use crate::inbound::http::messages::CategoryRequestBody;
use crate::inbound::http::router::AppState;

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CategoryRequestBody>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let id = CategoryId::from_string(&id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let draft = body.try_into_draft()?;

    let category = state.category_service.update(id, draft).await?;

    Ok(ApiSuccess::new(StatusCode::OK, CategoryData::from(&category)))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::messages::CategoryData;
use crate::inbound::http::messages::CategoryRequestBody;
use crate::inbound::http::router::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CategoryRequestBody>,
) -> Result<ApiSuccess<CategoryData>, ApiError> {
    let draft = body.try_into_draft()?;

    let category = state.category_service.create(draft).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        CategoryData::from(&category),
    ))
}

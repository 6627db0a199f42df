use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::CreateCategory,
    AppState,
};

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let categories = db::fetch_all_categories(&state.db).await?;
    let elapsed = start.elapsed();

    info!(count = categories.len(), "Listed categories");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": categories,
            "count": categories.len(),
            "query_time_ms": elapsed.as_secs_f64() * 1000.0,
        })),
    ))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    let category = db::insert_category(&state.db, name).await?;

    info!(id = %category.id, name = %category.name, "Created category");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": category })),
    ))
}

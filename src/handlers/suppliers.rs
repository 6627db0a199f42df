use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{db, error::AppResult, AppState};

pub async fn list_suppliers(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let suppliers = db::fetch_all_suppliers(&state.db).await?;
    let elapsed = start.elapsed();

    info!(count = suppliers.len(), "Listed suppliers");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": suppliers,
            "count": suppliers.len(),
            "query_time_ms": elapsed.as_secs_f64() * 1000.0,
        })),
    ))
}

use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::{UpsertInventoryItem, UpsertOutcome},
    AppState,
};

pub async fn list_inventory(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let items = db::fetch_all_inventory(&state.db).await?;
    let elapsed = start.elapsed();

    info!(count = items.len(), "Listed inventory");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": items,
            "count": items.len(),
            "query_time_ms": elapsed.as_secs_f64() * 1000.0,
        })),
    ))
}

pub async fn upsert_inventory(
    State(state): State<AppState>,
    Json(payload): Json<UpsertInventoryItem>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    payload.validate().map_err(AppError::BadRequest)?;

    let (item, outcome) = db::upsert_inventory_item(&state.db, &payload).await?;

    info!(
        id = %item.id,
        name = %item.name,
        quantity = item.quantity,
        outcome = outcome.as_str(),
        "Upserted inventory item"
    );

    let (status, message) = match outcome {
        UpsertOutcome::Created => (StatusCode::CREATED, "Inventory item created"),
        UpsertOutcome::Updated => (StatusCode::OK, "Inventory updated successfully"),
    };

    Ok((
        status,
        Json(serde_json::json!({
            "data": item,
            "status": outcome.as_str(),
            "message": message,
        })),
    ))
}

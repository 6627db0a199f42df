use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    db,
    error::{AppError, AppResult},
    models::CreateOrder,
    AppState,
};

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrder>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    payload.validate().map_err(AppError::BadRequest)?;

    let order = db::create_order(&state.db, &payload).await?;

    info!(
        order_id = %order.id,
        supplier_id = %order.supplier_id,
        line_items = payload.items.len(),
        "Created order"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "order_id": order.id,
            "message": "Order created successfully",
        })),
    ))
}

//! 健康检查

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::core::error::CoreError;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// 走一次存储往返，存储不可用时返回 500
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    state.product_service.ping().await?;

    Ok(Json(json!({
        "status": "healthy",
        "store": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

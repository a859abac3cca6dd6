//! Health check endpoints

use axum::Json;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "menu-server",
        "message": "QR menu ordering API",
    }))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "menu-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

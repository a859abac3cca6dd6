//! HTTP API for menu-server

pub mod extract;
pub mod health;
pub mod orders;
pub mod restaurants;
pub mod sessions;

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Handler result: any response or an `AppError` envelope
pub type ApiResult<T> = Result<T, shared::error::AppError>;

/// Build the router with all middleware
pub fn create_router(state: AppState) -> Router {
    let guest = Router::new()
        .route("/api/sessions", post(sessions::create_session))
        .route("/api/restaurants/{slug}/menu", get(restaurants::get_menu))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/{order_id}", patch(orders::append_items));

    // Admin (admin_key query parameter)
    let admin = Router::new().route("/api/orders", get(orders::list_orders));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .merge(guest)
        .merge(admin)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

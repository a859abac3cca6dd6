//! Order endpoints: create, append, admin list

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use serde::Deserialize;
use shared::models::{OrderAppend, OrderCreate, OrderDetail, OrderResponse};

use super::ApiResult;
use super::extract::ApiJson;
use crate::auth::require_admin;
use crate::orders;
use crate::state::AppState;
use crate::util::now_millis;

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<OrderCreate>,
) -> ApiResult<(StatusCode, Json<OrderResponse>)> {
    let order = orders::create_order(&state.pool, &req, now_millis()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /api/orders/{order_id}
pub async fn append_items(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    ApiJson(req): ApiJson<OrderAppend>,
) -> ApiResult<Json<OrderResponse>> {
    let order = orders::append_items(&state.pool, order_id, &req, now_millis()).await?;
    Ok(Json(order))
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub admin_key: Option<String>,
    pub status: Option<String>,
}

/// GET /api/orders?admin_key=...&status=...
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> ApiResult<Json<Vec<OrderDetail>>> {
    require_admin(&state.admin_key, query.admin_key.as_deref())?;

    let details = orders::list_orders(&state.pool, query.status.as_deref()).await?;
    Ok(Json(details))
}

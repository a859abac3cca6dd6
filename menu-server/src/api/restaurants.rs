//! Menu endpoint

use axum::Json;
use axum::extract::{Path, State};
use shared::models::MenuResponse;

use super::ApiResult;
use crate::menu;
use crate::state::AppState;

/// GET /api/restaurants/{slug}/menu
pub async fn get_menu(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MenuResponse>> {
    let menu = menu::get_menu(&state.pool, &slug).await?;
    Ok(Json(menu))
}

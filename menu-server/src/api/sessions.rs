//! Guest session endpoint

use axum::Json;
use axum::extract::State;
use http::StatusCode;
use shared::error::AppError;
use shared::models::{SessionCreate, SessionResponse};

use super::ApiResult;
use super::extract::ApiJson;
use crate::db::datetime_from_millis;
use crate::sessions;
use crate::state::AppState;
use crate::util::now_millis;

/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SessionCreate>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let session = sessions::create_or_reuse_session(
        &state.pool,
        &req.restaurant_slug,
        &req.table_id,
        state.session_ttl,
        now_millis(),
    )
    .await?;

    let expires_at = datetime_from_millis(session.expires_at)
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.session_id,
            expires_at,
        }),
    ))
}

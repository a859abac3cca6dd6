//! Session Manager
//!
//! Issues guest sessions scoped to a (restaurant, table) pair. A live session
//! is reused as-is (expiry is never extended); expiry is the only way a
//! session ends.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::{self, UnitOfWork, sessions::GuestSession};
use crate::error::ServiceResult;
use crate::validation::{MAX_IDENT_LEN, validate_required_text};

/// Return the live session for the table, or create one expiring at `now + ttl`.
///
/// Two concurrent first requests for the same table may both create a
/// session; either one is valid for ordering.
pub async fn create_or_reuse_session(
    pool: &SqlitePool,
    restaurant_slug: &str,
    table_id: &str,
    ttl: chrono::Duration,
    now: i64,
) -> ServiceResult<GuestSession> {
    validate_required_text(restaurant_slug, "restaurant_slug", MAX_IDENT_LEN)?;
    validate_required_text(table_id, "table_id", MAX_IDENT_LEN)?;

    let mut uow = UnitOfWork::begin_write(pool).await?;

    if let Some(existing) =
        db::sessions::find_live_for_table(uow.conn(), restaurant_slug, table_id, now).await?
    {
        uow.commit().await?;
        tracing::debug!(
            session_id = %existing.session_id,
            restaurant_slug,
            table_id,
            "Reusing live guest session"
        );
        return Ok(existing);
    }

    let session = GuestSession {
        session_id: Uuid::new_v4(),
        restaurant_slug: restaurant_slug.to_string(),
        table_id: table_id.to_string(),
        expires_at: now + ttl.num_milliseconds(),
    };
    db::sessions::insert_session(uow.conn(), &session, now).await?;
    uow.commit().await?;

    tracing::info!(
        session_id = %session.session_id,
        restaurant_slug,
        table_id,
        expires_at = session.expires_at,
        "Guest session created"
    );
    Ok(session)
}

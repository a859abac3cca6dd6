//! Guest session database operations

use sqlx::SqliteConnection;
use uuid::Uuid;

use super::BoxError;

#[derive(Debug, Clone, sqlx::FromRow)]
struct GuestSessionRow {
    session_id: String,
    restaurant_slug: String,
    table_id: String,
    expires_at: i64,
}

/// Guest session as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSession {
    pub session_id: Uuid,
    pub restaurant_slug: String,
    pub table_id: String,
    /// Unix millis
    pub expires_at: i64,
}

impl TryFrom<GuestSessionRow> for GuestSession {
    type Error = BoxError;

    fn try_from(row: GuestSessionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            session_id: Uuid::parse_str(&row.session_id)?,
            restaurant_slug: row.restaurant_slug,
            table_id: row.table_id,
            expires_at: row.expires_at,
        })
    }
}

/// Live session for a (restaurant, table) pair, if any (`expires_at > now`)
pub async fn find_live_for_table(
    conn: &mut SqliteConnection,
    restaurant_slug: &str,
    table_id: &str,
    now: i64,
) -> Result<Option<GuestSession>, BoxError> {
    let row: Option<GuestSessionRow> = sqlx::query_as(
        r#"
        SELECT session_id, restaurant_slug, table_id, expires_at
        FROM guest_sessions
        WHERE restaurant_slug = ? AND table_id = ? AND expires_at > ?
        ORDER BY expires_at DESC, id DESC
        LIMIT 1
        "#,
    )
    .bind(restaurant_slug)
    .bind(table_id)
    .bind(now)
    .fetch_optional(conn)
    .await?;

    row.map(GuestSession::try_from).transpose()
}

/// Live session by its opaque id (`expires_at > now`)
pub async fn find_live_by_id(
    conn: &mut SqliteConnection,
    session_id: Uuid,
    now: i64,
) -> Result<Option<GuestSession>, BoxError> {
    let row: Option<GuestSessionRow> = sqlx::query_as(
        r#"
        SELECT session_id, restaurant_slug, table_id, expires_at
        FROM guest_sessions
        WHERE session_id = ? AND expires_at > ?
        "#,
    )
    .bind(session_id.to_string())
    .bind(now)
    .fetch_optional(conn)
    .await?;

    row.map(GuestSession::try_from).transpose()
}

pub async fn insert_session(
    conn: &mut SqliteConnection,
    session: &GuestSession,
    now: i64,
) -> Result<(), BoxError> {
    sqlx::query(
        r#"
        INSERT INTO guest_sessions (session_id, restaurant_slug, table_id, expires_at, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(session.session_id.to_string())
    .bind(&session.restaurant_slug)
    .bind(&session.table_id)
    .bind(session.expires_at)
    .bind(now)
    .execute(conn)
    .await?;
    Ok(())
}

//! Guest Session Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create (or reuse) a guest session for a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreate {
    pub restaurant_slug: String,
    pub table_id: String,
}

/// Issued guest session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::SessionNotFound
            | Self::RestaurantNotFound
            | Self::OrderNotFound
            | Self::MenuItemNotFound
            | Self::ModifierNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::OrderNotPending | Self::OrderConcurrentUpdate => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::InvalidAdminKey => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

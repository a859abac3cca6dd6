//! Unified error codes for the menu ordering backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication / guest session errors
//! - 2xxx: Permission errors
//! - 3xxx: Restaurant errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu catalog errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth / Session ====================
    /// Admin key missing or wrong
    InvalidAdminKey = 1002,
    /// Guest session missing or expired
    SessionNotFound = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 3001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is not pending and cannot be changed
    OrderNotPending = 4002,
    /// Order has no line items
    OrderEmpty = 4007,
    /// Line item quantity out of range
    InvalidQuantity = 4008,
    /// Order was changed by another request
    OrderConcurrentUpdate = 4009,
    /// Unknown order status filter
    InvalidOrderStatus = 4010,

    // ==================== 5xxx: Payment ====================
    /// Payment method label missing
    PaymentMethodRequired = 5003,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Modifier not found
    ModifierNotFound = 6301,

    // ==================== 7xxx: Table ====================
    /// Table id does not match the guest session
    TableMismatch = 7005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth / Session
            ErrorCode::InvalidAdminKey => "Invalid admin key",
            ErrorCode::SessionNotFound => "Session not found or expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderNotPending => "Order is not pending",
            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::InvalidQuantity => "Invalid item quantity",
            ErrorCode::OrderConcurrentUpdate => "Order was modified concurrently, please retry",
            ErrorCode::InvalidOrderStatus => "Invalid order status",

            // Payment
            ErrorCode::PaymentMethodRequired => "Payment method is required",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::ModifierNotFound => "Modifier not found",

            // Table
            ErrorCode::TableMismatch => "Table ID mismatch",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth / Session
            1002 => Ok(ErrorCode::InvalidAdminKey),
            1005 => Ok(ErrorCode::SessionNotFound),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Restaurant
            3001 => Ok(ErrorCode::RestaurantNotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderNotPending),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::InvalidQuantity),
            4009 => Ok(ErrorCode::OrderConcurrentUpdate),
            4010 => Ok(ErrorCode::InvalidOrderStatus),

            // Payment
            5003 => Ok(ErrorCode::PaymentMethodRequired),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),
            6301 => Ok(ErrorCode::ModifierNotFound),

            // Table
            7005 => Ok(ErrorCode::TableMismatch),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::SessionNotFound.code(), 1005);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::OrderNotPending.code(), 4002);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 6001);
        assert_eq!(ErrorCode::TableMismatch.code(), 7005);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::OrderNotFound.is_success());
    }

    #[test]
    fn test_try_from_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidAdminKey,
            ErrorCode::SessionNotFound,
            ErrorCode::RestaurantNotFound,
            ErrorCode::OrderNotPending,
            ErrorCode::OrderConcurrentUpdate,
            ErrorCode::PaymentMethodRequired,
            ErrorCode::ModifierNotFound,
            ErrorCode::TableMismatch,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
        assert_eq!(
            InvalidErrorCode(42).to_string(),
            "invalid error code: 42"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("6301").unwrap();
        assert_eq!(code, ErrorCode::ModifierNotFound);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::SessionNotFound.message(),
            "Session not found or expired"
        );
        assert_eq!(ErrorCode::TableMismatch.message(), "Table ID mismatch");
    }
}

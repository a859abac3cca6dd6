//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Order status
///
/// `Pending` is the only mutable state; `Completed` and `Cancelled` are
/// terminal and read-only for guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// One requested line: menu item, quantity and modifier selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub item_id: i64,
    pub quantity: i32,
    #[serde(default)]
    pub modifier_ids: Option<Vec<i64>>,
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderLineInput {
    /// Selected modifier ids (empty when none were sent)
    pub fn modifier_ids(&self) -> &[i64] {
        self.modifier_ids.as_deref().unwrap_or_default()
    }
}

/// Payment information (label only, no processing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub session_id: Uuid,
    pub table_id: String,
    pub items: Vec<OrderLineInput>,
    pub payment: PaymentInfo,
}

/// Append items payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderAppend {
    pub items: Vec<OrderLineInput>,
}

/// Result of create/append
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub order_id: i64,
    pub status: OrderStatus,
    #[serde(with = "crate::money::display")]
    pub total_amount: Decimal,
}

/// Modifier selection on an order line (snapshot price)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailModifier {
    pub id: i64,
    pub name: String,
    #[serde(with = "crate::money::display")]
    pub price: Decimal,
}

/// Order line with its snapshot prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetailItem {
    pub item_id: i64,
    pub name: String,
    pub quantity: i32,
    #[serde(with = "crate::money::display")]
    pub unit_price: Decimal,
    pub modifiers: Vec<OrderDetailModifier>,
    pub note: Option<String>,
}

/// Fully expanded order (admin listing)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: i64,
    pub status: OrderStatus,
    pub table_id: String,
    #[serde(with = "crate::money::display")]
    pub subtotal: Decimal,
    #[serde(with = "crate::money::display")]
    pub tax: Decimal,
    #[serde(with = "crate::money::display")]
    pub total_amount: Decimal,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderDetailItem>,
}

//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant header returned with a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

/// Modifier attached to a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuModifier {
    pub id: i64,
    pub name: String,
    #[serde(with = "crate::money::display")]
    pub price: Decimal,
}

/// Menu item as shown to guests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    #[serde(with = "crate::money::display")]
    pub price: Decimal,
    pub available: bool,
    /// `None` (JSON null) when the item has no modifiers
    pub modifiers: Option<Vec<MenuModifier>>,
}

/// Full menu for one restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuResponse {
    pub restaurant: RestaurantInfo,
    pub items: Vec<MenuItemView>,
}

//! Catalog price snapshot for one request

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::OrderLineInput;
use sqlx::SqliteConnection;

use crate::db::{self, BoxError};

/// Prices of the menu items and modifiers referenced by a request.
///
/// Ids absent from the catalog are simply absent here; the calculator
/// reports them as not found.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    items: HashMap<i64, Decimal>,
    modifiers: HashMap<i64, Decimal>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&mut self, item_id: i64, price: Decimal) {
        self.items.insert(item_id, price);
    }

    pub fn insert_modifier(&mut self, modifier_id: i64, price: Decimal) {
        self.modifiers.insert(modifier_id, price);
    }

    pub fn item_price(&self, item_id: i64) -> Option<Decimal> {
        self.items.get(&item_id).copied()
    }

    pub fn modifier_price(&self, modifier_id: i64) -> Option<Decimal> {
        self.modifiers.get(&modifier_id).copied()
    }

    /// Read current prices for every id referenced by `lines`
    pub async fn load(
        conn: &mut SqliteConnection,
        lines: &[OrderLineInput],
    ) -> Result<Self, BoxError> {
        let mut book = Self::new();
        for line in lines {
            if !book.items.contains_key(&line.item_id)
                && let Some(price) = db::catalog::find_item_price(&mut *conn, line.item_id).await?
            {
                book.insert_item(line.item_id, price);
            }
            for &modifier_id in line.modifier_ids() {
                if !book.modifiers.contains_key(&modifier_id)
                    && let Some(price) =
                        db::catalog::find_modifier_price(&mut *conn, modifier_id).await?
                {
                    book.insert_modifier(modifier_id, price);
                }
            }
        }
        Ok(book)
    }
}

//! Order item materialization
//!
//! Writes one `order_items` row per requested line and one
//! `order_item_modifiers` row per selected modifier, copying the catalog
//! price at the time of the write. Callers run this inside the same
//! [`UnitOfWork`](crate::db::UnitOfWork) as the header write, so a failure
//! on any line discards the whole batch.

use rust_decimal::Decimal;
use shared::models::OrderLineInput;
use sqlx::SqliteConnection;

use crate::db;
use crate::error::ServiceResult;
use crate::pricing::PricingError;

/// Modifier selection as written
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedModifier {
    pub modifier_id: i64,
    /// Snapshot price
    pub price: Decimal,
}

/// Order line as written
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedItem {
    pub order_item_id: i64,
    pub item_id: i64,
    pub quantity: i32,
    /// Snapshot price
    pub unit_price: Decimal,
    pub modifiers: Vec<MaterializedModifier>,
    pub note: Option<String>,
}

/// Persist `lines` under `order_id`.
///
/// Item and modifier ids are looked up again here; a missing id fails the
/// call with the same error the pricing engine would raise.
pub async fn materialize_order_items(
    conn: &mut SqliteConnection,
    order_id: i64,
    lines: &[OrderLineInput],
    now: i64,
) -> ServiceResult<Vec<MaterializedItem>> {
    let mut written = Vec::with_capacity(lines.len());

    for line in lines {
        let unit_price = db::catalog::find_item_price(&mut *conn, line.item_id)
            .await?
            .ok_or(PricingError::ItemNotFound(line.item_id))?;

        let order_item_id = db::orders::insert_order_item(
            &mut *conn,
            order_id,
            line.item_id,
            line.quantity,
            unit_price,
            line.note.as_deref(),
            now,
        )
        .await?;

        let mut modifiers = Vec::with_capacity(line.modifier_ids().len());
        for &modifier_id in line.modifier_ids() {
            let price = db::catalog::find_modifier_price(&mut *conn, modifier_id)
                .await?
                .ok_or(PricingError::ModifierNotFound(modifier_id))?;
            db::orders::insert_order_item_modifier(&mut *conn, order_item_id, modifier_id, price)
                .await?;
            modifiers.push(MaterializedModifier { modifier_id, price });
        }

        written.push(MaterializedItem {
            order_item_id,
            item_id: line.item_id,
            quantity: line.quantity,
            unit_price,
            modifiers,
            note: line.note.clone(),
        });
    }

    tracing::debug!(order_id, lines = written.len(), "Order items materialized");
    Ok(written)
}

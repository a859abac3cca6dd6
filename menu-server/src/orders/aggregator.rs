//! Order view assembly
//!
//! Header, lines and modifier selections are read through one connection so
//! that callers holding a transaction get a consistent snapshot.

use std::collections::HashMap;

use shared::models::{OrderDetail, OrderDetailItem, OrderDetailModifier, OrderStatus};
use sqlx::SqliteConnection;

use crate::db::orders::{OrderHeader, OrderItemModifierRecord};
use crate::db::{self, BoxError, datetime_from_millis};

/// Full view of one order, or `None` if the id does not exist
pub async fn get_order_details(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<OrderDetail>, BoxError> {
    let Some(header) = db::orders::find_order(&mut *conn, order_id).await? else {
        return Ok(None);
    };
    assemble(conn, header).await.map(Some)
}

/// Full views of all orders (optionally one status), newest first
pub async fn list_order_details(
    conn: &mut SqliteConnection,
    status: Option<OrderStatus>,
) -> Result<Vec<OrderDetail>, BoxError> {
    let headers = db::orders::list_orders(&mut *conn, status).await?;
    let mut details = Vec::with_capacity(headers.len());
    for header in headers {
        details.push(assemble(&mut *conn, header).await?);
    }
    Ok(details)
}

async fn assemble(
    conn: &mut SqliteConnection,
    header: OrderHeader,
) -> Result<OrderDetail, BoxError> {
    let items = db::orders::list_order_items(&mut *conn, header.id).await?;
    let modifiers = db::orders::list_order_item_modifiers(&mut *conn, header.id).await?;

    let mut by_line: HashMap<i64, Vec<OrderDetailModifier>> = HashMap::new();
    for OrderItemModifierRecord {
        order_item_id,
        modifier_id,
        name,
        price,
    } in modifiers
    {
        by_line.entry(order_item_id).or_default().push(OrderDetailModifier {
            id: modifier_id,
            name,
            price,
        });
    }

    let items = items
        .into_iter()
        .map(|item| OrderDetailItem {
            modifiers: by_line.remove(&item.id).unwrap_or_default(),
            item_id: item.menu_item_id,
            name: item.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
            note: item.note,
        })
        .collect();

    Ok(OrderDetail {
        order_id: header.id,
        status: header.status,
        table_id: header.table_id,
        subtotal: header.totals.subtotal,
        tax: header.totals.tax,
        total_amount: header.totals.total,
        payment_method: header.payment_method,
        created_at: datetime_from_millis(header.created_at)?,
        updated_at: datetime_from_millis(header.updated_at)?,
        items,
    })
}

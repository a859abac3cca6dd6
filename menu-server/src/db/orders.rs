//! Order / order item database operations

use rust_decimal::Decimal;
use shared::models::OrderStatus;
use sqlx::SqliteConnection;
use uuid::Uuid;

use super::{BoxError, decimal_column};
use crate::pricing::OrderTotals;

// ── Order Header ──

#[derive(Debug, Clone, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    session_id: String,
    table_id: String,
    status: String,
    subtotal: String,
    tax: String,
    total_amount: String,
    payment_method: String,
    version: i64,
    created_at: i64,
    updated_at: i64,
}

/// Order header as stored
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHeader {
    pub id: i64,
    pub session_id: Uuid,
    pub table_id: String,
    pub status: OrderStatus,
    pub totals: OrderTotals,
    pub payment_method: String,
    /// Optimistic concurrency counter, bumped on every header write
    pub version: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<OrderRow> for OrderHeader {
    type Error = BoxError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            session_id: Uuid::parse_str(&row.session_id)?,
            table_id: row.table_id,
            status: row.status.parse()?,
            totals: OrderTotals {
                subtotal: decimal_column(&row.subtotal, "orders.subtotal")?,
                tax: decimal_column(&row.tax, "orders.tax")?,
                total: decimal_column(&row.total_amount, "orders.total_amount")?,
            },
            payment_method: row.payment_method,
            version: row.version,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const ORDER_COLUMNS: &str = "id, session_id, table_id, status, subtotal, tax, total_amount, \
     payment_method, version, created_at, updated_at";

pub async fn insert_order(
    conn: &mut SqliteConnection,
    session_id: Uuid,
    table_id: &str,
    totals: &OrderTotals,
    payment_method: &str,
    now: i64,
) -> Result<i64, BoxError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO orders (
            session_id, table_id, status, subtotal, tax, total_amount,
            payment_method, version, created_at, updated_at
        )
        VALUES (?, ?, 'pending', ?, ?, ?, ?, 0, ?, ?)
        RETURNING id
        "#,
    )
    .bind(session_id.to_string())
    .bind(table_id)
    .bind(totals.subtotal.to_string())
    .bind(totals.tax.to_string())
    .bind(totals.total.to_string())
    .bind(payment_method)
    .bind(now)
    .bind(now)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn find_order(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<OrderHeader>, BoxError> {
    let row: Option<OrderRow> =
        sqlx::query_as(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
            .bind(order_id)
            .fetch_optional(conn)
            .await?;
    row.map(OrderHeader::try_from).transpose()
}

/// Compare-and-swap the totals of a pending order.
///
/// Returns `false` when the order is no longer pending or another writer
/// bumped `version` since `expected_version` was read.
pub async fn update_pending_totals(
    conn: &mut SqliteConnection,
    order_id: i64,
    expected_version: i64,
    totals: &OrderTotals,
    now: i64,
) -> Result<bool, BoxError> {
    let result = sqlx::query(
        r#"
        UPDATE orders
        SET subtotal = ?, tax = ?, total_amount = ?, updated_at = ?, version = version + 1
        WHERE id = ? AND version = ? AND status = 'pending'
        "#,
    )
    .bind(totals.subtotal.to_string())
    .bind(totals.tax.to_string())
    .bind(totals.total.to_string())
    .bind(now)
    .bind(order_id)
    .bind(expected_version)
    .execute(conn)
    .await?;
    Ok(result.rows_affected() == 1)
}

/// Order headers, newest first, optionally filtered by status
pub async fn list_orders(
    conn: &mut SqliteConnection,
    status: Option<OrderStatus>,
) -> Result<Vec<OrderHeader>, BoxError> {
    let rows: Vec<OrderRow> = match status {
        Some(status) => {
            sqlx::query_as(&format!(
                "SELECT {ORDER_COLUMNS} FROM orders WHERE status = ? ORDER BY created_at DESC, id DESC"
            ))
            .bind(status.as_str())
            .fetch_all(conn)
            .await?
        }
        None => {
            sqlx::query_as(&format!(
                "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"
            ))
            .fetch_all(conn)
            .await?
        }
    };
    rows.into_iter().map(OrderHeader::try_from).collect()
}

// ── Order Items ──

pub async fn insert_order_item(
    conn: &mut SqliteConnection,
    order_id: i64,
    menu_item_id: i64,
    quantity: i32,
    unit_price: Decimal,
    note: Option<&str>,
    now: i64,
) -> Result<i64, BoxError> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO order_items (order_id, menu_item_id, quantity, unit_price, note, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(order_id)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(unit_price.to_string())
    .bind(note)
    .bind(now)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

pub async fn insert_order_item_modifier(
    conn: &mut SqliteConnection,
    order_item_id: i64,
    modifier_id: i64,
    price: Decimal,
) -> Result<(), BoxError> {
    sqlx::query(
        "INSERT INTO order_item_modifiers (order_item_id, modifier_id, price) VALUES (?, ?, ?)",
    )
    .bind(order_item_id)
    .bind(modifier_id)
    .bind(price.to_string())
    .execute(conn)
    .await?;
    Ok(())
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    menu_item_id: i64,
    name: String,
    quantity: i32,
    unit_price: String,
    note: Option<String>,
}

/// Order line joined with its menu item name
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub id: i64,
    pub menu_item_id: i64,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub note: Option<String>,
}

pub async fn list_order_items(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Vec<OrderItemRecord>, BoxError> {
    let rows: Vec<OrderItemRow> = sqlx::query_as(
        r#"
        SELECT oi.id, oi.menu_item_id, mi.name, oi.quantity, oi.unit_price, oi.note
        FROM order_items oi
        JOIN menu_items mi ON mi.id = oi.menu_item_id
        WHERE oi.order_id = ?
        ORDER BY oi.id
        "#,
    )
    .bind(order_id)
    .fetch_all(conn)
    .await?;

    rows.into_iter()
        .map(|r| {
            Ok(OrderItemRecord {
                unit_price: decimal_column(&r.unit_price, "order_items.unit_price")?,
                id: r.id,
                menu_item_id: r.menu_item_id,
                name: r.name,
                quantity: r.quantity,
                note: r.note,
            })
        })
        .collect()
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct OrderItemModifierRow {
    order_item_id: i64,
    modifier_id: i64,
    name: String,
    price: String,
}

/// Modifier selection of an order line (snapshot price)
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemModifierRecord {
    pub order_item_id: i64,
    pub modifier_id: i64,
    pub name: String,
    pub price: Decimal,
}

/// All modifier selections of one order, in insertion order
pub async fn list_order_item_modifiers(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Vec<OrderItemModifierRecord>, BoxError> {
    let rows: Vec<OrderItemModifierRow> = sqlx::query_as(
        r#"
        SELECT oim.order_item_id, oim.modifier_id, m.name, oim.price
        FROM order_item_modifiers oim
        JOIN order_items oi ON oi.id = oim.order_item_id
        JOIN modifiers m ON m.id = oim.modifier_id
        WHERE oi.order_id = ?
        ORDER BY oim.id
        "#,
    )
    .bind(order_id)
    .fetch_all(conn)
    .await?;

    rows.into_iter()
        .map(|r| {
            Ok(OrderItemModifierRecord {
                price: decimal_column(&r.price, "order_item_modifiers.price")?,
                order_item_id: r.order_item_id,
                modifier_id: r.modifier_id,
                name: r.name,
            })
        })
        .collect()
}

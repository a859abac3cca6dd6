//! Order lifecycle: create, append, list
//!
//! Each operation is one [`UnitOfWork`]: pricing reads, the header write and
//! every line write commit together or not at all. Only `pending` orders are
//! ever written; `completed` and `cancelled` are read-only here.

use shared::error::{AppError, ErrorCode};
use shared::models::{
    OrderAppend, OrderCreate, OrderDetail, OrderLineInput, OrderResponse, OrderStatus,
};
use sqlx::SqlitePool;

use super::{aggregator, materializer};
use crate::db::{self, UnitOfWork};
use crate::error::ServiceResult;
use crate::pricing::{self, PriceBook};
use crate::validation::{
    MAX_IDENT_LEN, MAX_LABEL_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};

/// Request-shape checks that need no database access
fn validate_lines(lines: &[OrderLineInput]) -> ServiceResult<()> {
    pricing::validate_lines(lines)?;
    for line in lines {
        validate_optional_text(line.note.as_deref(), "note", MAX_NOTE_LEN)?;
    }
    Ok(())
}

fn validate_payment_method(method: &str) -> Result<(), AppError> {
    if method.trim().is_empty() {
        return Err(AppError::new(ErrorCode::PaymentMethodRequired));
    }
    validate_required_text(method, "payment.method", MAX_LABEL_LEN)
}

/// Create a pending order for a live guest session.
///
/// Session and table are checked before any pricing happens.
pub async fn create_order(
    pool: &SqlitePool,
    req: &OrderCreate,
    now: i64,
) -> ServiceResult<OrderResponse> {
    validate_required_text(&req.table_id, "table_id", MAX_IDENT_LEN)?;
    validate_payment_method(&req.payment.method)?;
    validate_lines(&req.items)?;

    let mut uow = UnitOfWork::begin_write(pool).await?;

    let session = db::sessions::find_live_by_id(uow.conn(), req.session_id, now)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::SessionNotFound)
                .with_detail("session_id", req.session_id.to_string())
        })?;

    if session.table_id != req.table_id {
        tracing::warn!(
            session_id = %session.session_id,
            session_table = %session.table_id,
            requested_table = %req.table_id,
            "Order rejected: table does not match session"
        );
        return Err(AppError::new(ErrorCode::TableMismatch)
            .with_detail("table_id", req.table_id.clone())
            .into());
    }

    let book = PriceBook::load(uow.conn(), &req.items).await?;
    let totals = pricing::calculate_order_total(&req.items, &book, None)?;

    let order_id = db::orders::insert_order(
        uow.conn(),
        session.session_id,
        &session.table_id,
        &totals,
        req.payment.method.trim(),
        now,
    )
    .await?;
    materializer::materialize_order_items(uow.conn(), order_id, &req.items, now).await?;
    uow.commit().await?;

    tracing::info!(
        order_id,
        session_id = %session.session_id,
        restaurant_slug = %session.restaurant_slug,
        table_id = %session.table_id,
        lines = req.items.len(),
        total = %totals.display().total,
        "Order created"
    );

    Ok(OrderResponse {
        order_id,
        status: OrderStatus::Pending,
        total_amount: totals.total,
    })
}

/// Add lines to a pending order.
///
/// Existing lines are left untouched; the new lines are priced on top of the
/// stored subtotal. A concurrent writer that committed first makes this call
/// fail with `OrderConcurrentUpdate` instead of losing its update.
pub async fn append_items(
    pool: &SqlitePool,
    order_id: i64,
    req: &OrderAppend,
    now: i64,
) -> ServiceResult<OrderResponse> {
    validate_lines(&req.items)?;

    let mut uow = UnitOfWork::begin_write(pool).await?;

    let header = db::orders::find_order(uow.conn(), order_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id))?;

    if header.status != OrderStatus::Pending {
        return Err(AppError::new(ErrorCode::OrderNotPending)
            .with_detail("order_id", order_id)
            .with_detail("status", header.status.as_str())
            .into());
    }

    let book = PriceBook::load(uow.conn(), &req.items).await?;
    let totals = pricing::calculate_order_total(&req.items, &book, Some(header.totals.subtotal))?;

    let swapped =
        db::orders::update_pending_totals(uow.conn(), order_id, header.version, &totals, now)
            .await?;
    if !swapped {
        tracing::warn!(order_id, version = header.version, "Append lost a concurrent update race");
        return Err(AppError::new(ErrorCode::OrderConcurrentUpdate)
            .with_detail("order_id", order_id)
            .into());
    }

    materializer::materialize_order_items(uow.conn(), order_id, &req.items, now).await?;
    uow.commit().await?;

    tracing::info!(
        order_id,
        lines = req.items.len(),
        total = %totals.display().total,
        "Order items appended"
    );

    Ok(OrderResponse {
        order_id,
        status: OrderStatus::Pending,
        total_amount: totals.total,
    })
}

/// Expanded orders, newest first, optionally filtered by status
pub async fn list_orders(
    pool: &SqlitePool,
    status: Option<&str>,
) -> ServiceResult<Vec<OrderDetail>> {
    let status = status
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<OrderStatus>().map_err(|e| {
                AppError::with_message(ErrorCode::InvalidOrderStatus, e.to_string())
                    .with_detail("status", s)
            })
        })
        .transpose()?;

    let mut uow = UnitOfWork::begin(pool).await?;
    let details = aggregator::list_order_details(uow.conn(), status).await?;
    uow.commit().await?;
    Ok(details)
}

//! Order total calculation
//!
//! - `subtotal = seed + Σ (item_price × qty + Σ modifier_price × qty)`
//! - `tax = subtotal × 5%`
//! - `total = subtotal + tax`
//!
//! No intermediate rounding; see [`shared::money::round_money`] for display.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::OrderLineInput;
use shared::money::round_money;
use thiserror::Error;

use super::PriceBook;

/// Fixed tax rate (5%)
pub const TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Order money totals, exact (unrounded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Derive tax and total from a subtotal
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    /// Totals rounded to currency precision, for output only
    pub fn display(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            tax: round_money(self.tax),
            total: round_money(self.total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Order must contain at least one item")]
    EmptyOrder,

    #[error(
        "Quantity for menu item {item_id} must be between 1 and {max}, got {quantity}",
        max = MAX_QUANTITY
    )]
    InvalidQuantity { item_id: i64, quantity: i32 },

    #[error("Menu item {0} not found")]
    ItemNotFound(i64),

    #[error("Modifier {0} not found")]
    ModifierNotFound(i64),
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let message = err.to_string();
        match err {
            PricingError::EmptyOrder => AppError::with_message(ErrorCode::OrderEmpty, message),
            PricingError::InvalidQuantity { item_id, quantity } => {
                AppError::with_message(ErrorCode::InvalidQuantity, message)
                    .with_detail("item_id", item_id)
                    .with_detail("quantity", quantity)
            }
            PricingError::ItemNotFound(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, message)
                    .with_detail("item_id", id)
            }
            PricingError::ModifierNotFound(id) => {
                AppError::with_message(ErrorCode::ModifierNotFound, message)
                    .with_detail("modifier_id", id)
            }
        }
    }
}

/// Check the shape of a request before any catalog lookup
pub fn validate_lines(lines: &[OrderLineInput]) -> Result<(), PricingError> {
    if lines.is_empty() {
        return Err(PricingError::EmptyOrder);
    }
    for line in lines {
        if !(1..=MAX_QUANTITY).contains(&line.quantity) {
            return Err(PricingError::InvalidQuantity {
                item_id: line.item_id,
                quantity: line.quantity,
            });
        }
    }
    Ok(())
}

/// Price of one line: item and modifiers, each scaled by quantity
pub fn line_total(line: &OrderLineInput, book: &PriceBook) -> Result<Decimal, PricingError> {
    let quantity = Decimal::from(line.quantity);

    let item_price = book
        .item_price(line.item_id)
        .ok_or(PricingError::ItemNotFound(line.item_id))?;
    let mut total = item_price * quantity;

    for &modifier_id in line.modifier_ids() {
        let modifier_price = book
            .modifier_price(modifier_id)
            .ok_or(PricingError::ModifierNotFound(modifier_id))?;
        total += modifier_price * quantity;
    }

    Ok(total)
}

/// Compute order totals.
///
/// `existing_subtotal` is the current subtotal of the order being appended
/// to; new lines are added on top of it. `None` prices a new order.
pub fn calculate_order_total(
    lines: &[OrderLineInput],
    book: &PriceBook,
    existing_subtotal: Option<Decimal>,
) -> Result<OrderTotals, PricingError> {
    validate_lines(lines)?;

    let mut subtotal = existing_subtotal.unwrap_or(Decimal::ZERO);
    for line in lines {
        subtotal += line_total(line, book)?;
    }

    Ok(OrderTotals::from_subtotal(subtotal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(item_id: i64, quantity: i32, modifier_ids: &[i64]) -> OrderLineInput {
        OrderLineInput {
            item_id,
            quantity,
            modifier_ids: if modifier_ids.is_empty() {
                None
            } else {
                Some(modifier_ids.to_vec())
            },
            note: None,
        }
    }

    /// Burger 15.00, Salad 10.00, Extra Cheese 2.50, Add Bacon 3.00
    fn book() -> PriceBook {
        let mut book = PriceBook::new();
        book.insert_item(1, dec("15.00"));
        book.insert_item(2, dec("10.00"));
        book.insert_modifier(10, dec("2.50"));
        book.insert_modifier(11, dec("3.00"));
        book
    }

    #[test]
    fn test_tax_rate_is_five_percent() {
        assert_eq!(TAX_RATE, dec("0.05"));
    }

    #[test]
    fn test_reference_order() {
        let lines = vec![line(1, 1, &[10]), line(2, 2, &[])];
        let totals = calculate_order_total(&lines, &book(), None).unwrap();

        assert_eq!(totals.subtotal, dec("37.50"));
        assert_eq!(totals.tax, dec("1.875"));
        assert_eq!(totals.total, dec("39.375"));
        assert_eq!(round_money(totals.total), dec("39.38"));
        assert_eq!(totals.display().tax, dec("1.88"));
    }

    #[test]
    fn test_modifier_price_scales_with_quantity() {
        let lines = vec![line(1, 3, &[10, 11])];
        let totals = calculate_order_total(&lines, &book(), None).unwrap();

        // (15.00 + 2.50 + 3.00) × 3
        assert_eq!(totals.subtotal, dec("61.50"));
    }

    #[test]
    fn test_append_seeds_existing_subtotal() {
        let lines = vec![line(2, 1, &[])];
        let totals = calculate_order_total(&lines, &book(), Some(dec("37.50"))).unwrap();

        assert_eq!(totals.subtotal, dec("47.50"));
        assert_eq!(totals.tax, dec("2.375"));
        assert_eq!(totals.total, dec("49.875"));
    }

    #[test]
    fn test_total_is_subtotal_plus_tax() {
        let book = book();
        for qty in 1..=25 {
            let lines = vec![line(1, qty, &[10]), line(2, qty + 1, &[11])];
            let totals = calculate_order_total(&lines, &book, None).unwrap();
            assert_eq!(totals.total, totals.subtotal + totals.subtotal * dec("0.05"));
        }
    }

    #[test]
    fn test_no_float_drift() {
        let mut book = PriceBook::new();
        book.insert_item(1, dec("0.10"));
        book.insert_modifier(2, dec("0.20"));

        let lines = vec![line(1, 1, &[2])];
        let totals = calculate_order_total(&lines, &book, None).unwrap();
        assert_eq!(totals.subtotal, dec("0.30"));
    }

    #[test]
    fn test_missing_item() {
        let lines = vec![line(1, 1, &[]), line(99, 1, &[])];
        let err = calculate_order_total(&lines, &book(), None).unwrap_err();
        assert_eq!(err, PricingError::ItemNotFound(99));
    }

    #[test]
    fn test_missing_modifier() {
        let lines = vec![line(1, 1, &[10, 77])];
        let err = calculate_order_total(&lines, &book(), None).unwrap_err();
        assert_eq!(err, PricingError::ModifierNotFound(77));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        for qty in [0, -1] {
            let lines = vec![line(1, qty, &[])];
            let err = calculate_order_total(&lines, &book(), None).unwrap_err();
            assert_eq!(
                err,
                PricingError::InvalidQuantity {
                    item_id: 1,
                    quantity: qty
                }
            );
        }
    }

    #[test]
    fn test_rejects_quantity_over_max() {
        let lines = vec![line(1, MAX_QUANTITY + 1, &[])];
        assert!(matches!(
            calculate_order_total(&lines, &book(), None),
            Err(PricingError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_order() {
        let err = calculate_order_total(&[], &book(), None).unwrap_err();
        assert_eq!(err, PricingError::EmptyOrder);
    }

    #[test]
    fn test_error_maps_to_app_error() {
        let err: AppError = PricingError::ModifierNotFound(5).into();
        assert_eq!(err.code, ErrorCode::ModifierNotFound);
        assert_eq!(err.message, "Modifier 5 not found");

        let err: AppError = PricingError::InvalidQuantity {
            item_id: 1,
            quantity: 0,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
    }
}

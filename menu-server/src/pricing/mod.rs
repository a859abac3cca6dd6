//! Pricing Engine
//!
//! Computes subtotal / tax / total for requested order lines against
//! catalog prices. Loading prices ([`PriceBook::load`]) is separate from the
//! arithmetic ([`calculate_order_total`]), which is pure.

mod calculator;
mod price_book;

pub use calculator::*;
pub use price_book::*;

//! Order services
//!
//! - [`materializer`]: persists line items with snapshot prices
//! - [`aggregator`]: rebuilds denormalized order views
//! - [`lifecycle`]: create / append / list, one unit of work per request

pub mod aggregator;
pub mod lifecycle;
pub mod materializer;

pub use aggregator::{get_order_details, list_order_details};
pub use lifecycle::{append_items, create_order, list_orders};
pub use materializer::{MaterializedItem, MaterializedModifier, materialize_order_items};

//! Wire models
//!
//! Request/response types for the menu, guest session and order APIs.

pub mod menu;
pub mod order;
pub mod session;

pub use menu::*;
pub use order::*;
pub use session::*;

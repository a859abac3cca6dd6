//! menu-server: QR menu ordering backend
//!
//! Guests open a table session, browse a restaurant menu and place or extend
//! pending orders; staff list orders with the admin key.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod orders;
pub mod pricing;
pub mod seed;
pub mod sessions;
pub mod state;
pub mod util;
pub mod validation;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;

//! Shared types for the menu ordering backend
//!
//! Wire types and the unified error system used by `menu-server` and by
//! anything that talks to it: menu/session/order DTOs, error codes and the
//! JSON response envelope.

pub mod error;
pub mod models;
pub mod money;

pub use error::{ApiResponse, AppError, ErrorCode};

//! Staff authentication
//!
//! Only a static admin key guards the staff endpoints.

mod admin_key;

pub use admin_key::{AdminKey, require_admin};

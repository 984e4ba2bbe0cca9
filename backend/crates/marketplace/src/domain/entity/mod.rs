//! Entities
//!
//! Wire format is camelCase with the primary id as `_id`.

pub mod delivery_user;
pub mod food;
pub mod offer;
pub mod order;
pub mod transaction;
pub mod vendor;

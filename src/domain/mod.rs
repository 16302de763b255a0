//! Domain types for tender lots

pub mod lots;
pub mod status;

pub use lots::*;
pub use status::BadgeVariant;

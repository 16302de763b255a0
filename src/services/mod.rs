//! Service layer modules.
//!
//! Contains the lot data providers and the built-in sample record.

pub mod lot_provider;
pub mod sample;

pub use lot_provider::{InMemoryLotProvider, LotProvider, ProviderError};

//! Server-rendered tender lot detail pages.
//!
//! Lots come from an injected [`services::LotProvider`]; pages are rendered
//! by [`view::LotPage`] and served by the axum router built in [`app`].

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod view;

pub use app::{create_app, AppState};
pub use config::Settings;
pub use domain::{BadgeVariant, LineItem, TenderLot};
pub use services::{InMemoryLotProvider, LotProvider, ProviderError};

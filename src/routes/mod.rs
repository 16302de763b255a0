pub mod health;
pub mod lots;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Lots
        .route("/lots", get(lots::list_lots))
        .route("/lots/:display_no", get(lots::get_lot_page))
        .route("/lots/:display_no/data", get(lots::get_lot_data))
}

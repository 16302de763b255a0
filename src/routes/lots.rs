use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::{DataResponse, ListResponse};
use crate::app::AppState;
use crate::domain::{LotSummary, TenderLot};
use crate::error::{ApiError, ApiResult};
use crate::view::{LotPage, ViewState};

fn find_lot<'a>(state: &'a AppState, display_no: &str) -> ApiResult<&'a TenderLot> {
    state
        .lots
        .get(display_no)
        .ok_or_else(|| ApiError::NotFound(format!("Lot '{}' not found", display_no)))
}

/// List all lots known to the provider
pub async fn list_lots(State(state): State<Arc<AppState>>) -> ListResponse<LotSummary> {
    let lots = state.lots.list();
    tracing::debug!(count = lots.len(), "Listing lots");
    ListResponse::new(lots)
}

/// Render the lot detail page
pub async fn get_lot_page(
    State(state): State<Arc<AppState>>,
    Path(display_no): Path<String>,
    view: Result<Query<ViewState>, QueryRejection>,
) -> ApiResult<Html<String>> {
    let lot = find_lot(&state, &display_no)?;
    let Query(view) = view?;

    tracing::info!(
        display_no = %display_no,
        details = view.details,
        publisher = view.publisher,
        addon = view.addon,
        tech = view.tech,
        "Rendering lot page"
    );

    let page = LotPage::new(lot, view, &state.settings.files_base_url);
    Ok(Html(page.render()))
}

/// Raw lot record as JSON
pub async fn get_lot_data(
    State(state): State<Arc<AppState>>,
    Path(display_no): Path<String>,
) -> ApiResult<DataResponse<TenderLot>> {
    let lot = find_lot(&state, &display_no)?;
    Ok(DataResponse::new(lot.clone()))
}

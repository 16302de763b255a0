//! Server-side HTML rendering for tender lots.

pub mod format;
pub mod html;
pub mod items_table;
pub mod lot_detail;

pub use items_table::{items_table, render_items_table};
pub use lot_detail::{LabelKind, LotPage, Section, ViewState};

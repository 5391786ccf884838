//! Per-category chart lifecycle records (`.status` documents).

mod ops;
pub mod report;
mod store;
mod types;

pub use ops::{show_status, update_chart_status, CategoryStatus, UpdateOutcome};
pub use store::{load_record, save_record, status_path};
pub use types::{ChartEntry, ChartStatus, StatusRecord};

use std::path::{Path, PathBuf};

use crate::config::StatusConfig;
use crate::error::StatusError;

use super::store::{load_record, save_record, status_path};
use super::types::{ChartStatus, StatusRecord};

/// What `show` found for one category directory.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryStatus {
    Missing { dir: String },
    Unreadable { dir: String, error: String },
    Loaded { dir: String, record: StatusRecord },
}

/// Loads every configured category. Problems with one category are captured
/// in its entry and never prevent the others from loading.
pub fn show_status(cfg: &StatusConfig) -> Vec<CategoryStatus> {
    cfg.categories
        .iter()
        .map(|dir| {
            let path = status_path(Path::new(dir), cfg);
            match load_record(&path) {
                Ok(Some(record)) => CategoryStatus::Loaded {
                    dir: dir.clone(),
                    record,
                },
                Ok(None) => CategoryStatus::Missing { dir: dir.clone() },
                Err(e) => {
                    tracing::warn!(dir = %dir, error = %e, "status file unreadable");
                    CategoryStatus::Unreadable {
                        dir: dir.clone(),
                        error: e.to_string(),
                    }
                }
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub path: PathBuf,
    pub status: ChartStatus,
    pub record: StatusRecord,
}

/// Sets the status of `chart` in the status file next to it, stamping the
/// entry and the record with `today`, and persists the result.
///
/// The status file is left untouched when it, or the entry, does not exist.
pub fn update_chart_status(
    chart: &Path,
    status: ChartStatus,
    cfg: &StatusConfig,
    today: &str,
) -> Result<UpdateOutcome, StatusError> {
    let dir = chart.parent().unwrap_or_else(|| Path::new(""));
    let path = status_path(dir, cfg);

    let mut record =
        load_record(&path)?.ok_or_else(|| StatusError::RecordNotFound(path.clone()))?;

    let file = chart
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .ok_or_else(|| StatusError::EntryNotFound(chart.display().to_string()))?;

    record
        .set_entry_status(&file, status.clone(), today)
        .map_err(|_| StatusError::EntryNotFound(chart.display().to_string()))?;

    save_record(&path, &record)?;
    tracing::info!(
        chart = %chart.display(),
        status = %status,
        aggregate = %record.status(),
        "chart status updated"
    );

    Ok(UpdateOutcome {
        path,
        status,
        record,
    })
}

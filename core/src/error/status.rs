use std::path::PathBuf;

use thiserror::Error;

/// Failures of the status read-modify-write cycle.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Status file not found: {}", .0.display())]
    RecordNotFound(PathBuf),

    #[error("Chart not found in status file: {0}")]
    EntryNotFound(String),

    #[error("Invalid status '{0}' (expected production, review, development or planned)")]
    InvalidStatus(String),

    #[error("malformed status file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("encode status file {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("status file io {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StatusError {
    /// Missing record or entry: reported to the user, nothing was written.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::EntryNotFound(_))
    }
}

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::StatusConfig;
use crate::error::StatusError;

use super::types::StatusRecord;

/// Location of the status document for a category directory.
pub fn status_path(dir: &Path, cfg: &StatusConfig) -> PathBuf {
    dir.join(&cfg.file_name)
}

/// Reads a status document. A missing file is `Ok(None)`; a blank file is an
/// empty record.
pub fn load_record(path: &Path) -> Result<Option<StatusRecord>, StatusError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StatusError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let text = if text.trim().is_empty() { "{}" } else { &text };
    serde_yaml::from_str(text)
        .map(Some)
        .map_err(|e| StatusError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Writes the record through a temp file in the same directory and renames it
/// into place, creating the directory first if needed.
///
/// Single writer is assumed: concurrent updates are not merged.
pub fn save_record(path: &Path, record: &StatusRecord) -> Result<(), StatusError> {
    let io_err = |source: std::io::Error| StatusError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(io_err)?;

    let yaml = serde_yaml::to_string(record).map_err(|e| StatusError::Encode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
    tmp.write_all(yaml.as_bytes()).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    tracing::debug!(path = %path.display(), "status file written");
    Ok(())
}

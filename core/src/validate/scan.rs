use std::path::{Path, PathBuf};

use crate::config::ValidateConfig;
use crate::error::ValidateError;

use super::chart::{validate_chart, ValidationResult};

/// Chart files directly inside the output directory, sorted by path.
/// A missing directory yields no files.
pub fn find_chart_files(cfg: &ValidateConfig) -> Result<Vec<PathBuf>, ValidateError> {
    let dir = glob::Pattern::escape(&cfg.output_dir);
    let pattern = Path::new(&dir)
        .join(format!("*.{}", cfg.extension.trim_start_matches('.')))
        .to_string_lossy()
        .to_string();

    let paths = glob::glob(&pattern).map_err(|e| ValidateError::Pattern {
        pattern: pattern.clone(),
        source: e,
    })?;

    let mut files = paths
        .filter(|p| p.as_ref().map(|p| p.is_file()).unwrap_or(true))
        .collect::<Result<Vec<_>, _>>()?;
    files.sort();
    tracing::debug!(pattern = %pattern, count = files.len(), "chart files found");
    Ok(files)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSummary {
    pub results: Vec<ValidationResult>,
}

impl ValidationSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.total() - self.valid_count()
    }

    /// Nothing to validate counts as failure.
    pub fn exit_code(&self) -> i32 {
        if self.results.is_empty() || self.invalid_count() > 0 {
            1
        } else {
            0
        }
    }
}

pub fn validate_dir(cfg: &ValidateConfig) -> Result<ValidationSummary, ValidateError> {
    let results = find_chart_files(cfg)?
        .iter()
        .map(|path| validate_chart(path, cfg))
        .collect();
    Ok(ValidationSummary { results })
}

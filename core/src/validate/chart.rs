use std::path::Path;

use crate::config::ValidateConfig;

use super::checks::{detect_colors, has_doctype, has_library, is_oversized, size_mb};

/// Outcome of checking one generated chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub file: String,
    pub exists: bool,
    /// True iff `errors` is empty. Warnings never affect validity.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub colors_found: Vec<String>,
    pub size_mb: f64,
}

impl ValidationResult {
    fn new(file: String, exists: bool) -> Self {
        Self {
            file,
            exists,
            valid: false,
            errors: vec![],
            warnings: vec![],
            colors_found: vec![],
            size_mb: 0.0,
        }
    }

    fn finish(mut self) -> Self {
        self.valid = self.errors.is_empty();
        self
    }
}

pub fn validate_chart(path: &Path, cfg: &ValidateConfig) -> ValidationResult {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if !path.exists() {
        let mut result = ValidationResult::new(file, false);
        result.errors.push("File not found".to_string());
        return result.finish();
    }

    let mut result = ValidationResult::new(file, true);

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "chart unreadable");
            result.errors.push(format!("Unreadable file: {e}"));
            return result.finish();
        }
    };
    let content = String::from_utf8_lossy(&bytes);

    if !has_doctype(&content, &cfg.doctype) {
        result.errors.push("Missing DOCTYPE declaration".to_string());
    }

    if !has_library(&content, &cfg.library_marker) {
        result
            .errors
            .push(format!("{} not found in HTML", capitalize(&cfg.library_marker)));
    }

    result.colors_found = detect_colors(&content, &cfg.palette);
    if result.colors_found.is_empty() {
        result.warnings.push("No party colors found".to_string());
    }

    result.size_mb = size_mb(bytes.len() as u64);
    if is_oversized(result.size_mb, cfg.max_size_mb) {
        result
            .warnings
            .push(format!("Large file size: {:.2}MB", result.size_mb));
    }

    tracing::debug!(
        file = %result.file,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "chart checked"
    );
    result.finish()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

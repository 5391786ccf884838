//! Quality checks for generated HTML chart artifacts.

mod chart;
mod checks;
pub mod report;
mod scan;

pub use chart::{validate_chart, ValidationResult};
pub use checks::{detect_colors, has_doctype, has_library};
pub use scan::{find_chart_files, validate_dir, ValidationSummary};

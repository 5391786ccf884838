use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub validate: ValidateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr. Reports always go to stdout.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or `~/.chartops/logs` if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "chartops_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// One chart-generation script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartJob {
    pub name: String,
    pub script: String,

    /// Overrides `runner.interpreter` for this job.
    #[serde(default)]
    pub interpreter: Option<String>,
}

impl ChartJob {
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            interpreter: None,
        }
    }
}

/// Which runner plugin executes the jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerKind {
    #[default]
    Process,
    /// Reports the command line of each job without launching it.
    DryRun,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub kind: RunnerKind,

    /// Program used to launch each script. Empty means execute the script directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Per-stream capture limit; older bytes are dropped first.
    #[serde(default = "default_capture_bytes")]
    pub capture_bytes: usize,

    /// Lines of captured output echoed per job.
    #[serde(default = "default_tail_lines")]
    pub tail_lines: usize,

    /// Extra environment variables for every script.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    #[serde(default = "default_jobs")]
    pub jobs: Vec<ChartJob>,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_capture_bytes() -> usize {
    65536
}

fn default_tail_lines() -> usize {
    3
}

fn default_jobs() -> Vec<ChartJob> {
    vec![
        ChartJob::new("Sankey - Unified Flow", "analysis/unified_flow_sankey.py"),
        ChartJob::new(
            "Sankey - Outflows Detailed",
            "analysis/outflows_sankey_detailed.py",
        ),
    ]
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            kind: RunnerKind::default(),
            interpreter: default_interpreter(),
            timeout_secs: default_timeout_secs(),
            capture_bytes: default_capture_bytes(),
            tail_lines: default_tail_lines(),
            env: BTreeMap::new(),
            jobs: default_jobs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Name of the per-directory status document.
    #[serde(default = "default_status_file_name")]
    pub file_name: String,

    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_status_file_name() -> String {
    ".status".to_string()
}

fn default_categories() -> Vec<String> {
    ["charts/sankey", "charts/bar_charts", "charts/time_series", "charts/network"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            file_name: default_status_file_name(),
            categories: default_categories(),
        }
    }
}

/// A named RGBA literal searched for verbatim in chart output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub value: String,
}

impl PaletteColor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_doctype")]
    pub doctype: String,

    /// Matched case-insensitively.
    #[serde(default = "default_library_marker")]
    pub library_marker: String,

    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: f64,

    #[serde(default = "default_palette")]
    pub palette: Vec<PaletteColor>,
}

fn default_output_dir() -> String {
    "analysis/outputs".to_string()
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_doctype() -> String {
    "<!DOCTYPE html>".to_string()
}

fn default_library_marker() -> String {
    "plotly".to_string()
}

fn default_max_size_mb() -> f64 {
    50.0
}

fn default_palette() -> Vec<PaletteColor> {
    vec![
        PaletteColor::new("red_full", "rgba(204, 0, 0, 1)"),
        PaletteColor::new("blue_full", "rgba(0, 51, 153, 1)"),
        PaletteColor::new("red_light", "rgba(255, 180, 180, 1)"),
        PaletteColor::new("blue_light", "rgba(173, 216, 230, 1)"),
        PaletteColor::new("gray", "rgba(128, 128, 128, 1)"),
    ]
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
            doctype: default_doctype(),
            library_marker: default_library_marker(),
            max_size_mb: default_max_size_mb(),
            palette: default_palette(),
        }
    }
}

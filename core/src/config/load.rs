use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default chartops data directory: ~/.chartops
pub fn get_chartops_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".chartops"))
}

/// Loads configuration, first match wins:
/// `explicit`, `~/.chartops/config.toml`, `./chartops.toml`, built-in defaults.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let data_dir = get_chartops_data_dir().ok();
    let user_config = data_dir.as_ref().map(|d| d.join("config.toml"));
    let local_config = Path::new("chartops.toml");

    let mut cfg = match explicit {
        Some(path) => read_config(path)?,
        None => match user_config.as_deref().filter(|p| p.exists()) {
            Some(path) => read_config(path)?,
            None if local_config.exists() => read_config(local_config)?,
            None => AppConfig::default(),
        },
    };

    if cfg.logging.file && is_blank(cfg.logging.directory.as_deref()) {
        if let Some(dir) = data_dir.as_ref() {
            cfg.logging.directory = Some(dir.join("logs").to_string_lossy().to_string());
        }
    }

    apply_env_overrides(&mut cfg)?;
    Ok(cfg)
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("read {} failed: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("parse {} failed: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

fn is_blank(v: Option<&str>) -> bool {
    v.map(|s| s.trim().is_empty()).unwrap_or(true)
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn apply_env_overrides(cfg: &mut AppConfig) -> anyhow::Result<()> {
    if let Some(v) = env_non_empty("CHARTOPS_OUTPUT_DIR") {
        cfg.validate.output_dir = v;
    }
    if let Some(v) = env_non_empty("CHARTOPS_INTERPRETER") {
        cfg.runner.interpreter = v;
    }
    if let Some(v) = env_non_empty("CHARTOPS_TIMEOUT_SECS") {
        cfg.runner.timeout_secs = v
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("CHARTOPS_TIMEOUT_SECS={v}: {e}"))?;
    }
    Ok(())
}

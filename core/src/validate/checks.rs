use crate::config::PaletteColor;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn has_doctype(content: &str, doctype: &str) -> bool {
    content.contains(doctype)
}

/// Case-insensitive search for the embedded charting library.
pub fn has_library(content: &str, marker: &str) -> bool {
    content
        .to_lowercase()
        .contains(marker.to_lowercase().as_str())
}

/// Names of the palette colors present verbatim, in palette order.
pub fn detect_colors(content: &str, palette: &[PaletteColor]) -> Vec<String> {
    palette
        .iter()
        .filter(|c| content.contains(c.value.as_str()))
        .map(|c| c.name.clone())
        .collect()
}

pub fn size_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

pub fn is_oversized(size_mb: f64, max_size_mb: f64) -> bool {
    size_mb >= max_size_mb
}

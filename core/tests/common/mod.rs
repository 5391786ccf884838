use std::path::{Path, PathBuf};

pub const PLOTLY_HEAD: &str =
    "<!DOCTYPE html>\n<html><head><script src=\"https://cdn.plot.ly/plotly-2.27.0.min.js\"></script></head>\n";

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// A valid chart padded to roughly `size_bytes`, carrying one palette color.
pub fn padded_chart(size_bytes: usize, color: &str) -> Vec<u8> {
    let mut body = format!("{PLOTLY_HEAD}<body><div style=\"fill: {color}\"></div>\n");
    let filler = "<!-- trace data -->\n";
    while body.len() + filler.len() < size_bytes {
        body.push_str(filler);
    }
    body.push_str("</body></html>\n");
    body.into_bytes()
}

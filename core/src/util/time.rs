use chrono::Local;

/// Date stamp stored in status documents, e.g. `2024-11-05`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Timestamp printed in report headers.
pub fn report_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub const UNKNOWN_SIZE: &str = "Unknown";

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Human readable picture size, `None` and zero both mean the size is unknown.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None | Some(0) => UNKNOWN_SIZE.to_owned(),
        Some(bytes) if bytes < KB => format!("{} B", bytes),
        Some(bytes) if bytes < MB => format!("{:.2} KB", hundredths(bytes, KB)),
        Some(bytes) => format!("{:.2} MB", hundredths(bytes, MB)),
    }
}

/// Ties round up, `1152` bytes is `1.13 KB`.
fn hundredths(bytes: u64, unit: u64) -> f64 {
    (bytes as f64 / unit as f64 * 100.0).round() / 100.0
}

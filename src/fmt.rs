//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Hammer emoji for build operations
pub const HAMMER: Emoji = Emoji("🔨", ">");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Format a byte count as kibibytes with one decimal place.
///
/// This is the unit every size column of the benchmark table uses. Exact
/// halves round up, so 256 bytes show as `0.3K`.
///
/// # Examples
///
/// ```
/// use css_bench::fmt::bytes_to_display;
///
/// assert_eq!(bytes_to_display(0), "0.0K");
/// assert_eq!(bytes_to_display(1024), "1.0K");
/// assert_eq!(bytes_to_display(1536), "1.5K");
/// assert_eq!(bytes_to_display(1280), "1.3K");
/// ```
pub fn bytes_to_display(bytes: u64) -> String {
    let tenths = (u128::from(bytes) * 10 + 512) / 1024;
    format!("{}.{}K", tenths / 10, tenths % 10)
}

/// Format bytes as human-readable size string
///
/// Used for log lines and summaries where the unit should scale.
///
/// ```
/// use css_bench::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

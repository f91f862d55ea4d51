//! Display formatting for sizes and timestamps.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with base-1024 units.
///
/// The value is rounded to two decimals and trailing zeros are dropped:
/// `0 → "0 Bytes"`, `1024 → "1 KB"`, `1536 → "1.5 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    format!("{} {}", trim_decimals(value), SIZE_UNITS[unit])
}

/// Round to two decimals and strip trailing zeros ("1.50" → "1.5", "2.00" → "2").
fn trim_decimals(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a timestamp as a short date, e.g. "Jan 15, 2024".
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as date and time, e.g. "Jan 15, 2024 10:30".
pub fn format_date_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y %H:%M").to_string()
}

/// Pluralise a count: `count_label(1, "file") == "1 file"`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_exact_kilobyte() {
        assert_eq!(format_file_size(1024), "1 KB");
    }

    #[test]
    fn test_format_file_size_fractional() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_288_490), "1.23 MB");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_file_size_large_units() {
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2 TB");
        // Nothing beyond TB
        assert_eq!(format_file_size(2048 * 1024u64.pow(4)), "2048 TB");
    }

    #[test]
    fn test_format_date() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Jan 5, 2024");
        assert_eq!(format_date_time(&ts), "Jan 5, 2024 10:30");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "file"), "0 files");
        assert_eq!(count_label(1, "file"), "1 file");
        assert_eq!(count_label(12, "subfolder"), "12 subfolders");
    }
}

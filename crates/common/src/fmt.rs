use chrono::DateTime;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count for display: base-1024 scaling, two decimal places
/// with trailing zeros trimmed. Zero is rendered literally as `0 Bytes`.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Render a Unix-seconds timestamp as UTC. Out-of-range values fall back
/// to the raw number rather than failing.
pub fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes_literal() {
        assert_eq!(human_size(0), "0 Bytes");
    }

    #[test]
    fn test_sub_kilobyte() {
        assert_eq!(human_size(1), "1 Bytes");
        assert_eq!(human_size(512), "512 Bytes");
        assert_eq!(human_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_scaling_and_trimming() {
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1500), "1.46 KB");
        assert_eq!(human_size(1024 * 1024), "1 MB");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_caps_at_gigabytes() {
        assert_eq!(human_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp(1700000000), "2023-11-14 22:13:20 UTC");
    }
}

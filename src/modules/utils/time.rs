use chrono::DateTime;
use std::time::{SystemTime, UNIX_EPOCH};

/// Function to format timestamp as readable date
pub fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .unwrap_or_default()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Get current Unix timestamp in seconds
pub fn get_current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Get current Unix timestamp in milliseconds.
///
/// The timed components (debouncer, toasts, submit timeouts) take this
/// value as an explicit argument instead of reading the clock themselves,
/// so tests can drive them with synthetic times.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_formatting() {
        let timestamp = 1609459200; // 2021-01-01 00:00:00
        let formatted = format_timestamp(timestamp);
        assert_eq!(formatted, "2021-01-01 00:00:00");
    }

    #[test]
    fn test_current_timestamp() {
        let timestamp = get_current_timestamp();
        assert!(timestamp > 0);
        // Verify timestamp is recent (within last minute)
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(now - timestamp < 60);
    }

    #[test]
    fn test_millis_match_seconds() {
        let millis = now_millis();
        let seconds = get_current_timestamp();
        // Allow a second of slack between the two reads
        assert!(millis / 1000 >= seconds - 1);
        assert!(millis / 1000 <= seconds + 1);
    }
}

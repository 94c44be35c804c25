use chrono::{DateTime, Utc};

/// Axis tick format: wall-clock hours and minutes.
pub const CLOCK_FORMAT: &str = "%H:%M";
/// Tooltip format: full date and time to the second.
pub const FULL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format epoch seconds (UTC) with a chrono `pattern`.
///
/// Plot coordinates are `f64`, so fractional seconds are truncated; values
/// outside chrono's range fall back to the plain number.
pub fn format_epoch(secs: f64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp(secs.floor() as i64, 0) {
        Some(dt) => dt.format(pattern).to_string(),
        None => format!("{secs:.0}"),
    }
}

/// `HH:MM` label for an axis tick.
pub fn format_clock(secs: f64) -> String {
    format_epoch(secs, CLOCK_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_timestamp_truncating_fraction() {
        assert_eq!(format_epoch(0.0, FULL_FORMAT), "1970-01-01 00:00:00");
        assert_eq!(format_epoch(90.5, FULL_FORMAT), "1970-01-01 00:01:30");
    }

    #[test]
    fn formats_clock_time() {
        assert_eq!(format_clock(3_600.0 * 13.0 + 60.0 * 7.0), "13:07");
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_number() {
        assert_eq!(format_clock(f64::MAX), format!("{:.0}", f64::MAX));
    }
}

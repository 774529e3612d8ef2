//! UTC timestamp formatting.

use chrono::{DateTime, Utc};

/// Format a datetime as ISO 8601 (`YYYY-MM-DDTHH:MM:SSZ`), defaulting to now.
pub fn format_timestamp(at: Option<DateTime<Utc>>) -> String {
    at.unwrap_or_else(Utc::now)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_iso_8601_with_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 45).unwrap();
        assert_eq!(format_timestamp(Some(at)), "2024-03-09T12:30:45Z");
    }

    #[test]
    fn defaults_to_current_time() {
        let stamp = format_timestamp(None);
        assert!(stamp.contains('T'));
        assert!(stamp.ends_with('Z'));
    }
}

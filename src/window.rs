use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Length of the contribution window in days
pub const WINDOW_DAYS: i64 = 365;

/// Trailing time window used to bound contribution totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `WINDOW_DAYS` ending at `now`
    pub fn trailing(now: DateTime<Utc>) -> Self {
        Self {
            from: now - Duration::days(WINDOW_DAYS),
            to: now,
        }
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// Start of the window as an ISO-8601 instant (`2025-01-01T00:00:00.000Z`)
    pub fn from_iso(&self) -> String {
        format_instant(self.from)
    }

    /// End of the window as an ISO-8601 instant
    pub fn to_iso(&self) -> String {
        format_instant(self.to)
    }
}

/// Format an instant as UTC with millisecond precision and a `Z` suffix.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trailing_window_bounds() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 6, 30, 0).unwrap();
        let window = TimeWindow::trailing(now);
        assert_eq!(window.to, now);
        assert_eq!(window.from, Utc.with_ymd_and_hms(2025, 10, 17, 6, 30, 0).unwrap());
        assert_eq!(window.days(), 365);
    }

    #[test]
    fn test_window_across_leap_day() {
        // 365 days, not one calendar year
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let window = TimeWindow::trailing(now);
        assert_eq!(window.from, Utc.with_ymd_and_hms(2023, 3, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_iso_format() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 6, 30, 5).unwrap();
        let window = TimeWindow::trailing(now);
        assert_eq!(window.to_iso(), "2026-10-17T06:30:05.000Z");
        assert_eq!(window.from_iso(), "2025-10-17T06:30:05.000Z");
    }
}

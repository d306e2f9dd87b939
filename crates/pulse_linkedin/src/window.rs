use chrono::{Duration, Utc};

/// Reporting interval in epoch milliseconds, the format the time-bound
/// LinkedIn endpoints expect.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TimeWindow {
    /// Window covering the `days` days up to now.
    pub fn trailing_days(days: i64) -> Self {
        let end = Utc::now();
        let start = end - Duration::days(days);

        Self {
            start_ms: start.timestamp_millis(),
            end_ms: end.timestamp_millis(),
        }
    }

    /// Value for the `timeIntervals.timeRange` query parameter.
    pub fn interval_param(&self) -> String {
        format!("(start:{},end:{})", self.start_ms, self.end_ms)
    }
}

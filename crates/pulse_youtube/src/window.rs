use chrono::{Duration, NaiveDate, Utc};

/// Inclusive date range in the `YYYY-MM-DD` format the Analytics API expects.
#[derive(Debug, Clone, Copy)]
pub struct ReportWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportWindow {
    /// Window covering the `days` days up to today.
    pub fn trailing_days(days: i64) -> Self {
        let end_date = Utc::now().date_naive();
        let start_date = end_date - Duration::days(days);

        Self {
            start_date,
            end_date,
        }
    }

    pub fn start(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_iso_formatted() {
        let window = ReportWindow {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        };

        assert_eq!(window.start(), "2025-01-02");
        assert_eq!(window.end(), "2025-02-01");
    }

    #[test]
    fn trailing_days_spans_the_requested_days() {
        let window = ReportWindow::trailing_days(30);

        assert_eq!(window.end_date - window.start_date, Duration::days(30));
    }
}

use crate::window::ReportWindow;
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Query parameters for the Analytics API `reports.query` endpoint.
#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct ReportQuery {
    pub ids: String,

    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub metrics: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl ReportQuery {
    /// Day-by-day core channel metrics.
    pub fn core_metrics(window: &ReportWindow) -> Self {
        Self::builder()
            .ids("channel==MINE")
            .start_date(window.start())
            .end_date(window.end())
            .metrics("views,estimatedMinutesWatched,subscribersGained,averageViewDuration")
            .dimensions("day")
            .build()
    }

    /// Views broken down by traffic source type, busiest first.
    pub fn traffic_sources(window: &ReportWindow) -> Self {
        Self::builder()
            .ids("channel==MINE")
            .start_date(window.start())
            .end_date(window.end())
            .metrics("views")
            .dimensions("insightTrafficSourceType")
            .sort("-views")
            .build()
    }

    /// Most-viewed videos over the window.
    pub fn top_videos(window: &ReportWindow, max_results: u32) -> Self {
        Self::builder()
            .ids("channel==MINE")
            .start_date(window.start())
            .end_date(window.end())
            .metrics("views")
            .dimensions("video")
            .sort("-views")
            .max_results(max_results)
            .build()
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Column '{0}' missing from report response")]
    MissingColumn(String),
    #[error("Row {row}, column '{column}': unexpected cell type")]
    BadCell { row: usize, column: String },
}

/// Raw report payload: named column headers plus untyped row cells. Decoded
/// into one of the typed row shapes before anything downstream touches it.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReportResponse {
    #[serde(rename = "columnHeaders", default)]
    pub column_headers: Vec<ColumnHeader>,
    #[serde(default)]
    pub rows: Vec<Vec<Value>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ColumnHeader {
    pub name: String,
    #[serde(rename = "columnType")]
    pub column_type: String,
    #[serde(rename = "dataType")]
    pub data_type: String,
}

/// One day of core channel metrics.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub day: String,
    pub views: u64,
    pub estimated_minutes_watched: u64,
    pub subscribers_gained: u64,
    pub average_view_duration: f64,
}

/// Views attributed to one traffic source type.
#[derive(Debug, Clone)]
pub struct TrafficSourceRow {
    pub source_type: String,
    pub views: u64,
}

/// Views for one video.
#[derive(Debug, Clone)]
pub struct VideoRow {
    pub video_id: String,
    pub views: u64,
}

impl ReportResponse {
    pub fn day_rows(&self) -> Result<Vec<DayRow>, ReportError> {
        let day = self.column("day")?;
        let views = self.column("views")?;
        let minutes = self.column("estimatedMinutesWatched")?;
        let subscribers = self.column("subscribersGained")?;
        let duration = self.column("averageViewDuration")?;

        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                Ok(DayRow {
                    day: str_cell(idx, row, day, "day")?,
                    views: u64_cell(idx, row, views, "views")?,
                    estimated_minutes_watched: u64_cell(
                        idx,
                        row,
                        minutes,
                        "estimatedMinutesWatched",
                    )?,
                    subscribers_gained: u64_cell(idx, row, subscribers, "subscribersGained")?,
                    average_view_duration: f64_cell(idx, row, duration, "averageViewDuration")?,
                })
            })
            .collect()
    }

    pub fn traffic_source_rows(&self) -> Result<Vec<TrafficSourceRow>, ReportError> {
        let source = self.column("insightTrafficSourceType")?;
        let views = self.column("views")?;

        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                Ok(TrafficSourceRow {
                    source_type: str_cell(idx, row, source, "insightTrafficSourceType")?,
                    views: u64_cell(idx, row, views, "views")?,
                })
            })
            .collect()
    }

    pub fn video_rows(&self) -> Result<Vec<VideoRow>, ReportError> {
        let video = self.column("video")?;
        let views = self.column("views")?;

        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                Ok(VideoRow {
                    video_id: str_cell(idx, row, video, "video")?,
                    views: u64_cell(idx, row, views, "views")?,
                })
            })
            .collect()
    }

    fn column(&self, name: &str) -> Result<usize, ReportError> {
        self.column_headers
            .iter()
            .position(|header| header.name == name)
            .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
    }
}

fn str_cell(idx: usize, row: &[Value], col: usize, name: &str) -> Result<String, ReportError> {
    row.get(col)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ReportError::BadCell {
            row: idx,
            column: name.to_string(),
        })
}

fn u64_cell(idx: usize, row: &[Value], col: usize, name: &str) -> Result<u64, ReportError> {
    row.get(col)
        .and_then(Value::as_u64)
        .ok_or_else(|| ReportError::BadCell {
            row: idx,
            column: name.to_string(),
        })
}

fn f64_cell(idx: usize, row: &[Value], col: usize, name: &str) -> Result<f64, ReportError> {
    row.get(col)
        .and_then(Value::as_f64)
        .ok_or_else(|| ReportError::BadCell {
            row: idx,
            column: name.to_string(),
        })
}

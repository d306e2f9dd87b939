use crate::text::{format_duration, group_digits, humanize_label};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write;

/// One day of channel metrics, already decoded from the report payload.
#[derive(Debug, Clone, Default)]
pub struct DayMetrics {
    pub views: u64,
    pub watch_minutes: u64,
    pub subscribers_gained: u64,
    pub average_view_duration: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficSource {
    pub source_type: String,
    pub views: u64,
}

/// Per-video view count keyed by the opaque video id.
#[derive(Debug, Clone)]
pub struct VideoViews {
    pub video_id: String,
    pub views: u64,
}

/// Aggregated channel metrics for the reporting window. Built once, never
/// mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelReport {
    pub total_views: u64,
    pub total_watch_minutes: u64,
    pub new_subscribers: u64,
    pub avg_view_duration_secs: f64,
    pub traffic_sources: Vec<TrafficSource>,
    pub top_videos: Vec<RankedVideo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedVideo {
    pub title: String,
    pub views: u64,
}

/// Fold the raw report rows into a [`ChannelReport`]. `titles` maps video
/// ids to display titles; ids without an entry fall back to the raw id.
pub fn build_channel_report(
    days: &[DayMetrics],
    traffic_sources: Vec<TrafficSource>,
    videos: &[VideoViews],
    titles: &HashMap<String, String>,
    top_n: usize,
) -> ChannelReport {
    ChannelReport {
        total_views: days.iter().map(|d| d.views).sum(),
        total_watch_minutes: days.iter().map(|d| d.watch_minutes).sum(),
        new_subscribers: days.iter().map(|d| d.subscribers_gained).sum(),
        avg_view_duration_secs: mean_view_duration(days),
        traffic_sources,
        top_videos: rank_top_videos(videos, titles, top_n),
    }
}

/// Arithmetic mean of the per-day durations, 0 for an empty window.
fn mean_view_duration(days: &[DayMetrics]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }

    days.iter().map(|d| d.average_view_duration).sum::<f64>() / days.len() as f64
}

/// Videos ranked descending by view count, truncated to `top_n`. The sort is
/// stable, so equal view counts keep their response order.
fn rank_top_videos(
    videos: &[VideoViews],
    titles: &HashMap<String, String>,
    top_n: usize,
) -> Vec<RankedVideo> {
    let mut ranked: Vec<RankedVideo> = videos
        .iter()
        .map(|video| RankedVideo {
            title: titles
                .get(&video.video_id)
                .cloned()
                .unwrap_or_else(|| video.video_id.clone()),
            views: video.views,
        })
        .collect();

    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(top_n);

    ranked
}

/// Console rendering of a [`ChannelReport`].
pub fn render_channel_report(report: &ChannelReport) -> String {
    let mut out = String::new();

    writeln!(out, "=== Channel Analytics Report (Last 30 Days) ===").unwrap();

    writeln!(out, "\nCore Metrics:").unwrap();
    writeln!(out, "Total Views: {}", group_digits(report.total_views)).unwrap();
    writeln!(
        out,
        "Total Watch Time: {} minutes",
        group_digits(report.total_watch_minutes)
    )
    .unwrap();
    writeln!(
        out,
        "New Subscribers: {}",
        group_digits(report.new_subscribers)
    )
    .unwrap();
    writeln!(
        out,
        "Average View Duration: {}",
        format_duration(report.avg_view_duration_secs)
    )
    .unwrap();

    writeln!(out, "\nTraffic Sources:").unwrap();
    for source in &report.traffic_sources {
        writeln!(
            out,
            "{}: {} views",
            humanize_label(&source.source_type),
            group_digits(source.views)
        )
        .unwrap();
    }

    writeln!(out, "\nTop Performing Videos:").unwrap();
    for video in &report.top_videos {
        writeln!(
            out,
            "{}: {} views",
            video.title,
            group_digits(video.views)
        )
        .unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(views: u64, minutes: u64, subs: u64, duration: f64) -> DayMetrics {
        DayMetrics {
            views,
            watch_minutes: minutes,
            subscribers_gained: subs,
            average_view_duration: duration,
        }
    }

    fn video(id: &str, views: u64) -> VideoViews {
        VideoViews {
            video_id: id.to_string(),
            views,
        }
    }

    #[test]
    fn sums_over_day_rows() {
        let days = vec![day(120, 340, 3, 95.0), day(80, 210, 1, 110.0)];

        let report = build_channel_report(&days, Vec::new(), &[], &HashMap::new(), 5);

        assert_eq!(report.total_views, 200);
        assert_eq!(report.total_watch_minutes, 550);
        assert_eq!(report.new_subscribers, 4);
    }

    #[test]
    fn mean_duration_over_rows() {
        let days = vec![day(0, 0, 0, 10.0), day(0, 0, 0, 20.0), day(0, 0, 0, 30.0)];

        let report = build_channel_report(&days, Vec::new(), &[], &HashMap::new(), 5);

        assert_eq!(report.avg_view_duration_secs, 20.0);
    }

    #[test]
    fn mean_duration_of_empty_window_is_zero() {
        let report = build_channel_report(&[], Vec::new(), &[], &HashMap::new(), 5);

        assert_eq!(report.avg_view_duration_secs, 0.0);
        assert_eq!(report.total_views, 0);
    }

    #[test]
    fn top_videos_sorted_descending_stable_and_truncated() {
        let videos = vec![
            video("a", 10),
            video("b", 500),
            video("c", 10),
            video("d", 40),
            video("e", 500),
            video("f", 3),
        ];

        let report = build_channel_report(&[], Vec::new(), &videos, &HashMap::new(), 5);

        let ranked: Vec<(&str, u64)> = report
            .top_videos
            .iter()
            .map(|v| (v.title.as_str(), v.views))
            .collect();

        // "b" before "e" and "a" before "c": ties keep response order.
        assert_eq!(
            ranked,
            vec![("b", 500), ("e", 500), ("d", 40), ("a", 10), ("c", 10)]
        );
    }

    #[test]
    fn titles_resolve_with_fallback_to_raw_id() {
        let videos = vec![video("vid1", 100), video("vid2", 50)];
        let mut titles = HashMap::new();
        titles.insert(String::from("vid1"), String::from("First upload"));

        let report = build_channel_report(&[], Vec::new(), &videos, &titles, 5);

        assert_eq!(report.top_videos[0].title, "First upload");
        assert_eq!(report.top_videos[1].title, "vid2");
    }

    #[test]
    fn traffic_sources_keep_response_order() {
        let sources = vec![
            TrafficSource {
                source_type: String::from("YT_SEARCH"),
                views: 400,
            },
            TrafficSource {
                source_type: String::from("EXT_URL"),
                views: 120,
            },
        ];

        let report = build_channel_report(&[], sources, &[], &HashMap::new(), 5);

        assert_eq!(report.traffic_sources[0].source_type, "YT_SEARCH");
        assert_eq!(report.traffic_sources[1].source_type, "EXT_URL");
    }

    #[test]
    fn rendering_humanizes_and_groups() {
        let days = vec![day(1_234_567, 89_000, 120, 95.7)];
        let sources = vec![TrafficSource {
            source_type: String::from("YT_SEARCH"),
            views: 1_000,
        }];
        let videos = vec![video("vid1", 9_001)];

        let report = build_channel_report(&days, sources, &videos, &HashMap::new(), 5);
        let rendered = render_channel_report(&report);

        assert!(rendered.contains("Total Views: 1,234,567"));
        assert!(rendered.contains("Total Watch Time: 89,000 minutes"));
        assert!(rendered.contains("Average View Duration: 1m 35s"));
        assert!(rendered.contains("Yt Search: 1,000 views"));
        assert!(rendered.contains("vid1: 9,001 views"));
    }
}

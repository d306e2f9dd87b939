use anyhow::Context;
use clap::Parser;
use pulse_report::youtube::{
    DayMetrics, TrafficSource, VideoViews, build_channel_report, render_channel_report,
};
use pulse_youtube::YouTubeClient;
use pulse_youtube::auth::{ClientSecrets, obtain_token};
use pulse_youtube::reports::ReportQuery;
use pulse_youtube::window::ReportWindow;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "YouTube channel analytics report", long_about = None)]
struct Args {
    /// Google installed-app client secrets file
    #[arg(long, default_value = "client_secrets.json")]
    client_secrets: PathBuf,

    /// Token cache file written after authorization
    #[arg(long, default_value = "token.json")]
    token_cache: PathBuf,

    /// Reporting window in days
    #[arg(long, default_value = "30")]
    days: i64,

    /// Entries in the top videos list
    #[arg(long, default_value = "5")]
    top: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let secrets = ClientSecrets::load(&args.client_secrets).with_context(|| {
        format!(
            "Failed to load client secrets from {}",
            args.client_secrets.display()
        )
    })?;

    let token = obtain_token(&secrets, &args.token_cache)
        .await
        .context("Failed to obtain an access token")?;

    let client = YouTubeClient::new(&token.access_token);
    let window = ReportWindow::trailing_days(args.days);

    println!(
        "Fetching channel analytics from {} to {}...",
        window.start(),
        window.end()
    );

    let core = client
        .query_report(&ReportQuery::core_metrics(&window))
        .await
        .context("Core metrics query failed")?;
    let traffic = client
        .query_report(&ReportQuery::traffic_sources(&window))
        .await
        .context("Traffic sources query failed")?;
    let top = client
        .query_report(&ReportQuery::top_videos(&window, args.top))
        .await
        .context("Top videos query failed")?;

    let day_rows = core.day_rows().context("Malformed core metrics report")?;
    let traffic_rows = traffic
        .traffic_source_rows()
        .context("Malformed traffic sources report")?;
    let video_rows = top.video_rows().context("Malformed top videos report")?;

    let video_ids: Vec<String> = video_rows.iter().map(|row| row.video_id.clone()).collect();
    let titles: HashMap<String, String> = if video_ids.is_empty() {
        HashMap::new()
    } else {
        client
            .video_titles(&video_ids)
            .await
            .context("Video title lookup failed")?
    };

    let days: Vec<DayMetrics> = day_rows
        .iter()
        .map(|row| DayMetrics {
            views: row.views,
            watch_minutes: row.estimated_minutes_watched,
            subscribers_gained: row.subscribers_gained,
            average_view_duration: row.average_view_duration,
        })
        .collect();
    let sources: Vec<TrafficSource> = traffic_rows
        .into_iter()
        .map(|row| TrafficSource {
            source_type: row.source_type,
            views: row.views,
        })
        .collect();
    let videos: Vec<VideoViews> = video_rows
        .into_iter()
        .map(|row| VideoViews {
            video_id: row.video_id,
            views: row.views,
        })
        .collect();

    let report = build_channel_report(&days, sources, &videos, &titles, args.top as usize);

    println!("\n{}", render_channel_report(&report));

    Ok(())
}

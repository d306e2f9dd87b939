use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use pulse_linkedin::LinkedInClient;
use pulse_linkedin::auth::OAuthConfig;
use pulse_linkedin::shares::Share;
use pulse_linkedin::window::TimeWindow;
use pulse_report::linkedin::{
    SectionViews, ShareItem, ShareStats, build_page_report, render_page_report,
};
use std::io::{Write, stdin, stdout};

#[derive(Parser, Debug)]
#[command(author, version, about = "LinkedIn organization analytics report", long_about = None)]
struct Args {
    /// Reporting window in days
    #[arg(long, default_value = "30")]
    days: i64,

    /// Entries in the top shared content list
    #[arg(long, default_value = "5")]
    top: usize,

    /// Shares fetched per run (single page)
    #[arg(long, default_value = "100")]
    count: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let args = Args::parse();

    let config =
        OAuthConfig::from_env().context("Failed to load LinkedIn OAuth configuration")?;

    println!("Authorize here: {}", config.authorization_url());
    let code = prompt_authorization_code()?;

    let token = config
        .exchange_code(&code)
        .await
        .context("Authorization code exchange failed")?;

    let client = LinkedInClient::new(&token.access_token);

    let acls = client
        .organization_acls()
        .await
        .context("Failed to fetch organization ACLs")?;
    let org_urn = acls.first_organization()?.to_string();
    println!("Reporting on {org_urn}");

    let window = TimeWindow::trailing_days(args.days);

    let follower_stats = client
        .follower_statistics(&org_urn)
        .await
        .context("Failed to fetch follower statistics")?;
    let page_views = client
        .page_analytics(&org_urn, &window)
        .await
        .context("Failed to fetch page analytics")?;
    let shares = client
        .shares(&org_urn, &window, args.count)
        .await
        .context("Failed to fetch shares")?;

    let sections = page_views
        .elements
        .into_iter()
        .map(|element| SectionViews {
            section: element.page_section,
            views: element.views,
        })
        .collect();
    let share_items: Vec<ShareItem> = shares.elements.iter().map(share_item).collect();

    let report = build_page_report(follower_stats.gains(), sections, &share_items, args.top);

    println!("\n{}", render_page_report(&report));

    Ok(())
}

fn share_item(share: &Share) -> ShareItem {
    ShareItem {
        text: share.text.text.clone(),
        stats: ShareStats {
            views: share.statistics.view_count,
            impressions: share.statistics.impression_count,
            comments: share.statistics.comment_count,
            likes: share.statistics.like_count,
            clicks: share.statistics.click_count,
            shares: share.statistics.share_count,
        },
    }
}

// Blocking console read; exiting the process before pasting the code is the
// only cancellation path.
fn prompt_authorization_code() -> anyhow::Result<String> {
    print!("Enter authorization code: ");
    stdout().flush()?;

    let mut code = String::new();
    stdin().read_line(&mut code)?;

    Ok(code.trim().to_string())
}

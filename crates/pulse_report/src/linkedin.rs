use crate::SHARE_TEXT_WIDTH;
use crate::text::{group_digits, truncate};
use serde::Serialize;
use std::fmt::Write;

/// One share as the aggregator sees it, already decoded from the API shape.
#[derive(Debug, Clone)]
pub struct ShareItem {
    pub text: String,
    pub stats: ShareStats,
}

#[derive(Debug, Clone, Default)]
pub struct ShareStats {
    pub views: u64,
    pub impressions: u64,
    pub comments: u64,
    pub likes: u64,
    pub clicks: u64,
    pub shares: u64,
}

/// View count for one page section, in response order.
#[derive(Debug, Clone, Serialize)]
pub struct SectionViews {
    pub section: String,
    pub views: u64,
}

/// Aggregated organization metrics for the reporting window. Built once,
/// never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub followers: i64,
    pub reach: u64,
    pub impressions: u64,
    pub interactions: Interactions,
    pub profile_views: ProfileViews,
    pub top_shares: Vec<RankedShare>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interactions {
    pub comments: u64,
    pub likes: u64,
    pub clicks: u64,
    pub shares: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViews {
    pub total: u64,
    pub sections: Vec<SectionViews>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedShare {
    pub text: String,
    pub views: u64,
}

/// Fold the raw statistics into a [`PageReport`].
pub fn build_page_report(
    follower_gains: i64,
    sections: Vec<SectionViews>,
    shares: &[ShareItem],
    top_n: usize,
) -> PageReport {
    let interactions = Interactions {
        comments: shares.iter().map(|s| s.stats.comments).sum(),
        likes: shares.iter().map(|s| s.stats.likes).sum(),
        clicks: shares.iter().map(|s| s.stats.clicks).sum(),
        shares: shares.iter().map(|s| s.stats.shares).sum(),
    };

    PageReport {
        followers: follower_gains,
        reach: shares.iter().map(|s| s.stats.views).sum(),
        impressions: shares.iter().map(|s| s.stats.impressions).sum(),
        interactions,
        profile_views: ProfileViews {
            total: sections.iter().map(|s| s.views).sum(),
            sections,
        },
        top_shares: rank_top_shares(shares, top_n),
    }
}

/// Shares ranked descending by view count, truncated to `top_n`. The sort is
/// stable, so equal view counts keep their response order.
fn rank_top_shares(shares: &[ShareItem], top_n: usize) -> Vec<RankedShare> {
    let mut ranked: Vec<RankedShare> = shares
        .iter()
        .map(|share| RankedShare {
            text: share.text.clone(),
            views: share.stats.views,
        })
        .collect();

    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(top_n);

    ranked
}

/// Console rendering of a [`PageReport`].
pub fn render_page_report(report: &PageReport) -> String {
    let mut out = String::new();

    writeln!(out, "New Followers: {}", report.followers).unwrap();
    writeln!(out, "Reach: {}", group_digits(report.reach)).unwrap();
    writeln!(out, "Impressions: {}", group_digits(report.impressions)).unwrap();

    writeln!(out, "\nEngagement Metrics:").unwrap();
    writeln!(
        out,
        "- Comments: {}",
        group_digits(report.interactions.comments)
    )
    .unwrap();
    writeln!(out, "- Likes: {}", group_digits(report.interactions.likes)).unwrap();
    writeln!(out, "- Clicks: {}", group_digits(report.interactions.clicks)).unwrap();
    writeln!(out, "- Shares: {}", group_digits(report.interactions.shares)).unwrap();

    writeln!(out, "\nProfile Views:").unwrap();
    writeln!(out, "- Total: {}", group_digits(report.profile_views.total)).unwrap();
    for section in &report.profile_views.sections {
        writeln!(
            out,
            "- {}: {}",
            section.section,
            group_digits(section.views)
        )
        .unwrap();
    }

    writeln!(out, "\nTop Shared Content:").unwrap();
    for (idx, share) in report.top_shares.iter().enumerate() {
        writeln!(
            out,
            "{}. {} ({} views)",
            idx + 1,
            truncate(&share.text, SHARE_TEXT_WIDTH),
            group_digits(share.views)
        )
        .unwrap();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(text: &str, views: u64) -> ShareItem {
        ShareItem {
            text: text.to_string(),
            stats: ShareStats {
                views,
                ..Default::default()
            },
        }
    }

    #[test]
    fn sums_equal_per_item_totals() {
        let shares = vec![
            ShareItem {
                text: String::from("a"),
                stats: ShareStats {
                    views: 100,
                    impressions: 500,
                    comments: 2,
                    likes: 10,
                    clicks: 1,
                    shares: 0,
                },
            },
            ShareItem {
                text: String::from("b"),
                stats: ShareStats {
                    views: 50,
                    impressions: 250,
                    comments: 3,
                    likes: 5,
                    clicks: 4,
                    shares: 1,
                },
            },
        ];

        let report = build_page_report(0, Vec::new(), &shares, 5);

        assert_eq!(report.reach, 150);
        assert_eq!(report.impressions, 750);
        assert_eq!(report.interactions.comments, 5);
        assert_eq!(report.interactions.likes, 15);
        assert_eq!(report.interactions.clicks, 5);
        assert_eq!(report.interactions.shares, 1);
    }

    #[test]
    fn section_views_total_and_keep_order() {
        let sections = vec![
            SectionViews {
                section: String::from("OVERVIEW"),
                views: 420,
            },
            SectionViews {
                section: String::from("JOBS"),
                views: 37,
            },
        ];

        let report = build_page_report(0, sections, &[], 5);

        assert_eq!(report.profile_views.total, 457);
        assert_eq!(report.profile_views.sections[0].section, "OVERVIEW");
        assert_eq!(report.profile_views.sections[1].section, "JOBS");
    }

    #[test]
    fn top_shares_sorted_descending_and_truncated() {
        let shares = vec![
            share("low", 10),
            share("high", 900),
            share("mid", 40),
            share("tiny", 1),
            share("big", 500),
            share("least", 0),
        ];

        let report = build_page_report(0, Vec::new(), &shares, 5);

        let ranked: Vec<(&str, u64)> = report
            .top_shares
            .iter()
            .map(|s| (s.text.as_str(), s.views))
            .collect();

        assert_eq!(
            ranked,
            vec![
                ("high", 900),
                ("big", 500),
                ("mid", 40),
                ("low", 10),
                ("tiny", 1)
            ]
        );
    }

    #[test]
    fn top_shares_are_stable_for_ties() {
        let shares = vec![share("first", 7), share("second", 7), share("third", 7)];

        let report = build_page_report(0, Vec::new(), &shares, 5);

        assert_eq!(report.top_shares[0].text, "first");
        assert_eq!(report.top_shares[1].text, "second");
        assert_eq!(report.top_shares[2].text, "third");
    }

    #[test]
    fn top_shares_length_is_min_of_n_and_input() {
        let shares = vec![share("a", 1), share("b", 2)];

        assert_eq!(build_page_report(0, Vec::new(), &shares, 5).top_shares.len(), 2);
        assert_eq!(build_page_report(0, Vec::new(), &shares, 1).top_shares.len(), 1);
        assert_eq!(build_page_report(0, Vec::new(), &[], 5).top_shares.len(), 0);
    }

    #[test]
    fn ranking_uses_untruncated_text() {
        let long_text = "x".repeat(120);
        let shares = vec![share(&long_text, 10), share("short", 5)];

        let report = build_page_report(0, Vec::new(), &shares, 5);

        // The full text drives aggregation; only rendering truncates.
        assert_eq!(report.top_shares[0].text.len(), 120);

        let rendered = render_page_report(&report);
        let expected_display = format!("{}...", "x".repeat(50));
        assert!(rendered.contains(&expected_display));
        assert!(!rendered.contains(&long_text));
    }

    #[test]
    fn rendering_groups_digits() {
        let shares = vec![share("viral", 1_234_567)];
        let report = build_page_report(3, Vec::new(), &shares, 5);

        let rendered = render_page_report(&report);

        assert!(rendered.contains("Reach: 1,234,567"));
        assert!(rendered.contains("New Followers: 3"));
    }

    #[test]
    fn end_to_end_scenario() {
        let shares = vec![ShareItem {
            text: String::from("Hello"),
            stats: ShareStats {
                views: 100,
                impressions: 500,
                comments: 2,
                likes: 10,
                clicks: 1,
                shares: 0,
            },
        }];

        let report = build_page_report(12, Vec::new(), &shares, 5);

        assert_eq!(report.followers, 12);
        assert_eq!(report.reach, 100);
        assert_eq!(report.impressions, 500);
        assert_eq!(report.interactions.comments, 2);
        assert_eq!(report.top_shares.len(), 1);
        assert_eq!(report.top_shares[0].text, "Hello");
        assert_eq!(report.top_shares[0].views, 100);
    }
}

pub mod auth;
pub mod follower_statistics;
pub mod organization;
pub mod page_analytics;
pub mod shares;
pub mod window;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::window::TimeWindow;

// Base URL for the LinkedIn REST API
pub const BASE_URL: &str = "https://api.linkedin.com/v2";

pub struct LinkedInClient {
    reqwest: Client,
}

impl LinkedInClient {
    pub fn new(access_token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(format!("Bearer {access_token}").as_str())
                .expect("Failed to create header value"),
        );

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("Failed to build reqwest client");

        Self { reqwest }
    }

    // Organizations the token holder has a role on
    pub async fn organization_acls(
        &self,
    ) -> Result<organization::OrganizationAclsResponse, reqwest::Error> {
        let mut params = HashMap::new();
        params.insert(String::from("q"), String::from("roleAssignee"));

        self.get_with_params(&format!("{}/organizationAcls", BASE_URL), &params)
            .await
    }

    // Lifetime follower statistics for an organization
    pub async fn follower_statistics(
        &self,
        org_urn: &str,
    ) -> Result<follower_statistics::FollowerStatisticsResponse, reqwest::Error> {
        let mut params = HashMap::new();
        params.insert(String::from("q"), String::from("organizationalEntity"));
        params.insert(String::from("organizationalEntity"), org_urn.to_string());

        self.get_with_params(
            &format!("{}/organizationalEntityFollowerStatistics", BASE_URL),
            &params,
        )
        .await
    }

    // Page views pivoted by page section over a time window
    pub async fn page_analytics(
        &self,
        org_urn: &str,
        window: &TimeWindow,
    ) -> Result<page_analytics::PageAnalyticsResponse, reqwest::Error> {
        let mut params = HashMap::new();
        params.insert(String::from("q"), String::from("organization"));
        params.insert(String::from("organization"), org_urn.to_string());
        params.insert(String::from("pivots"), String::from("PAGE_SECTION"));
        params.insert(
            String::from("timeIntervals.timeRange"),
            window.interval_param(),
        );
        params.insert(String::from("metrics"), String::from("views"));

        self.get_with_params(&format!("{}/organizationPageAnalytics", BASE_URL), &params)
            .await
    }

    // Shares owned by an organization over a time window, single page
    pub async fn shares(
        &self,
        org_urn: &str,
        window: &TimeWindow,
        count: u32,
    ) -> Result<shares::SharesResponse, reqwest::Error> {
        let mut params = HashMap::new();
        params.insert(String::from("q"), String::from("owners"));
        params.insert(String::from("owners"), org_urn.to_string());
        params.insert(String::from("count"), count.to_string());
        params.insert(
            String::from("timeIntervals.timeRange"),
            window.interval_param(),
        );

        self.get_with_params(&format!("{}/shares", BASE_URL), &params)
            .await
    }

    // GET request with query parameters
    async fn get_with_params<R: DeserializeOwned>(
        &self,
        url: &str,
        params: &HashMap<String, String>,
    ) -> Result<R, reqwest::Error> {
        let response = self.reqwest.get(url).query(params).send().await?;
        let response = response.error_for_status()?;

        response.json().await
    }
}

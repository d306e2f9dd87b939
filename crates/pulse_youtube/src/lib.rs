pub mod auth;
pub mod reports;
pub mod videos;
pub mod window;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub const ANALYTICS_URL: &str = "https://youtubeanalytics.googleapis.com/v2/reports";
pub const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

pub struct YouTubeClient {
    reqwest: Client,
}

impl YouTubeClient {
    pub fn new(access_token: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(format!("Bearer {access_token}").as_str())
                .expect("Failed to create header value"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let reqwest = ClientBuilder::new()
            .default_headers(headers)
            .build()
            .expect("Failed to build reqwest client");

        Self { reqwest }
    }

    /// Run one Analytics API report query.
    pub async fn query_report(
        &self,
        query: &reports::ReportQuery,
    ) -> reqwest::Result<reports::ReportResponse> {
        self.get(ANALYTICS_URL, query).await
    }

    /// Resolve video ids to titles through the Data API.
    pub async fn video_titles(
        &self,
        video_ids: &[String],
    ) -> reqwest::Result<HashMap<String, String>> {
        let params = [
            ("part", String::from("snippet")),
            ("id", video_ids.join(",")),
        ];

        let response: videos::VideoListResponse = self.get(VIDEOS_URL, &params).await?;

        Ok(response.title_map())
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        let response = self
            .reqwest
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct SharesResponse {
    pub elements: Vec<Share>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Share {
    pub text: ShareText,
    #[serde(rename = "totalShareStatistics")]
    pub statistics: ShareStatistics,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShareText {
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ShareStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: u64,
    #[serde(rename = "impressionCount")]
    pub impression_count: u64,
    #[serde(rename = "commentCount")]
    pub comment_count: u64,
    #[serde(rename = "likeCount")]
    pub like_count: u64,
    #[serde(rename = "clickCount")]
    pub click_count: u64,
    #[serde(rename = "shareCount")]
    pub share_count: u64,
}

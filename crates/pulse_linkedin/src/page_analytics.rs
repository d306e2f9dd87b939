use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct PageAnalyticsResponse {
    pub elements: Vec<SectionViews>,
}

/// View count for one page section over the requested window.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SectionViews {
    #[serde(rename = "pageSection")]
    pub page_section: String,
    pub views: u64,
}

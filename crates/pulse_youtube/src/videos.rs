use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data API `videos.list` payload, reduced to the snippet fields we read.
#[derive(Serialize, Deserialize, Debug)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VideoSnippet {
    pub title: String,
}

impl VideoListResponse {
    pub fn title_map(self) -> HashMap<String, String> {
        self.items
            .into_iter()
            .map(|item| (item.id, item.snippet.title))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_and_map_titles() {
        let body = r#"{
            "kind": "youtube#videoListResponse",
            "items": [
                {"id": "vid1", "snippet": {"title": "First upload", "description": "..."}},
                {"id": "vid2", "snippet": {"title": "Second upload"}}
            ]
        }"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let titles = response.title_map();

        assert_eq!(titles.len(), 2);
        assert_eq!(titles["vid1"], "First upload");
        assert_eq!(titles["vid2"], "Second upload");
    }

    #[test]
    fn decode_empty_item_list() {
        let response: VideoListResponse = serde_json::from_str("{}").unwrap();

        assert!(response.title_map().is_empty());
    }
}

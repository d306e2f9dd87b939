use serde::{Deserialize, Serialize};

/// Follower statistics for an organization.
///
/// `followerGains` is not documented as a stable top-level field, so it is
/// decoded as optional and read as 0 when absent.
#[derive(Serialize, Deserialize, Debug)]
pub struct FollowerStatisticsResponse {
    #[serde(rename = "followerGains", default)]
    pub follower_gains: Option<i64>,
}

impl FollowerStatisticsResponse {
    pub fn gains(&self) -> i64 {
        self.follower_gains.unwrap_or(0)
    }
}

use contracts::dashboard::{DashboardStats, RecentSession, TrackedApp};

use crate::shared::api_client::{ApiClient, ApiError};

/// Aggregate counters for the stat cards.
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get_json("/dashboard/stats").await
}

/// Most used applications, ordered by total focus time.
pub async fn fetch_top_apps(client: &ApiClient, limit: u32) -> Result<Vec<TrackedApp>, ApiError> {
    client
        .get_json(&format!("/dashboard/apps?limit={}", limit))
        .await
}

/// Latest sessions for the activity feed.
pub async fn fetch_recent_activity(
    client: &ApiClient,
    limit: u32,
) -> Result<Vec<RecentSession>, ApiError> {
    client
        .get_json(&format!("/dashboard/recent-activity?limit={}", limit))
        .await
}

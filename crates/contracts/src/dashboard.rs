use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard stat cards.
///
/// `GET /api/dashboard/stats` serializes these fields in camelCase, so
/// the rename applies to the whole struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Seconds of focus time accumulated since local midnight.
    pub today_focus_seconds: i64,
    /// Number of applications the tracker has ever recorded.
    pub total_apps_tracked: i64,
    /// Executable with the most focus time today, if anything ran.
    pub most_used_app_today: Option<String>,
    /// Seconds every tracked process stayed alive since Monday.
    pub this_week_lifetime_seconds: i64,
}

/// One tracked application row from `GET /api/dashboard/apps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedApp {
    pub id: i64,
    pub executable_name: String,
    pub summary: UsageSummary,
}

/// Lifetime usage totals attached to a tracked application.
///
/// Timestamps arrive as naive ISO 8601 strings without an offset, which
/// is why these fields are `NaiveDateTime` and not `DateTime<Utc>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSummary {
    pub last_seen_end_at: NaiveDateTime,
    pub total_lifetime_seconds: i64,
    pub total_focus_time_seconds: i64,
}

/// One process session from `GET /api/dashboard/recent-activity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentSession {
    pub id: i64,
    pub process_name: String,
    pub session_start_time: NaiveDateTime,
    pub session_end_time: NaiveDateTime,
    pub total_lifetime_seconds: i64,
    pub total_focus_seconds: i64,
}

use contracts::dashboard::{DashboardStats, RecentSession, TrackedApp};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_client::use_api;
use crate::shared::format::{format_datetime, format_duration};
use crate::system::auth::context::use_session;
use crate::system::dashboard::api;

const TOP_APPS_LIMIT: u32 = 10;
const RECENT_ACTIVITY_LIMIT: u32 = 5;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let client = use_api();

    let stats: RwSignal<Option<DashboardStats>> = RwSignal::new(None);
    let top_apps: RwSignal<Vec<TrackedApp>> = RwSignal::new(Vec::new());
    let recent: RwSignal<Vec<RecentSession>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_stats(&client).await {
                Ok(data) => stats.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load dashboard stats: {}", e);
                    set_error.set(Some(format!("Failed to load dashboard stats: {}", e)));
                    set_loading.set(false);
                    return;
                }
            }
            match api::fetch_top_apps(&client, TOP_APPS_LIMIT).await {
                Ok(data) => top_apps.set(data),
                Err(e) => {
                    log::error!("Failed to load applications: {}", e);
                    set_error.set(Some(format!("Failed to load applications: {}", e)));
                    set_loading.set(false);
                    return;
                }
            }
            match api::fetch_recent_activity(&client, RECENT_ACTIVITY_LIMIT).await {
                Ok(data) => recent.set(data),
                Err(e) => {
                    log::error!("Failed to load recent activity: {}", e);
                    set_error.set(Some(format!("Failed to load recent activity: {}", e)));
                    set_loading.set(false);
                    return;
                }
            }
            set_loading.set(false);
        });
    };

    // Initial load when the page is created
    load_data();

    view! {
        <div class="dashboard">
            <h1 class="dashboard__greeting">
                {move || match session.username() {
                    Some(name) => format!("Welcome back, {}", name),
                    None => "Welcome".to_string(),
                }}
            </h1>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="btn-secondary" on:click=move |_| load_data()>
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading-indicator">"Loading..."</div>
            </Show>

            <div class="stat-cards">
                {move || stats.get().map(|stats| view! {
                    <div class="stat-card">
                        <span class="stat-card__label">"Focus today"</span>
                        <span class="stat-card__value">
                            {format_duration(stats.today_focus_seconds)}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Apps tracked"</span>
                        <span class="stat-card__value">{stats.total_apps_tracked}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Most used today"</span>
                        <span class="stat-card__value">
                            {stats.most_used_app_today.unwrap_or_else(|| "No data yet".to_string())}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Runtime this week"</span>
                        <span class="stat-card__value">
                            {format_duration(stats.this_week_lifetime_seconds)}
                        </span>
                    </div>
                })}
            </div>

            <section class="dashboard__apps">
                <h2>"Most used applications"</h2>
                <table class="app-table">
                    <thead>
                        <tr>
                            <th>"Application"</th>
                            <th>"Focus time"</th>
                            <th>"Lifetime"</th>
                            <th>"Last seen"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || top_apps.get().into_iter().map(|app| view! {
                            <tr>
                                <td class="app-table__name">{app.executable_name}</td>
                                <td>{format_duration(app.summary.total_focus_time_seconds)}</td>
                                <td>{format_duration(app.summary.total_lifetime_seconds)}</td>
                                <td>{format_datetime(&app.summary.last_seen_end_at)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="dashboard__recent">
                <h2>"Recent activity"</h2>
                <ul class="activity-list">
                    {move || recent.get().into_iter().map(|session| view! {
                        <li class="activity-list__row">
                            <span class="activity-list__name">{session.process_name}</span>
                            <span class="activity-list__time">
                                {format_datetime(&session.session_start_time)}
                            </span>
                            <span class="activity-list__focus">
                                {format_duration(session.total_focus_seconds)}
                            </span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </div>
    }
}

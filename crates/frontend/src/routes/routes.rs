//! Fixed route table.
//!
//! Routing is an ordered list checked top to bottom; the final `/*`
//! entry catches everything unknown, so resolution is total. Matching
//! is a pure function over the path string and runs the same way in a
//! browser and in a unit test.

use leptos::prelude::*;

use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;

pub const HOME_PATH: &str = "/";
/// Shared with the 401 handler, which redirects here.
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// One row of the route table.
pub struct RouteEntry {
    /// Exact path to match, or a pattern ending in `/*` that matches
    /// any path underneath it.
    pub path: &'static str,
    /// Stable name for logs and tests.
    pub name: &'static str,
    /// Lazy view factory. The component behind an entry is not built
    /// until the entry wins resolution.
    pub view: fn() -> AnyView,
    /// Full-page routes (login, register, error pages) draw their own
    /// chrome and ask the shell to skip the top bar.
    pub hide_top_bar: bool,
}

/// Checked top to bottom. Keep the catch-all last, everything after it
/// would be unreachable.
pub static ROUTES: [RouteEntry; 4] = [
    RouteEntry {
        path: HOME_PATH,
        name: "home",
        view: home_view,
        hide_top_bar: false,
    },
    RouteEntry {
        path: LOGIN_PATH,
        name: "login",
        view: login_view,
        hide_top_bar: true,
    },
    RouteEntry {
        path: REGISTER_PATH,
        name: "register",
        view: register_view,
        hide_top_bar: true,
    },
    RouteEntry {
        path: "/*",
        name: "not-found",
        view: not_found_view,
        hide_top_bar: true,
    },
];

fn home_view() -> AnyView {
    view! { <HomePage /> }.into_any()
}

fn login_view() -> AnyView {
    view! { <LoginPage /> }.into_any()
}

fn register_view() -> AnyView {
    view! { <RegisterPage /> }.into_any()
}

fn not_found_view() -> AnyView {
    view! { <NotFoundPage /> }.into_any()
}

/// Resolve `path` to the first matching table entry.
pub fn resolve(path: &str) -> &'static RouteEntry {
    let target = normalize_path(path);
    ROUTES
        .iter()
        .find(|entry| matches_pattern(entry.path, &target))
        .expect("route table ends with a catch-all entry")
}

/// Strip query and fragment, drop a trailing slash and guarantee a
/// leading one, so `/login/?next=1` resolves the same way as `/login`.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn matches_pattern(pattern: &str, path: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(prefix) => match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        },
        None => pattern == path,
    }
}

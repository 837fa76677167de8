//! TopHeader component - application top bar.
//!
//! Shown on every route that does not opt out via `hide_top_bar`.
//! Carries the product name, the signed-in username and logout.

use leptos::prelude::*;

use crate::routes::router::use_router;
use crate::routes::routes::LOGIN_PATH;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // User-initiated logout stays inside the app, unlike the 401 path
    // which forces a full document load.
    let logout = move |_| {
        session.logout();
        router.navigate(LOGIN_PATH);
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"App Usage"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || session.username().unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    "Log out"
                </button>
            </div>
        </header>
    }
}

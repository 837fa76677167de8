use leptos::prelude::*;

use crate::routes::router::use_router;
use crate::routes::routes::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    let go_home = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(HOME_PATH);
    };

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href="/" on:click=go_home>
                "Back to the dashboard"
            </a>
        </div>
    }
}

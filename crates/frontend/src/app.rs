use leptos::prelude::*;

use crate::routes::router::{provide_router, RouterHandle, RouterView};
use crate::shared::api_client::{provide_api, ApiClient};
use crate::system::auth::context::{provide_session, SessionStore};

#[component]
pub fn App() -> impl IntoView {
    // Restore the session before anything renders, then share the
    // stores with the whole tree via context.
    let session = SessionStore::load();
    provide_session(session);
    provide_api(ApiClient::new(session));
    provide_router(RouterHandle::new());

    view! {
        <RouterView />
    }
}

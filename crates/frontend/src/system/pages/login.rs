use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::{use_router, RouterHandle};
use crate::routes::routes::{HOME_PATH, REGISTER_PATH};
use crate::shared::api_client::use_api;
use crate::system::auth::api;
use crate::system::auth::context::{use_session, SessionStore};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let client = use_api();
    let router = use_router();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(&client, &username_val, &password_val).await {
                Ok(response) => {
                    complete_login(
                        session,
                        router,
                        set_is_loading,
                        &response.access_token,
                        &username_val,
                    );
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let go_to_register = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(REGISTER_PATH);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"App Usage"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "No account yet? "
                        <a href="/register" on:click=go_to_register>"Register"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Success path of the submit handler: store the session, clear the
/// pending flag and leave the form for the dashboard.
fn complete_login(
    session: SessionStore,
    router: RouterHandle,
    set_is_loading: WriteSignal<bool>,
    token: &str,
    username: &str,
) {
    session.set_login_state(token, username);
    set_is_loading.set(false);
    router.navigate(HOME_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::routes::LOGIN_PATH;
    use crate::system::auth::storage;

    #[test]
    fn test_complete_login_authenticates_and_clears_the_pending_flag() {
        storage::clear_session();
        let session = SessionStore::load();
        let router = RouterHandle::new();
        router.navigate(LOGIN_PATH);
        let (is_loading, set_is_loading) = signal(true);

        complete_login(session, router, set_is_loading, "tok-login", "alice");

        assert!(session.is_authenticated());
        assert!(!is_loading.get());
        assert_eq!(router.current(), HOME_PATH);
        assert_eq!(storage::get_username().as_deref(), Some("alice"));
    }
}

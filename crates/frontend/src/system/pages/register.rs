use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::router::use_router;
use crate::routes::routes::LOGIN_PATH;
use crate::shared::api_client::use_api;
use crate::system::auth::api;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let client = use_api();
    let router = use_router();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        if password_val != confirm.get() {
            set_error_message.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::register(&client, &username_val, &password_val).await {
                Ok(user) => {
                    log::info!("Registered account '{}'", user.username);
                    set_is_loading.set(false);
                    router.navigate(LOGIN_PATH);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Registration failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    let go_to_login = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(LOGIN_PATH);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"App Usage"</h1>
                <h2>"Create account"</h2>

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

                    <div class="form-group">
                        <label for="confirm">"Repeat password"</label>
                        <input
                            type="password"
                            id="confirm"
                            value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already registered? "
                        <a href="/login" on:click=go_to_login>"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

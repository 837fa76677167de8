//! HTTP plumbing shared by every API call the app makes.
//!
//! [`ApiClient`] owns the cross-cutting request concerns so the
//! per-endpoint functions stay one-liners: the `/api` prefix, the
//! bearer header, the request timeout and the reaction to a 401.

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::routes::router::force_navigate;
use crate::routes::routes::LOGIN_PATH;
use crate::system::auth::context::SessionStore;

/// Every endpoint lives under this prefix on the origin that served
/// the app bundle.
pub const API_BASE_PATH: &str = "/api";

/// Hard ceiling for a single request round trip.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Unified error for calls that go through [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built or its body serialized.
    #[error("failed to build request: {0}")]
    BuildRequest(String),
    /// The browser reported a transport failure.
    #[error("request failed: {0}")]
    Network(String),
    /// No response arrived within [`REQUEST_TIMEOUT_MS`].
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),
    /// The body arrived but was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401))
    }
}

/// Thin wrapper around `gloo_net` requests.
///
/// The session store is injected at construction, so the wrapper signs
/// requests with whatever token the store currently holds and can be
/// exercised against a scratch store in tests. The struct is `Copy`
/// and one instance is shared through context by the app root.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: SessionStore,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    /// GET `path` under the API prefix and parse the JSON body.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .with_auth(Request::get(&api_url(path)))
            .build()
            .map_err(|e| ApiError::BuildRequest(e.to_string()))?;

        self.dispatch(request).await
    }

    /// POST a JSON `body` to `path` and parse the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .with_auth(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::BuildRequest(e.to_string()))?;

        self.dispatch(request).await
    }

    /// POST `form` to `path` as `application/x-www-form-urlencoded`.
    ///
    /// The token endpoint implements the OAuth2 password flow and
    /// rejects JSON bodies, hence the separate method.
    pub async fn post_form<B, T>(&self, path: &str, form: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .with_auth(Request::post(&api_url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form_body(form)?)
            .map_err(|e| ApiError::BuildRequest(e.to_string()))?;

        self.dispatch(request).await
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match bearer_header(self.session.access_token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Send the request, racing it against the timeout, and unwrap the
    /// response down to the parsed payload.
    async fn dispatch<T>(&self, request: Request) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let send = Box::pin(request.send());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        let response = match select(send, timeout).await {
            Either::Left((sent, _)) => sent.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(_) => return Err(ApiError::Timeout(self.timeout_ms)),
        };

        if !response.ok() {
            let error = ApiError::Status(response.status());
            if error.is_unauthorized() {
                log::warn!("Request rejected with 401, dropping session");
                self.session
                    .react_to_unauthorized(|| force_navigate(LOGIN_PATH));
            }
            return Err(error);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Put the shared client into context for the whole app
pub fn provide_api(client: ApiClient) {
    provide_context(client);
}

/// Hook to access the shared client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

/// Origin the app was served from. API requests are same-origin, so
/// the origin plus [`API_BASE_PATH`] is the whole base URL.
#[cfg(target_arch = "wasm32")]
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn api_base() -> String {
    String::new()
}

/// Absolute URL for an endpoint path under the API prefix.
pub fn api_url(path: &str) -> String {
    let base = format!("{}{}", api_base(), API_BASE_PATH);
    join_url(&base, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {}", token))
}

fn form_body<B>(form: &B) -> Result<String, ApiError>
where
    B: Serialize,
{
    serde_qs::to_string(form).map_err(|e| ApiError::BuildRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::LoginRequest;

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(
            bearer_header(Some("abc123")).as_deref(),
            Some("Bearer abc123")
        );
    }

    #[test]
    fn test_bearer_header_absent_without_token() {
        assert_eq!(bearer_header(None), None);
    }

    #[test]
    fn test_api_url_prefixes_paths() {
        assert_eq!(api_url("/auth/token"), "/api/auth/token");
        assert_eq!(api_url("dashboard/stats"), "/api/dashboard/stats");
    }

    #[test]
    fn test_join_url_never_doubles_slashes() {
        assert_eq!(join_url("/api/", "/auth/token"), "/api/auth/token");
        assert_eq!(
            join_url("http://localhost/api", "dashboard/apps?limit=10"),
            "http://localhost/api/dashboard/apps?limit=10"
        );
    }

    #[test]
    fn test_form_body_encodes_login_fields() {
        let body = form_body(&LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(body, "username=alice&password=secret");
    }

    #[test]
    fn test_concurrent_401_reactions_redirect_once() {
        use crate::routes::router::take_forced_navigations;
        use crate::system::auth::storage;

        storage::clear_session();
        let session = SessionStore::load();
        session.set_login_state("tok", "alice");
        take_forced_navigations();

        // Two requests racing into the 401 branch: each reacts and
        // still surfaces the status to its caller, but only the first
        // one finds a live session.
        let reject = || {
            session.react_to_unauthorized(|| force_navigate(LOGIN_PATH));
            ApiError::Status(401)
        };
        let first = reject();
        let second = reject();

        assert!(first.is_unauthorized());
        assert!(second.is_unauthorized());
        assert_eq!(take_forced_navigations(), vec![LOGIN_PATH.to_string()]);
        assert!(!session.is_authenticated());
        assert_eq!(storage::get_access_token(), None);
        assert_eq!(storage::get_username(), None);
    }

    #[test]
    fn test_unauthorized_matches_only_401() {
        assert!(ApiError::Status(401).is_unauthorized());
        assert!(!ApiError::Status(403).is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
    }

    #[test]
    fn test_error_messages_name_the_cause() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server returned status 500"
        );
        assert_eq!(
            ApiError::Timeout(REQUEST_TIMEOUT_MS).to_string(),
            "request timed out after 10000 ms"
        );
    }
}

use contracts::system::auth::{LoginRequest, RegisterRequest, RegisteredUser, TokenResponse};

use crate::shared::api_client::{ApiClient, ApiError};

/// Exchange credentials for a bearer token.
///
/// The token endpoint implements the OAuth2 password flow, so the body
/// goes out form-encoded rather than as JSON.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    client.post_form("/auth/token", &request).await
}

/// Create a new account. The backend answers with the stored user.
pub async fn register(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<RegisteredUser, ApiError> {
    let request = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    client.post_json("/auth/register", &request).await
}

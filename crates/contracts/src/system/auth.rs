use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/token`.
///
/// The endpoint implements the OAuth2 password flow and expects a
/// form-encoded body, so this struct is serialized with `serde_qs`
/// instead of JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "bearer" for this API.
    pub token_type: String,
}

/// JSON payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Newly created account as returned by the register endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parses_api_body() {
        let body = r#"{"access_token":"eyJhbGciOiJIUzI1NiJ9.x.y","token_type":"bearer"}"#;
        let response: TokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token, "eyJhbGciOiJIUzI1NiJ9.x.y");
        assert_eq!(response.token_type, "bearer");
    }

    #[test]
    fn test_register_request_serializes_as_json_object() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_registered_user_parses_numeric_id() {
        let body = r#"{"id":7,"username":"alice","logs":[]}"#;
        let user: RegisteredUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
    }
}

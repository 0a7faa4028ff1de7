use serde::Serialize;

/// POST /api/users/token response body.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

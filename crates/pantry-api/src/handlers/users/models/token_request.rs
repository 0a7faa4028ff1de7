use serde::Deserialize;

/// POST /api/users/token request body.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

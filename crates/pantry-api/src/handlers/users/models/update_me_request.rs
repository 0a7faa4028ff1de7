use serde::Deserialize;

/// PATCH /api/users/me request body. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMeRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

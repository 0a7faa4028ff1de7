//! Opaque bearer token entity.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// An opaque bearer token mapped to the account it authenticates.
///
/// The token string is a fresh UUID v4 issued at login; resolving it on a
/// request yields the owning user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub user_id: UserId,
    pub created_at: i64,
}

impl AccessToken {
    /// Issues a fresh token for the given user.
    pub fn issue(user_id: UserId) -> Self {
        Self {
            token: uuid::Uuid::new_v4().to_string(),
            user_id,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

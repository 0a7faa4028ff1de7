//! User account entity.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// A user account.
///
/// The email address doubles as the login name and is stored normalized
/// (domain lower-cased). Only a bcrypt hash of the password is ever
/// persisted. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Normalized email address, unique case-insensitively.
    pub email: String,
    /// bcrypt hash of the password; never the raw value.
    pub password_hash: String,
    /// Display name, may be empty.
    pub name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Builds a fresh active account with default privilege flags.
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: UserId::generate(),
            email,
            password_hash,
            name,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grants staff and superuser privileges in one step.
    pub fn promote_to_superuser(&mut self) {
        self.is_staff = true;
        self.is_superuser = true;
        self.updated_at = chrono::Utc::now().timestamp_millis();
    }
}

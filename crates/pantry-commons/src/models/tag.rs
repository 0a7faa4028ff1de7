//! Tag entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserOwned;
use crate::{RecordId, UserId};

/// A recipe tag owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: RecordId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: i64,
}

impl Tag {
    pub fn new(user_id: UserId, name: String) -> Self {
        Self {
            id: RecordId::generate(),
            user_id,
            name,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl UserOwned for Tag {
    fn owner(&self) -> &UserId {
        &self.user_id
    }

    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display_is_name() {
        let tag = Tag::new(UserId::generate(), "vegan".to_string());
        assert_eq!(tag.to_string(), "vegan");
    }
}

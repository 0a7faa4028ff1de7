//! Ingredient entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserOwned;
use crate::{RecordId, UserId};

/// An ingredient owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: RecordId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: i64,
}

impl Ingredient {
    pub fn new(user_id: UserId, name: String) -> Self {
        Self {
            id: RecordId::generate(),
            user_id,
            name,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl UserOwned for Ingredient {
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
    fn test_ingredient_display_is_name() {
        let ingredient = Ingredient::new(UserId::generate(), "Cucumber".to_string());
        assert_eq!(ingredient.to_string(), "Cucumber");
    }
}

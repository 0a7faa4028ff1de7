//! Recipe entity.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::UserOwned;
use crate::{RecordId, UserId};

/// A recipe owned by a single user.
///
/// `image` holds the media-relative path produced when an image was
/// uploaded (`uploads/recipe/<uuid>.<ext>`), or `None` if no image is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecordId,
    pub user_id: UserId,
    pub title: String,
    pub time_minutes: u32,
    pub price: Decimal,
    pub image: Option<String>,
    pub created_at: i64,
}

impl Recipe {
    pub fn new(user_id: UserId, title: String, time_minutes: u32, price: Decimal) -> Self {
        Self {
            id: RecordId::generate(),
            user_id,
            title,
            time_minutes,
            price,
            image: None,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl UserOwned for Recipe {
    fn owner(&self) -> &UserId {
        &self.user_id
    }

    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

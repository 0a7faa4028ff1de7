//! Request and response models for the tag endpoints.

use pantry_commons::{RecordId, Tag};
use serde::{Deserialize, Serialize};

/// POST /api/tags request body. Ownership comes from the bearer token,
/// never from the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Tag as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: RecordId,
    pub name: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.clone(),
            name: tag.name.clone(),
        }
    }
}

//! Recipe image path derivation and media file storage.
//!
//! The storage path for an uploaded image is derived, never stored state:
//! a fresh random identifier combined with the original file's extension,
//! `uploads/recipe/<uuid>.<ext>`. The id source is injectable so tests can
//! pin it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};

/// Derives a recipe image path using the given id.
///
/// The extension is taken verbatim from the original filename's final
/// suffix; a filename without one yields a bare `<id>`.
pub fn recipe_image_path_with(id: &str, original_filename: &str) -> String {
    match Path::new(original_filename).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("uploads/recipe/{}.{}", id, ext),
        _ => format!("uploads/recipe/{}", id),
    }
}

/// Derives a recipe image path with a fresh UUID v4.
pub fn recipe_image_path(original_filename: &str) -> String {
    recipe_image_path_with(&uuid::Uuid::new_v4().to_string(), original_filename)
}

/// Writes media files under a configured root directory.
#[derive(Clone)]
pub struct MediaStore {
    root: Arc<PathBuf>,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Persists bytes at a media-relative path, creating parent directories.
    pub async fn save(&self, relative_path: &str, bytes: Vec<u8>) -> ApiResult<()> {
        let target = self.root.join(relative_path);
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, bytes)
        })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .map_err(|e| ApiError::Storage(format!("failed to write media file: {}", e)))
    }
}

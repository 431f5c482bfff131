use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::responses::PhotoResponse;

/// Upper bound on an uploaded photo, in bytes
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Failures of the photo upload and serving paths
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("only JPEG and PNG uploads are accepted")]
    UnsupportedType,
    #[error("file exceeds the 5 MB upload limit")]
    TooLarge,
    #[error("multipart field 'file' is missing")]
    MissingFile,
    #[error("photo {0} not found")]
    NotFound(String),
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("photo storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed photo storage with an in-memory listing
///
/// Files persist in the uploads directory across restarts; the listing lives
/// in process memory and starts empty on every boot.
pub struct PhotoStore {
    dir: PathBuf,
    listing: RwLock<Vec<PhotoResponse>>,
}

impl PhotoStore {
    /// Open the store, creating the uploads directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;

        Ok(Self {
            dir,
            listing: RwLock::new(Vec::new()),
        })
    }

    /// Directory the files land in
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map an accepted content type to its file extension
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        match content_type {
            "image/jpeg" => Some(".jpg"),
            "image/png" => Some(".png"),
            _ => None,
        }
    }

    /// Persist an upload under a fresh random name and record it
    pub async fn save(
        &self,
        content_type: &str,
        data: &[u8],
    ) -> Result<PhotoResponse, PhotoError> {
        let ext = Self::extension_for(content_type).ok_or(PhotoError::UnsupportedType)?;
        if data.len() > MAX_PHOTO_BYTES {
            return Err(PhotoError::TooLarge);
        }

        let filename = format!("{}{}", Uuid::new_v4().simple(), ext);
        tokio::fs::write(self.dir.join(&filename), data).await?;

        let entry = PhotoResponse {
            url: format!("/uploads/{filename}"),
            filename,
            uploaded_at: Utc::now(),
        };

        let mut listing = self.listing.write().await;
        listing.insert(0, entry.clone());

        tracing::debug!("Stored photo {} ({} bytes)", entry.filename, data.len());
        Ok(entry)
    }

    /// Uploads recorded since startup, newest first
    pub async fn list(&self) -> Vec<PhotoResponse> {
        self.listing.read().await.clone()
    }

    /// Resolve a stored filename to its path on disk
    ///
    /// Names carrying path separators or parent components resolve to
    /// not-found instead of escaping the uploads directory.
    pub async fn resolve(&self, filename: &str) -> Result<PathBuf, PhotoError> {
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(PhotoError::NotFound(filename.to_string()));
        }

        let path = self.dir.join(filename);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(PhotoError::NotFound(filename.to_string())),
        }
    }
}

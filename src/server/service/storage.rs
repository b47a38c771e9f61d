//! Object storage on the local filesystem.
//!
//! Each bucket is a directory under [`StorageConfig::root`]. Objects are addressed by a
//! relative `/` separated path and served publicly under `/storage/<bucket>/<path>`.

use std::path::{Path, PathBuf};

use dioxus_logger::tracing;

use crate::{
    model::storage::{UploadDto, IMAGE_BUCKET},
    server::{error::storage::StorageError, model::app::StorageConfig},
};

/// Buckets accepting uploads
pub const BUCKETS: [&str; 1] = [IMAGE_BUCKET];

/// Extensions accepted by [`StorageService::put`], every bucket only holds images
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

pub struct StorageService<'a> {
    config: &'a StorageConfig,
}

impl<'a> StorageService<'a> {
    pub fn new(config: &'a StorageConfig) -> Self {
        Self { config }
    }

    /// Public download URL of an object
    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/{}/{}", self.config.public_url, bucket, path)
    }

    /// Resolves a bucket and object path to a file below the storage root.
    ///
    /// Empty, absolute and `..` segments are rejected so an object can never escape its bucket.
    fn object_path(&self, bucket: &str, path: &str) -> Result<PathBuf, StorageError> {
        if !BUCKETS.contains(&bucket) {
            return Err(StorageError::UnknownBucket(bucket.to_string()));
        }

        let valid = !path.is_empty()
            && !path.contains('\\')
            && path
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
        if !valid {
            return Err(StorageError::InvalidPath(path.to_string()));
        }

        let mut file = self.config.root.join(bucket);
        file.extend(path.split('/'));

        Ok(file)
    }

    /// Stores `bytes`, replacing any object at the same path
    pub async fn put(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
    ) -> Result<UploadDto, StorageError> {
        let file = self.object_path(bucket, path)?;
        if !is_image(&file) {
            return Err(StorageError::UnsupportedType(path.to_string()));
        }

        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file, bytes).await?;

        tracing::debug!("Stored {} bytes at {}/{}", bytes.len(), bucket, path);

        Ok(UploadDto {
            path: path.to_string(),
            public_url: self.public_url(bucket, path),
        })
    }

    /// Reads an object and guesses its content type from the extension.
    ///
    /// Anything that is not one of the accepted image types is served as a plain download.
    pub async fn get(&self, bucket: &str, path: &str) -> Result<(Vec<u8>, String), StorageError> {
        let file = self.object_path(bucket, path)?;

        let bytes = match tokio::fs::read(&file).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::ObjectNotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let content_type = if is_image(&file) {
            mime_guess::from_path(&file).first_or_octet_stream()
        } else {
            mime_guess::mime::APPLICATION_OCTET_STREAM
        }
        .to_string();

        Ok((bytes, content_type))
    }
}

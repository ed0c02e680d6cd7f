//! Google Drive implementation of [`FileStore`]: share-link id extraction,
//! metadata name fetch, media download into the temp directory.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use google_auth::ServiceAccountAuth;
use lazy_regex::regex_captures;
use thiserror::Error;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::store::{FileStore, TempDownload};

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

#[derive(Error, Debug)]
enum DriveError {
    #[error("auth failure: {0}")]
    Auth(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads confirmation files into a dedicated temp directory.
pub struct GoogleDriveStore {
    http: reqwest::Client,
    auth: Arc<ServiceAccountAuth>,
    tmp_dir: PathBuf,
}

impl GoogleDriveStore {
    /// Creates the store and its temp directory.
    pub async fn new(auth: Arc<ServiceAccountAuth>, tmp_dir: PathBuf) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(&tmp_dir).await?;
        Ok(Self {
            http: reqwest::Client::new(),
            auth,
            tmp_dir,
        })
    }

    async fn download(&self, file_id: &str) -> Result<TempDownload, DriveError> {
        let token = self
            .auth
            .token()
            .await
            .map_err(|e| DriveError::Auth(e.to_string()))?;
        let file_url = format!("{}/{}", DRIVE_FILES_URL, file_id);

        let metadata: serde_json::Value = self
            .http
            .get(&file_url)
            .query(&[("fields", "name")])
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let name = metadata
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}-{}.pdf", file_id, Uuid::new_v4()));

        let media = self
            .http
            .get(&file_url)
            .query(&[("alt", "media")])
            .bearer_auth(&token)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let path = self.tmp_dir.join(name);
        tokio::fs::write(&path, &media).await?;

        Ok(TempDownload::new(path, file_id.to_string()))
    }
}

#[async_trait]
impl FileStore for GoogleDriveStore {
    #[instrument(skip(self))]
    async fn resolve_to_local_path(&self, reference: &str) -> Option<TempDownload> {
        let Some(file_id) = extract_file_id(reference) else {
            warn!(reference = %reference, "File reference is not a recognizable share link");
            return None;
        };

        match self.download(file_id).await {
            Ok(download) => {
                info!(
                    file_id = %file_id,
                    path = %download.path().display(),
                    "File downloaded"
                );
                Some(download)
            }
            Err(e) => {
                error!(file_id = %file_id, error = %e, "File download failed");
                None
            }
        }
    }
}

/// File id from the `…/d/<id>/…` share-URL form.
fn extract_file_id(reference: &str) -> Option<&str> {
    regex_captures!(r"/d/([a-zA-Z0-9_-]+)", reference).map(|(_, id)| id)
}

use anyhow::{Context as _, anyhow};

use crate::domain::repository::ObjectStorePort;
use crate::domain::types::ImageUpload;
use crate::error::CatalogServiceError;

/// S3-compatible object storage client. Each object is written with a single
/// authenticated PUT and served back from the same public URL.
#[derive(Clone)]
pub struct HttpObjectStore {
    pub client: reqwest::Client,
    pub base_url: String,
    pub bucket: String,
    pub api_key: String,
}

impl ObjectStorePort for HttpObjectStore {
    async fn upload(
        &self,
        image: ImageUpload,
        key: &str,
    ) -> Result<String, CatalogServiceError> {
        let url = format!("{}/{}/{key}", self.base_url.trim_end_matches('/'), self.bucket);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, image.content_type)
            .body(image.bytes)
            .send()
            .await
            .context("object store unreachable")?;

        if !response.status().is_success() {
            return Err(anyhow!("object store returned {}", response.status()).into());
        }
        Ok(url)
    }
}

//! Raster upload to a public file CDN.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use teestudio_core::ServiceError;
use teestudio_settings::ServiceSettings;

use crate::client::{http_client, transport};

const SERVICE: &str = "uploadcare";

/// A stored file and where it is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_id: String,
    pub public_url: String,
}

#[async_trait]
pub trait RasterUploader: Send + Sync {
    async fn upload(&self, file_name: &str, png: Vec<u8>) -> Result<UploadedFile, ServiceError>;
}

/// `<cdn>/<file id>/`
pub fn public_url(cdn_base_url: &str, file_id: &str) -> String {
    format!("{}/{}/", cdn_base_url.trim_end_matches('/'), file_id)
}

/// Uploadcare direct-upload client.
#[derive(Debug, Clone)]
pub struct UploadcareClient {
    http: reqwest::Client,
    url: String,
    public_key: Option<String>,
    cdn_base_url: String,
}

impl UploadcareClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        Ok(Self::with_client(http_client(settings)?, settings))
    }

    pub fn with_client(http: reqwest::Client, settings: &ServiceSettings) -> Self {
        Self {
            http,
            url: settings.upload_url.clone(),
            public_key: settings.upload_public_key.clone(),
            cdn_base_url: settings.cdn_base_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: Option<String>,
}

#[async_trait]
impl RasterUploader for UploadcareClient {
    async fn upload(&self, file_name: &str, png: Vec<u8>) -> Result<UploadedFile, ServiceError> {
        let public_key = self
            .public_key
            .clone()
            .ok_or_else(|| ServiceError::MissingCredential {
                service: SERVICE.to_string(),
            })?;

        let part = Part::bytes(png)
            .file_name(file_name.to_string())
            .mime_str("image/png")
            .map_err(|e| transport(SERVICE, e))?;
        let form = Form::new()
            .text("UPLOADCARE_PUB_KEY", public_key)
            .part("file", part);

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(SERVICE, e))?;
        let body: UploadResponse = response.json().await.map_err(|e| ServiceError::InvalidResponse {
            service: SERVICE.to_string(),
            reason: e.to_string(),
        })?;

        let file_id = body.file.ok_or_else(|| ServiceError::InvalidResponse {
            service: SERVICE.to_string(),
            reason: "response has no file id".to_string(),
        })?;
        tracing::info!(file_id = %file_id, file_name, "Raster uploaded");
        Ok(UploadedFile {
            public_url: public_url(&self.cdn_base_url, &file_id),
            file_id,
        })
    }
}

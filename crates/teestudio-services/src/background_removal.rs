//! Background removal.
//!
//! The service gets the image bytes with `size=auto` and answers either
//! with the cut-out PNG or with a JSON error payload.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use teestudio_core::{ElementId, ServiceError, View};
use teestudio_designer::{decode_image, DesignerState};
use teestudio_settings::ServiceSettings;

use crate::client::{http_client, transport};
use crate::request::RequestState;

const SERVICE: &str = "remove.bg";

#[async_trait]
pub trait BackgroundRemover: Send + Sync {
    /// Returns the image with its background removed, as PNG.
    async fn remove_background(&self, image: &[u8], mime: &str) -> Result<Vec<u8>, ServiceError>;
}

/// remove.bg HTTP client.
#[derive(Debug, Clone)]
pub struct RemoveBgClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl RemoveBgClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        Ok(Self::with_client(http_client(settings)?, settings))
    }

    pub fn with_client(http: reqwest::Client, settings: &ServiceSettings) -> Self {
        Self {
            http,
            url: settings.background_removal_url.clone(),
            api_key: settings.background_removal_api_key.clone(),
        }
    }
}

#[async_trait]
impl BackgroundRemover for RemoveBgClient {
    async fn remove_background(&self, image: &[u8], mime: &str) -> Result<Vec<u8>, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::MissingCredential {
                service: SERVICE.to_string(),
            })?;

        let part = Part::bytes(image.to_vec())
            .file_name("image")
            .mime_str(mime)
            .map_err(|e| transport(SERVICE, e))?;
        let form = Form::new().text("size", "auto").part("image_file", part);

        let response = self
            .http
            .post(&self.url)
            .header("X-Api-Key", api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(SERVICE, e))?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(|e| transport(SERVICE, e))?;
            tracing::debug!(bytes = bytes.len(), "Background removed");
            return Ok(bytes.to_vec());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "Background removal rejected");
        Err(ServiceError::Rejected {
            service: SERVICE.to_string(),
            message: error_message(&body),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    title: Option<String>,
}

/// First error title of an error payload, verbatim.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.errors.into_iter().next())
        .and_then(|entry| entry.title)
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Applies a finished removal to the image it was requested for.
///
/// Only a successful, decodable result touches the element; its id and
/// placement are kept. Anything else leaves the state as it was.
pub fn apply_background_removal(
    state: &mut DesignerState,
    view: View,
    id: &ElementId,
    outcome: RequestState<Vec<u8>>,
) -> RequestState<ElementId> {
    let bytes = match outcome {
        RequestState::Pending => return RequestState::Pending,
        RequestState::Failed(reason) => return RequestState::Failed(reason),
        RequestState::Succeeded(bytes) => bytes,
    };
    let source = match decode_image(bytes, "image/png") {
        Ok(source) => source,
        Err(e) => return RequestState::Failed(e.to_string()),
    };
    if state.replace_image_source(view, id, source) {
        RequestState::Succeeded(id.clone())
    } else {
        RequestState::Failed(format!("Image {} no longer exists", id))
    }
}

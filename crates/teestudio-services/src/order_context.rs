//! Order-context notification sent after a design is uploaded.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use teestudio_core::ServiceError;
use teestudio_settings::ServiceSettings;

use crate::client::{http_client, transport};

const SERVICE: &str = "order-context";

/// Payload referencing the uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderContext {
    pub name: String,
    pub color: String,
    pub attributes: BTreeMap<String, String>,
    pub background: String,
    pub all_designs: serde_json::Map<String, serde_json::Value>,
}

impl OrderContext {
    pub fn for_file(settings: &ServiceSettings, file_id: &str) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(settings.order_file_attribute.clone(), file_id.to_string());
        Self {
            name: settings.order_product_name.clone(),
            color: String::new(),
            attributes,
            background: String::new(),
            all_designs: serde_json::Map::new(),
        }
    }
}

#[async_trait]
pub trait OrderContextSink: Send + Sync {
    /// Posts the context; the response is returned as-is.
    async fn notify(&self, context: &OrderContext) -> Result<serde_json::Value, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct OrderContextClient {
    http: reqwest::Client,
    url: String,
}

impl OrderContextClient {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ServiceError> {
        Ok(Self::with_client(http_client(settings)?, settings))
    }

    pub fn with_client(http: reqwest::Client, settings: &ServiceSettings) -> Self {
        Self {
            http,
            url: settings.order_context_url.clone(),
        }
    }
}

#[async_trait]
impl OrderContextSink for OrderContextClient {
    async fn notify(&self, context: &OrderContext) -> Result<serde_json::Value, ServiceError> {
        let response = self
            .http
            .post(&self.url)
            .json(context)
            .send()
            .await
            .map_err(|e| transport(SERVICE, e))?;
        let value: serde_json::Value =
            response.json().await.map_err(|e| ServiceError::InvalidResponse {
                service: SERVICE.to_string(),
                reason: e.to_string(),
            })?;
        tracing::info!(response = %value, "Order context response");
        Ok(value)
    }
}

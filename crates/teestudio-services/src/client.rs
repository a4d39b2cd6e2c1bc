use std::time::Duration;

use teestudio_core::ServiceError;
use teestudio_settings::ServiceSettings;

/// Shared HTTP client for all collaborators.
pub fn http_client(settings: &ServiceSettings) -> Result<reqwest::Client, ServiceError> {
    reqwest::Client::builder()
        .user_agent(concat!("teestudio/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_millis(settings.request_timeout_ms))
        .build()
        .map_err(|e| ServiceError::Transport {
            service: "http".to_string(),
            reason: format!("HTTP client error: {}", e),
        })
}

/// Maps a transport failure of `service`.
pub(crate) fn transport(service: &str, err: reqwest::Error) -> ServiceError {
    ServiceError::Transport {
        service: service.to_string(),
        reason: err.to_string(),
    }
}

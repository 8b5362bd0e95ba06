use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use crate::backend::{
    DetectRequest, DetectResponse, Detection, HealthResponse, LanguagesResponse,
    TranslateRequest, TranslateResponse, Translation, TranslationBackend,
};
use crate::errors::BackendError;

/// HTTP client for the translation backend
#[derive(Debug)]
pub struct HttpBackend {
    /// Base URL of the backend, without a trailing slash
    base_url: String,
    /// HTTP client for making requests
    client: Client,
}

impl HttpBackend {
    /// Create a new client for the given base URL.
    ///
    /// No request timeout is applied; failures surface only through the
    /// transport's own error signal.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            // Error statuses still carry a JSON body with an error message
            // when the backend itself produced them; prefer that message.
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
                if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
                    return Err(BackendError::Rejected {
                        message: message.to_string(),
                    });
                }
            }
            error!("Backend error ({}): {}", status, text);
            return Err(BackendError::ApiError {
                status_code: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse backend response: {}", e);
            BackendError::ParseError(e.to_string())
        })
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn languages(&self) -> Result<BTreeMap<String, String>, BackendError> {
        let response: LanguagesResponse = self.get_json("/api/languages").await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: String::new(),
            });
        }
        Ok(response.languages)
    }

    async fn translate(&self, request: TranslateRequest) -> Result<Translation, BackendError> {
        let response: TranslateResponse = self.post_json("/api/translate", &request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.error.unwrap_or_default(),
            });
        }
        let text = response.translated_text.ok_or_else(|| {
            BackendError::ParseError("translated_text missing from successful response".to_string())
        })?;
        Ok(Translation { text })
    }

    async fn detect(&self, request: DetectRequest) -> Result<Detection, BackendError> {
        let response: DetectResponse = self.post_json("/api/detect", &request).await?;
        if !response.success {
            return Err(BackendError::Rejected {
                message: response.error.unwrap_or_default(),
            });
        }
        let language = response.detected_language.ok_or_else(|| {
            BackendError::ParseError(
                "detected_language missing from successful response".to_string(),
            )
        })?;
        let language_name = response.language_name.unwrap_or_else(|| language.clone());
        Ok(Detection {
            language,
            language_name,
        })
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        self.get_json("/health").await
    }
}

/*!
 * Translation backend clients.
 *
 * This module defines the wire contract of the remote translation service
 * and the clients that speak it:
 * - `http`: reqwest-based client for a live backend
 * - `mock`: scriptable in-memory backend for tests
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::errors::BackendError;

pub mod http;
pub mod mock;

/// Request body for `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

/// Response body for `POST /api/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Whether the backend accepted the request
    pub success: bool,
    /// Translated text, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request body for `POST /api/detect`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectRequest {
    /// Text to analyze
    pub text: String,
}

/// Response body for `POST /api/detect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    /// Whether detection succeeded
    pub success: bool,
    /// Detected language code, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    /// Display name of the detected language, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    /// Error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response body for `GET /api/languages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    /// Whether the catalog was produced
    pub success: bool,
    /// Language code to display name
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status string, "healthy" when operational
    pub status: String,
    /// Service display name
    pub service: String,
    /// Number of supported languages
    pub supported_languages: usize,
}

/// A successful translation result
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// The translated text
    pub text: String,
}

/// A successful language detection result
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Detected language code
    pub language: String,
    /// Display name of the detected language
    pub language_name: String,
}

/// Common trait for translation backends
///
/// Defines the operations the session controller needs; implementations
/// may talk HTTP or serve canned responses for tests.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Fetch the catalog of supported languages
    async fn languages(&self) -> Result<BTreeMap<String, String>, BackendError>;

    /// Translate text between two languages
    async fn translate(&self, request: TranslateRequest) -> Result<Translation, BackendError>;

    /// Detect the language of a text
    async fn detect(&self, request: DetectRequest) -> Result<Detection, BackendError>;

    /// Check whether the backend is reachable and operational
    async fn health(&self) -> Result<HealthResponse, BackendError>;
}

/*!
 * Mock backend implementations for testing.
 *
 * This module provides a backend that simulates different behaviors:
 * - `MockBackend::working()` - always succeeds with a tagged translation
 * - `MockBackend::rejecting(msg)` - backend accepts the call but reports failure
 * - `MockBackend::failing()` - transport-level failure on every call
 * - `MockBackend::scripted(..)` - per-call delays and results, in order
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::backend::{
    DetectRequest, Detection, HealthResponse, TranslateRequest, Translation, TranslationBackend,
};
use crate::errors::BackendError;

/// Behavior mode for the mock backend
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeeds; translations are tagged with the target language
    Working,
    /// Always fails at the transport level
    Failing,
    /// Serves the catalog but fails translate/detect at the transport level
    DroppedCalls,
    /// Always answers with success=false and the given message
    Rejecting(String),
    /// Succeeds after a fixed delay
    Slow { delay_ms: u64 },
    /// Consumes one scripted outcome per translate call, in order
    Scripted,
}

/// One scripted translate outcome
#[derive(Debug, Clone)]
pub struct ScriptedTranslation {
    /// Delay before the outcome is produced
    pub delay_ms: u64,
    /// The outcome: translated text or a backend-reported error message
    pub result: Result<String, String>,
}

/// Mock backend for exercising the session controller
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior mode
    behavior: MockBehavior,
    /// Languages served by `languages()`
    catalog: BTreeMap<String, String>,
    /// Detection served by `detect()`
    detection: Detection,
    /// Scripted translate outcomes, popped front to back
    script: Mutex<Vec<ScriptedTranslation>>,
    /// Translate requests seen, in call order
    translate_requests: Mutex<Vec<TranslateRequest>>,
    /// Number of `languages()` calls
    languages_calls: AtomicUsize,
    /// Number of `detect()` calls
    detect_calls: AtomicUsize,
}

impl MockBackend {
    /// Create a mock with the specified behavior and a two-language catalog
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            catalog: BTreeMap::from([
                ("en".to_string(), "English".to_string()),
                ("es".to_string(), "Spanish".to_string()),
            ]),
            detection: Detection {
                language: "en".to_string(),
                language_name: "English".to_string(),
            },
            script: Mutex::new(Vec::new()),
            translate_requests: Mutex::new(Vec::new()),
            languages_calls: AtomicUsize::new(0),
            detect_calls: AtomicUsize::new(0),
        }
    }

    /// Create a working mock backend that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that fails every call at the transport level
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that reports failure with the given message
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Rejecting(message.into()))
    }

    /// Create a mock whose catalog loads but whose calls then drop
    pub fn dropping() -> Self {
        Self::new(MockBehavior::DroppedCalls)
    }

    /// Create a mock that succeeds after the given delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Create a mock serving the given translate outcomes in order
    pub fn scripted(outcomes: Vec<ScriptedTranslation>) -> Self {
        let mock = Self::new(MockBehavior::Scripted);
        *mock.script.lock() = outcomes;
        mock
    }

    /// Replace the served language catalog
    pub fn with_catalog(mut self, entries: &[(&str, &str)]) -> Self {
        self.catalog = entries
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        self
    }

    /// Replace the served detection result
    pub fn with_detection(mut self, language: &str, language_name: &str) -> Self {
        self.detection = Detection {
            language: language.to_string(),
            language_name: language_name.to_string(),
        };
        self
    }

    /// Number of translate calls seen so far
    pub fn translate_calls(&self) -> usize {
        self.translate_requests.lock().len()
    }

    /// Number of detect calls seen so far
    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    /// Number of catalog fetches seen so far
    pub fn languages_calls(&self) -> usize {
        self.languages_calls.load(Ordering::SeqCst)
    }

    /// The last translate request seen, if any
    pub fn last_translate_request(&self) -> Option<TranslateRequest> {
        self.translate_requests.lock().last().cloned()
    }

    /// The canonical working translation for a request
    pub fn working_translation(request: &TranslateRequest) -> String {
        format!("[{}] {}", request.target_lang, request.text)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn languages(&self) -> Result<BTreeMap<String, String>, BackendError> {
        self.languages_calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Failing => Err(BackendError::RequestFailed(
                "mock transport failure".to_string(),
            )),
            MockBehavior::Rejecting(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            _ => Ok(self.catalog.clone()),
        }
    }

    async fn translate(&self, request: TranslateRequest) -> Result<Translation, BackendError> {
        self.translate_requests.lock().push(request.clone());
        match &self.behavior {
            MockBehavior::Working => Ok(Translation {
                text: Self::working_translation(&request),
            }),
            MockBehavior::Failing | MockBehavior::DroppedCalls => Err(
                BackendError::RequestFailed("mock transport failure".to_string()),
            ),
            MockBehavior::Rejecting(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                Ok(Translation {
                    text: Self::working_translation(&request),
                })
            }
            MockBehavior::Scripted => {
                let outcome = {
                    let mut script = self.script.lock();
                    if script.is_empty() {
                        None
                    } else {
                        Some(script.remove(0))
                    }
                };
                let outcome = outcome.ok_or_else(|| {
                    BackendError::RequestFailed("mock script exhausted".to_string())
                })?;
                tokio::time::sleep(Duration::from_millis(outcome.delay_ms)).await;
                match outcome.result {
                    Ok(text) => Ok(Translation { text }),
                    Err(message) => Err(BackendError::Rejected { message }),
                }
            }
        }
    }

    async fn detect(&self, request: DetectRequest) -> Result<Detection, BackendError> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        let _ = request;
        match &self.behavior {
            MockBehavior::Failing | MockBehavior::DroppedCalls => Err(
                BackendError::RequestFailed("mock transport failure".to_string()),
            ),
            MockBehavior::Rejecting(message) => Err(BackendError::Rejected {
                message: message.clone(),
            }),
            _ => Ok(self.detection.clone()),
        }
    }

    async fn health(&self) -> Result<HealthResponse, BackendError> {
        match &self.behavior {
            MockBehavior::Failing => Err(BackendError::RequestFailed(
                "mock transport failure".to_string(),
            )),
            _ => Ok(HealthResponse {
                status: "healthy".to_string(),
                service: "mock".to_string(),
                supported_languages: self.catalog.len(),
            }),
        }
    }
}

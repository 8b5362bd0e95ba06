/*!
 * Collaborator traits for the rendering surface.
 *
 * The session controller issues commands to these and reads nothing back
 * beyond success or failure; the surfaces own their internals. Implementing
 * them against a recording double gives fully isolated controller tests.
 */

use std::fmt::Debug;

use crate::errors::CapabilityError;
use crate::speech::SpeechRequest;

pub mod terminal;

/// Severity of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral status information
    Info,
    /// An operation completed successfully
    Success,
    /// An operation failed or was rejected
    Error,
}

/// Transient, auto-dismissing user-facing status message.
///
/// A notice is superseded immediately by the next one; the surface decides
/// how long to show it (the reference rendering keeps it for three seconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotice {
    /// Message shown to the user
    pub message: String,
    /// Severity of the notice
    pub kind: NoticeKind,
}

impl ToastNotice {
    /// Build an info notice
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    /// Build a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Build an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Sink for transient notices
pub trait NoticeSink: Send + Sync + Debug {
    /// Show a notice, superseding any notice currently visible
    fn notify(&self, notice: ToastNotice);
}

/// Clipboard write access with a legacy fallback path.
///
/// Mirrors the browser split between the asynchronous clipboard API and the
/// execCommand-based mechanism older environments fall back to.
pub trait Clipboard: Send + Sync + Debug {
    /// Write text through the primary clipboard mechanism
    fn write(&self, text: &str) -> Result<(), CapabilityError>;

    /// Write text through the legacy fallback mechanism
    fn write_fallback(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported("Clipboard fallback".to_string()))
    }
}

/// Speech synthesis playback
pub trait SpeechSynthesizer: Send + Sync + Debug {
    /// Whether a speech engine is available at all
    fn is_available(&self) -> bool;

    /// Start speaking the request; returns once playback is queued
    fn speak(&self, request: &SpeechRequest) -> Result<(), CapabilityError>;
}

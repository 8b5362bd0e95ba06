use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::backend::{DetectRequest, TranslateRequest, TranslationBackend};
use crate::language_catalog::LanguageCatalog;
use crate::session::debounce::{AUTO_TRANSLATE_DELAY_MS, DebounceTimer};
use crate::session::state::SessionState;
use crate::speech::SpeechRequest;
use crate::surface::{Clipboard, NoticeSink, SpeechSynthesizer, ToastNotice};

// User-facing notice texts. The surface renders these verbatim.
pub const MSG_EMPTY_TEXT: &str = "Please enter text to translate";
pub const MSG_MISSING_LANGUAGES: &str = "Please select source and target languages";
pub const MSG_TRANSLATED: &str = "Translation completed successfully!";
pub const MSG_TRANSLATE_FALLBACK: &str = "Translation failed";
pub const MSG_NETWORK_ERROR: &str = "Network error. Please try again.";
pub const MSG_LANGUAGES_FAILED: &str = "Failed to load languages";
pub const MSG_EMPTY_DETECT: &str = "Please enter text to detect language";
pub const MSG_DETECT_FAILED: &str = "Language detection failed";
pub const MSG_SWAPPED: &str = "Languages swapped!";
pub const MSG_CLEARED: &str = "Text cleared";
pub const MSG_NO_TEXT_TO_COPY: &str = "No text to copy";
pub const MSG_COPIED: &str = "Text copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy text";
pub const MSG_NO_TRANSLATION_TO_SPEAK: &str = "No translation to speak";
pub const MSG_SPEECH_UNSUPPORTED: &str = "Speech synthesis not supported";
pub const MSG_SPEAKING: &str = "Speaking translation...";
pub const MSG_AUTO_ON: &str = "Auto-translate enabled";
pub const MSG_AUTO_OFF: &str = "Auto-translate disabled";
pub const MSG_ONLINE: &str = "Connection restored!";
pub const MSG_OFFLINE: &str = "You are offline. Some features may not work.";

/// Which text field a copy operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The source text field
    Source,
    /// The translated text field
    Translated,
}

/// Session construction parameters
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Source language preselected after the catalog loads, if present in it
    pub default_source_lang: String,
    /// Target language preselected after the catalog loads, if present in it
    pub default_target_lang: String,
    /// Quiet period before an auto-translate fires
    pub debounce_delay: Duration,
    /// Whether auto-translate starts enabled
    pub auto_translate: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            default_source_lang: "en".to_string(),
            default_target_lang: "es".to_string(),
            debounce_delay: Duration::from_millis(AUTO_TRANSLATE_DELAY_MS),
            auto_translate: false,
        }
    }
}

/// Controller for one translation session.
///
/// Owns all mutable session state and mediates between user intents and the
/// translation backend. Collaborators (backend client, notice sink,
/// clipboard, speech synthesizer) are injected, so the controller runs
/// identically against a live surface or against test doubles. Cloning is
/// cheap and yields a handle to the same session.
#[derive(Debug, Clone)]
pub struct SessionController {
    inner: Arc<ControllerInner>,
}

#[derive(Debug)]
struct ControllerInner {
    /// Remote translation service
    backend: Arc<dyn TranslationBackend>,
    /// Transient notice surface
    notices: Arc<dyn NoticeSink>,
    /// Clipboard surface
    clipboard: Arc<dyn Clipboard>,
    /// Speech playback surface
    speech: Arc<dyn SpeechSynthesizer>,
    /// Session state; critical sections never hold this across an await
    state: Mutex<SessionState>,
    /// Language catalog, populated once by initialize()
    catalog: RwLock<LanguageCatalog>,
    /// Pending auto-translate trigger
    timer: DebounceTimer,
    /// Sequence tag of the most recently issued translate request.
    /// A response is applied only while its tag is still the latest, so a
    /// stale response can never overwrite a fresher one.
    translate_seq: AtomicU64,
    /// Construction parameters
    options: SessionOptions,
}

impl SessionController {
    /// Create a controller with default options
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        notices: Arc<dyn NoticeSink>,
        clipboard: Arc<dyn Clipboard>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self::with_options(backend, notices, clipboard, speech, SessionOptions::default())
    }

    /// Create a controller with explicit options
    pub fn with_options(
        backend: Arc<dyn TranslationBackend>,
        notices: Arc<dyn NoticeSink>,
        clipboard: Arc<dyn Clipboard>,
        speech: Arc<dyn SpeechSynthesizer>,
        options: SessionOptions,
    ) -> Self {
        let state = SessionState {
            auto_translate_enabled: options.auto_translate,
            ..SessionState::new()
        };
        Self {
            inner: Arc::new(ControllerInner {
                backend,
                notices,
                clipboard,
                speech,
                state: Mutex::new(state),
                catalog: RwLock::new(LanguageCatalog::new()),
                timer: DebounceTimer::new(options.debounce_delay),
                translate_seq: AtomicU64::new(0),
                options,
            }),
        }
    }

    /// Fetch the language catalog and apply the default language pair.
    ///
    /// On failure the catalog stays empty and the selectors stay unset;
    /// initialization is not retried automatically.
    pub async fn initialize(&self) {
        match self.inner.backend.languages().await {
            Ok(entries) => {
                let catalog = LanguageCatalog::from_entries(entries);
                info!("Loaded {} languages", catalog.len());
                {
                    let mut state = self.inner.state.lock();
                    if catalog.contains(&self.inner.options.default_source_lang) {
                        state.source_lang = self.inner.options.default_source_lang.clone();
                    }
                    if catalog.contains(&self.inner.options.default_target_lang) {
                        state.target_lang = self.inner.options.default_target_lang.clone();
                    }
                }
                *self.inner.catalog.write() = catalog;
            }
            Err(e) => {
                warn!("Failed to load language catalog: {}", e);
                self.notify(ToastNotice::error(MSG_LANGUAGES_FAILED));
            }
        }
    }

    /// Translate the current source text between the selected languages.
    ///
    /// Validates before any network call, short-circuits identical language
    /// pairs, and always returns the session to a non-translating state no
    /// matter how the backend call ends.
    pub async fn translate(&self) {
        let (text, source_lang, target_lang) = {
            let state = self.inner.state.lock();
            (
                state.source_text.trim().to_string(),
                state.source_lang.clone(),
                state.target_lang.clone(),
            )
        };

        if text.is_empty() {
            self.notify(ToastNotice::error(MSG_EMPTY_TEXT));
            return;
        }
        if source_lang.is_empty() || target_lang.is_empty() {
            self.notify(ToastNotice::error(MSG_MISSING_LANGUAGES));
            return;
        }
        if source_lang == target_lang {
            self.inner.state.lock().translated_text = text;
            return;
        }

        let seq = self.inner.translate_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.lock().in_flight += 1;

        let result = self
            .inner
            .backend
            .translate(TranslateRequest {
                text,
                source_lang,
                target_lang,
            })
            .await;

        // Finalizer: in_flight comes back down on every path, so the
        // session can never stay stuck in a loading state.
        let notice = {
            let mut state = self.inner.state.lock();
            state.in_flight -= 1;
            match result {
                Ok(translation) => {
                    if seq == self.inner.translate_seq.load(Ordering::SeqCst) {
                        state.translated_text = translation.text;
                        Some(ToastNotice::success(MSG_TRANSLATED))
                    } else {
                        debug!("Discarding stale translate response (seq {})", seq);
                        None
                    }
                }
                Err(e) if e.is_transport() => {
                    warn!("Translation request failed: {}", e);
                    Some(ToastNotice::error(MSG_NETWORK_ERROR))
                }
                Err(e) => Some(ToastNotice::error(e.notice_message(MSG_TRANSLATE_FALLBACK))),
            }
        };
        if let Some(notice) = notice {
            self.notify(notice);
        }
    }

    /// Detect the language of the current source text and select it.
    ///
    /// Never touches the translating flag and never triggers a translation.
    pub async fn detect_language(&self) {
        let text = self.inner.state.lock().source_text.trim().to_string();
        if text.is_empty() {
            self.notify(ToastNotice::error(MSG_EMPTY_DETECT));
            return;
        }

        match self.inner.backend.detect(DetectRequest { text }).await {
            Ok(detection) => {
                // A selector can only take catalog values; an unknown code
                // leaves the current selection alone.
                if self.inner.catalog.read().contains(&detection.language) {
                    self.inner.state.lock().source_lang = detection.language.clone();
                } else {
                    warn!(
                        "Detected language '{}' is not in the catalog",
                        detection.language
                    );
                }
                self.notify(ToastNotice::info(format!(
                    "Detected language: {}",
                    detection.language_name
                )));
            }
            Err(e) if e.is_transport() => {
                warn!("Language detection failed: {}", e);
                self.notify(ToastNotice::error(MSG_DETECT_FAILED));
            }
            Err(e) => {
                self.notify(ToastNotice::error(e.notice_message(MSG_DETECT_FAILED)));
            }
        }
    }

    /// Exchange source and target languages together with their texts
    pub fn swap_languages(&self) {
        self.inner.state.lock().swap();
        self.notify(ToastNotice::info(MSG_SWAPPED));
    }

    /// Reset both text fields
    pub fn clear(&self) {
        self.inner.state.lock().clear();
        self.notify(ToastNotice::info(MSG_CLEARED));
    }

    /// Copy one of the text fields to the clipboard.
    ///
    /// Tries the primary clipboard first and the legacy fallback second;
    /// either path counts as success.
    pub fn copy(&self, target: CopyTarget) {
        let text = {
            let state = self.inner.state.lock();
            match target {
                CopyTarget::Source => state.source_text.clone(),
                CopyTarget::Translated => state.translated_text.clone(),
            }
        };
        if text.is_empty() {
            self.notify(ToastNotice::error(MSG_NO_TEXT_TO_COPY));
            return;
        }

        let outcome = self
            .inner
            .clipboard
            .write(&text)
            .or_else(|_| self.inner.clipboard.write_fallback(&text));
        match outcome {
            Ok(()) => self.notify(ToastNotice::success(MSG_COPIED)),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                self.notify(ToastNotice::error(MSG_COPY_FAILED));
            }
        }
    }

    /// Speak the current translation in the target language
    pub fn speak(&self) {
        let (text, target_lang) = {
            let state = self.inner.state.lock();
            (state.translated_text.clone(), state.target_lang.clone())
        };
        if text.is_empty() {
            self.notify(ToastNotice::error(MSG_NO_TRANSLATION_TO_SPEAK));
            return;
        }
        if !self.inner.speech.is_available() {
            self.notify(ToastNotice::error(MSG_SPEECH_UNSUPPORTED));
            return;
        }

        let request = SpeechRequest::for_translation(text, &target_lang);
        match self.inner.speech.speak(&request) {
            Ok(()) => self.notify(ToastNotice::info(MSG_SPEAKING)),
            Err(e) => {
                warn!("Speech playback failed: {}", e);
                self.notify(ToastNotice::error(MSG_SPEECH_UNSUPPORTED));
            }
        }
    }

    /// Flip the auto-translate flag; never triggers a translation itself
    pub fn toggle_auto_translate(&self) {
        let enabled = {
            let mut state = self.inner.state.lock();
            state.auto_translate_enabled = !state.auto_translate_enabled;
            state.auto_translate_enabled
        };
        if enabled {
            self.notify(ToastNotice::success(MSG_AUTO_ON));
        } else {
            self.inner.timer.cancel();
            self.notify(ToastNotice::info(MSG_AUTO_OFF));
        }
    }

    /// Record an edit to the source text and run the debounce policy
    pub fn on_source_text_changed(&self, text: impl Into<String>) {
        self.inner.state.lock().set_source_text(text);
        self.schedule_auto_translate();
    }

    /// Select a source language and run the debounce policy.
    ///
    /// Only catalog codes (or empty, to unset) are accepted.
    pub fn set_source_language(&self, code: &str) {
        if !code.is_empty() && !self.inner.catalog.read().contains(code) {
            warn!("Ignoring unknown source language '{}'", code);
            return;
        }
        self.inner.state.lock().source_lang = code.to_string();
        self.schedule_auto_translate();
    }

    /// Select a target language and run the debounce policy.
    ///
    /// Only catalog codes (or empty, to unset) are accepted.
    pub fn set_target_language(&self, code: &str) {
        if !code.is_empty() && !self.inner.catalog.read().contains(code) {
            warn!("Ignoring unknown target language '{}'", code);
            return;
        }
        self.inner.state.lock().target_lang = code.to_string();
        self.schedule_auto_translate();
    }

    /// Connectivity change notices from the network-status collaborator
    pub fn on_connectivity_changed(&self, online: bool) {
        if online {
            self.notify(ToastNotice::success(MSG_ONLINE));
        } else {
            self.notify(ToastNotice::error(MSG_OFFLINE));
        }
    }

    /// Display names of the selected pair, present iff both are selected
    pub fn translation_info(&self) -> Option<(String, String)> {
        let state = self.inner.state.lock();
        if !state.languages_selected() {
            return None;
        }
        let catalog = self.inner.catalog.read();
        Some((
            catalog.display_name(&state.source_lang),
            catalog.display_name(&state.target_lang),
        ))
    }

    /// Character count of the current source text
    pub fn char_count(&self) -> usize {
        self.inner.state.lock().char_count
    }

    /// Snapshot of the current session state
    pub fn state(&self) -> SessionState {
        self.inner.state.lock().clone()
    }

    /// Snapshot of the loaded language catalog
    pub fn catalog(&self) -> LanguageCatalog {
        self.inner.catalog.read().clone()
    }

    /// Whether an auto-translate trigger is currently pending
    pub fn is_auto_translate_armed(&self) -> bool {
        self.inner.timer.is_armed()
    }

    /// Auto-translate debounce policy.
    ///
    /// Cancels any pending trigger, then arms a fresh one only when the
    /// session is actually translatable. The armed trigger re-reads the
    /// state when it fires, so it always reflects the latest edit.
    fn schedule_auto_translate(&self) {
        let snapshot = self.inner.state.lock().clone();
        if !snapshot.auto_translate_enabled {
            return;
        }
        self.inner.timer.cancel();
        if snapshot.source_text.trim().is_empty()
            || !snapshot.languages_selected()
            || snapshot.source_lang == snapshot.target_lang
        {
            return;
        }
        let controller = self.clone();
        self.inner.timer.arm(async move {
            controller.translate().await;
        });
    }

    fn notify(&self, notice: ToastNotice) {
        self.inner.notices.notify(notice);
    }
}

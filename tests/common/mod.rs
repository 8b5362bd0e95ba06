/*!
 * Common test utilities for the lingopad test suite
 */

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lingopad::backend::mock::MockBackend;
use lingopad::errors::CapabilityError;
use lingopad::session::SessionController;
use lingopad::session::controller::SessionOptions;
use lingopad::speech::SpeechRequest;
use lingopad::surface::{Clipboard, NoticeKind, NoticeSink, SpeechSynthesizer, ToastNotice};

/// Initialize test logging once; repeated calls are no-ops
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Notice sink that records every notice it is handed
#[derive(Debug, Default)]
pub struct RecordingNotices {
    notices: Mutex<Vec<ToastNotice>>,
}

impl RecordingNotices {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices.lock().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<ToastNotice> {
        self.notices.lock().last().cloned()
    }

    pub fn count_of_kind(&self, kind: NoticeKind) -> usize {
        self.notices.lock().iter().filter(|n| n.kind == kind).count()
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: ToastNotice) {
        self.notices.lock().push(notice);
    }
}

/// Clipboard double with configurable primary/fallback outcomes
#[derive(Debug)]
pub struct RecordingClipboard {
    primary_works: bool,
    fallback_works: bool,
    primary_calls: AtomicUsize,
    fallback_calls: AtomicUsize,
    written: Mutex<Option<String>>,
}

impl RecordingClipboard {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::new(true, true))
    }

    /// Primary write fails; the legacy fallback succeeds
    pub fn fallback_only() -> Arc<Self> {
        Arc::new(Self::new(false, true))
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self::new(false, false))
    }

    fn new(primary_works: bool, fallback_works: bool) -> Self {
        Self {
            primary_works,
            fallback_works,
            primary_calls: AtomicUsize::new(0),
            fallback_calls: AtomicUsize::new(0),
            written: Mutex::new(None),
        }
    }

    pub fn primary_calls(&self) -> usize {
        self.primary_calls.load(Ordering::SeqCst)
    }

    pub fn fallback_calls(&self) -> usize {
        self.fallback_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.primary_calls() + self.fallback_calls()
    }

    pub fn written(&self) -> Option<String> {
        self.written.lock().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write(&self, text: &str) -> Result<(), CapabilityError> {
        self.primary_calls.fetch_add(1, Ordering::SeqCst);
        if self.primary_works {
            *self.written.lock() = Some(text.to_string());
            Ok(())
        } else {
            Err(CapabilityError::Failed("primary clipboard failed".to_string()))
        }
    }

    fn write_fallback(&self, text: &str) -> Result<(), CapabilityError> {
        self.fallback_calls.fetch_add(1, Ordering::SeqCst);
        if self.fallback_works {
            *self.written.lock() = Some(text.to_string());
            Ok(())
        } else {
            Err(CapabilityError::Unsupported("clipboard fallback".to_string()))
        }
    }
}

/// Speech double recording the requests it receives
#[derive(Debug)]
pub struct RecordingSpeech {
    available: bool,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl RecordingSpeech {
    pub fn available() -> Arc<Self> {
        Arc::new(Self {
            available: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            available: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().clone()
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    fn speak(&self, request: &SpeechRequest) -> Result<(), CapabilityError> {
        if !self.available {
            return Err(CapabilityError::Unsupported("speech".to_string()));
        }
        self.requests.lock().push(request.clone());
        Ok(())
    }
}

/// All recorded surfaces of one test session
pub struct TestSurfaces {
    pub notices: Arc<RecordingNotices>,
    pub clipboard: Arc<RecordingClipboard>,
    pub speech: Arc<RecordingSpeech>,
}

impl TestSurfaces {
    pub fn new() -> Self {
        Self {
            notices: RecordingNotices::new(),
            clipboard: RecordingClipboard::working(),
            speech: RecordingSpeech::available(),
        }
    }
}

/// Build a controller with default options against the given backend
pub fn controller_with(backend: Arc<MockBackend>) -> (SessionController, TestSurfaces) {
    controller_with_options(backend, SessionOptions::default())
}

/// Build a controller with explicit options against the given backend
pub fn controller_with_options(
    backend: Arc<MockBackend>,
    options: SessionOptions,
) -> (SessionController, TestSurfaces) {
    let surfaces = TestSurfaces::new();
    let controller = SessionController::with_options(
        backend,
        surfaces.notices.clone(),
        surfaces.clipboard.clone(),
        surfaces.speech.clone(),
        options,
    );
    (controller, surfaces)
}

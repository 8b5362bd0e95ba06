use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounce delay before an auto-translate fires
pub const AUTO_TRANSLATE_DELAY_MS: u64 = 1000;

/// A cancellable scheduled callback with at most one pending trigger.
///
/// Arming always aborts the previously armed handle first, so rapid
/// re-arming within the delay window collapses into a single firing after
/// the quiet period.
#[derive(Debug)]
pub struct DebounceTimer {
    /// Delay between arming and firing
    delay: Duration,
    /// Handle of the pending task, if one is armed
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceTimer {
    /// Create a timer with the given delay
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            handle: Mutex::new(None),
        }
    }

    /// Cancel any pending trigger and schedule `action` after the delay
    pub fn arm<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        *self.handle.lock() = Some(task);
    }

    /// Cancel the pending trigger, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.handle.lock().take() {
            previous.abort();
        }
    }

    /// Whether a trigger is currently pending
    pub fn is_armed(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTO_TRANSLATE_DELAY_MS))
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

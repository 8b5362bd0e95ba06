use std::mem;

/// Mutable state of one translation session.
///
/// Owned by the controller and touched only under its lock; the pending
/// auto-translate timer handle lives next to it in the controller rather
/// than inside the state so the pure transitions here stay trivially
/// testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Text the user wants translated
    pub source_text: String,
    /// Most recently applied translation
    pub translated_text: String,
    /// Selected source language code, empty when unset
    pub source_lang: String,
    /// Selected target language code, empty when unset
    pub target_lang: String,
    /// Number of outstanding translate requests
    pub in_flight: u32,
    /// Whether edits schedule a debounced translation
    pub auto_translate_enabled: bool,
    /// Character count of the source text, maintained on every edit
    pub char_count: usize,
}

impl SessionState {
    /// Create an empty session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a translate request is currently outstanding
    pub fn is_translating(&self) -> bool {
        self.in_flight > 0
    }

    /// Whether both languages are selected
    pub fn languages_selected(&self) -> bool {
        !self.source_lang.is_empty() && !self.target_lang.is_empty()
    }

    /// Exchange source and target languages together with source and
    /// translated text. Applying this twice restores the original state.
    pub fn swap(&mut self) {
        mem::swap(&mut self.source_lang, &mut self.target_lang);
        mem::swap(&mut self.source_text, &mut self.translated_text);
        self.char_count = self.source_text.chars().count();
    }

    /// Reset both text fields
    pub fn clear(&mut self) {
        self.source_text.clear();
        self.translated_text.clear();
        self.char_count = 0;
    }

    /// Replace the source text and recompute the character count
    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
        self.char_count = self.source_text.chars().count();
    }
}

/*!
 * Speech playback parameters.
 *
 * Maps target language codes to the BCP-47 locale tags the speech engine
 * expects and carries the fixed playback tuning used for translations.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default locale when the target language has no mapping
pub const DEFAULT_LOCALE: &str = "en-US";

/// Playback rate for spoken translations
pub const SPEECH_RATE: f32 = 0.9;
/// Playback pitch for spoken translations
pub const SPEECH_PITCH: f32 = 1.0;
/// Playback volume for spoken translations
pub const SPEECH_VOLUME: f32 = 0.8;

/// Fixed language code to locale tag table
static LOCALE_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "en-US"),
        ("es", "es-ES"),
        ("fr", "fr-FR"),
        ("de", "de-DE"),
        ("it", "it-IT"),
        ("pt", "pt-PT"),
        ("ru", "ru-RU"),
        ("ja", "ja-JP"),
        ("ko", "ko-KR"),
        ("zh", "zh-CN"),
        ("ar", "ar-SA"),
        ("hi", "hi-IN"),
    ])
});

/// Locale tag for a language code, defaulting to en-US for unmapped codes
pub fn locale_for_language(code: &str) -> &'static str {
    LOCALE_TABLE.get(code).copied().unwrap_or(DEFAULT_LOCALE)
}

/// A fully parameterized utterance handed to the speech collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// BCP-47 locale tag
    pub locale: &'static str,
    /// Playback rate
    pub rate: f32,
    /// Playback pitch
    pub pitch: f32,
    /// Playback volume
    pub volume: f32,
}

impl SpeechRequest {
    /// Build a request for a translation in the given target language
    pub fn for_translation(text: impl Into<String>, target_lang: &str) -> Self {
        Self {
            text: text.into(),
            locale: locale_for_language(target_lang),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }
    }
}

/*!
 * Tests for speech locale mapping and playback parameters
 */

use lingopad::speech::{DEFAULT_LOCALE, SpeechRequest, locale_for_language};

/// Every mapped language resolves to its locale tag
#[test]
fn test_localeForLanguage_withMappedCodes_shouldResolveLocales() {
    let expected = [
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
    ];
    for (code, locale) in expected {
        assert_eq!(locale_for_language(code), locale, "code: {}", code);
    }
}

/// Unmapped codes fall back to en-US
#[test]
fn test_localeForLanguage_withUnmappedCode_shouldDefaultToEnUs() {
    assert_eq!(locale_for_language("nl"), DEFAULT_LOCALE);
    assert_eq!(locale_for_language(""), DEFAULT_LOCALE);
    assert_eq!(locale_for_language("xx"), DEFAULT_LOCALE);
}

/// Translation requests carry the fixed playback tuning
#[test]
fn test_forTranslation_shouldCarryFixedTuning() {
    let request = SpeechRequest::for_translation("Hola", "es");
    assert_eq!(request.text, "Hola");
    assert_eq!(request.locale, "es-ES");
    assert_eq!(request.rate, 0.9);
    assert_eq!(request.pitch, 1.0);
    assert_eq!(request.volume, 0.8);
}

/*!
 * Tests for the pure session state transitions
 */

use lingopad::SessionState;

/// Swap exchanges both pairs together
#[test]
fn test_swap_withPopulatedState_shouldExchangeBothPairs() {
    let mut state = SessionState::new();
    state.source_lang = "en".to_string();
    state.target_lang = "es".to_string();
    state.set_source_text("Hello");
    state.translated_text = "Hola".to_string();

    state.swap();

    assert_eq!(state.source_lang, "es");
    assert_eq!(state.target_lang, "en");
    assert_eq!(state.source_text, "Hola");
    assert_eq!(state.translated_text, "Hello");
    assert_eq!(state.char_count, 4);
}

/// Swap applied twice is the identity
#[test]
fn test_swap_appliedTwice_shouldBeIdentity() {
    let mut state = SessionState::new();
    state.source_lang = "en".to_string();
    state.target_lang = "es".to_string();
    state.set_source_text("Hello");
    state.translated_text = "Hola".to_string();
    let original = state.clone();

    state.swap();
    state.swap();

    assert_eq!(state, original);
}

/// Swap with one side empty still round-trips
#[test]
fn test_swap_withEmptyTranslation_shouldMoveTextToTranslation() {
    let mut state = SessionState::new();
    state.set_source_text("Hello");

    state.swap();

    assert!(state.source_text.is_empty());
    assert_eq!(state.translated_text, "Hello");
    assert_eq!(state.char_count, 0);
}

/// Clear wipes the texts but not the language selection
#[test]
fn test_clear_shouldResetTextsAndCount() {
    let mut state = SessionState::new();
    state.source_lang = "en".to_string();
    state.set_source_text("Hello");
    state.translated_text = "Hola".to_string();

    state.clear();

    assert!(state.source_text.is_empty());
    assert!(state.translated_text.is_empty());
    assert_eq!(state.char_count, 0);
    assert_eq!(state.source_lang, "en");
}

/// The character count is a count of chars, not bytes
#[test]
fn test_setSourceText_withMultibyteText_shouldCountChars() {
    let mut state = SessionState::new();
    state.set_source_text("こんにちは");
    assert_eq!(state.char_count, 5);
}

/// The translating flag tracks outstanding requests
#[test]
fn test_isTranslating_shouldFollowInFlightCount() {
    let mut state = SessionState::new();
    assert!(!state.is_translating());
    state.in_flight = 1;
    assert!(state.is_translating());
    state.in_flight = 0;
    assert!(!state.is_translating());
}

/// Both languages must be selected
#[test]
fn test_languagesSelected_shouldRequireBothCodes() {
    let mut state = SessionState::new();
    assert!(!state.languages_selected());
    state.source_lang = "en".to_string();
    assert!(!state.languages_selected());
    state.target_lang = "es".to_string();
    assert!(state.languages_selected());
}

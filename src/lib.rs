/*!
 * # lingopad
 *
 * A Rust front end for a text translation service.
 *
 * ## Features
 *
 * - Session controller keeping UI state, pending requests and the
 *   auto-translate timer consistent with each other
 * - HTTP client for the translation backend (languages, translate,
 *   detect, health)
 * - Debounced auto-translate with at most one pending trigger
 * - Stale-response protection for overlapping translate requests
 * - Swap, clear, copy, speech playback and character count affordances
 * - Transient toast notices for every outcome
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `backend`: Translation backend clients:
 *   - `backend::http`: reqwest-based client for a live backend
 *   - `backend::mock`: scriptable backend for tests
 * - `session`: Session state and the controller:
 *   - `session::state`: mutable session state and pure transitions
 *   - `session::debounce`: cancellable auto-translate timer
 *   - `session::controller`: the session controller
 * - `surface`: Collaborator traits for the rendering surface
 *   (notices, clipboard, speech) and their terminal implementations
 * - `language_catalog`: Supported-language catalog utilities
 * - `speech`: Locale mapping and playback parameters
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod backend;
pub mod errors;
pub mod language_catalog;
pub mod session;
pub mod speech;
pub mod surface;

// Re-export main types for easier usage
pub use app_config::Config;
pub use backend::TranslationBackend;
pub use errors::{BackendError, CapabilityError, SessionError};
pub use language_catalog::LanguageCatalog;
pub use session::{CopyTarget, SessionController, SessionState};
pub use surface::{NoticeKind, NoticeSink, ToastNotice};

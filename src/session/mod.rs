/*!
 * Translation session management.
 *
 * - `state`: the mutable session state and its pure transitions
 * - `debounce`: the cancellable auto-translate timer
 * - `controller`: the session controller mediating between user intents
 *   and the translation backend
 */

pub mod controller;
pub mod debounce;
pub mod state;

pub use controller::{CopyTarget, SessionController};
pub use state::SessionState;

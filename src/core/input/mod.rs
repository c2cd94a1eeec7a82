//=========================================================================
// Input
//
// Backend-independent keyboard types shared by window implementations
// and game states.
//
// Responsibilities:
// - Name physical keys in a portable way (`KeyCode`)
// - Track held keys and one-shot "processed" marks (`KeyTracker`)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod key_tracker;

//=== Public API ==========================================================

pub use event::{KeyCode, KeyEvent};
pub use key_tracker::KeyTracker;

//=========================================================================
// Platform Subsystem
//
// The window collaborator: presentation surface, input queue and display
// settings, behind a backend-neutral trait.
//
// Architecture:
// ```text
//  Engine main loop (single thread)
//  ┌────────────────────────────────────────────┐
//  │  State::process_input ─ key queries ──┐    │
//  │  State::render ─ clear / resolve ─────┤    │
//  │                 swap / poll ──────────┤    │
//  │                                       ↓    │
//  │                          dyn Window (this) │
//  │                            └─ WinitWindow  │
//  │                                 ├─ pump_app_events
//  │                                 └─ KeyTracker
//  └────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Engine owns the loop**: the backend is pumped once per frame from
//   `poll_events`, so the frame order stays input → update → render
// - **Key state lives in the window**: processed marks survive state
//   transitions, so a key held across a switch does not fire twice
//
//=========================================================================

//=== Submodules ==========================================================

mod key_mapping;
mod winit_window;

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

//=== Internal Imports ====================================================

use crate::core::input::KeyCode;

//=== Public API ==========================================================

pub use winit_window::WinitWindow;

/// Multisample counts accepted by [`Window::set_number_of_samples`].
pub const SUPPORTED_SAMPLE_COUNTS: [u8; 4] = [1, 2, 4, 8];

/// Shared handle to the window, held by the engine and every state.
pub type SharedWindow = Rc<RefCell<dyn Window>>;

//=== Window Trait ========================================================

/// Presentation surface and input source consumed by the engine.
///
/// All calls happen on the engine thread. Implementations own the OS
/// window, its event queue and the multisample render target.
pub trait Window {
    /// Opens the window. Returns `false` if the backend cannot start.
    fn initialize(&mut self) -> bool;

    /// Returns `true` once a close was requested (by input or the OS).
    fn should_close(&self) -> bool;

    fn set_should_close(&mut self, should_close: bool);

    /// Returns `true` while `key` is held.
    fn key_is_pressed(&self, key: KeyCode) -> bool;

    /// Returns `true` if the current press of `key` was marked processed.
    fn key_has_been_processed(&self, key: KeyCode) -> bool;

    /// Marks the current press of `key` as processed until it is released.
    fn set_key_as_processed(&mut self, key: KeyCode);

    /// Shows (and frees) or hides (and confines) the cursor.
    fn enable_cursor(&mut self, enabled: bool);

    fn is_full_screen(&self) -> bool;

    fn set_full_screen(&mut self, full_screen: bool);

    /// Selects the multisample count, one of [`SUPPORTED_SAMPLE_COUNTS`].
    fn set_number_of_samples(&mut self, samples: u8);

    fn number_of_samples(&self) -> u8;

    /// Clears the multisample target and binds it for drawing.
    fn clear_and_bind_multisample_framebuffer(&mut self);

    /// Resolves the multisample target into the presentable image.
    fn generate_anti_aliased_image(&mut self);

    /// Presents the resolved image.
    fn swap_buffers(&mut self);

    /// Drains pending OS events into the input state.
    fn poll_events(&mut self);
}

/// Returns `true` if `samples` is a supported multisample count.
pub fn is_supported_sample_count(samples: u8) -> bool {
    SUPPORTED_SAMPLE_COUNTS.contains(&samples)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_sample_counts() {
        for samples in [1, 2, 4, 8] {
            assert!(is_supported_sample_count(samples));
        }
        for samples in [0, 3, 16] {
            assert!(!is_supported_sample_count(samples));
        }
    }
}

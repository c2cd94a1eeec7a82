//=========================================================================
// Game States
//
// The concrete modes registered with the state machine.
//
// Architecture:
// ```text
//   "menu" ──Enter──> "play" ──P──> "pause"
//     ↑                 ↑             │
//     │                 └─────P───────┤
//     └──────────Backspace────────────┘
// ```
//
// Every state handles the display keys (F fullscreen, 1/2/4/8 samples)
// and renders through `draw_frame`, which fixes the per-frame sequence:
// bind target → record draws → resolve → present → poll.
//
//=========================================================================

//=== Submodules ==========================================================

mod menu;
mod pause;
mod play;

//=== External Dependencies ===============================================

use log::info;

//=== Internal Imports ====================================================

use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::Renderer;
use crate::platform::Window;

//=== Public API ==========================================================

pub use menu::MenuState;
pub use pause::PauseState;
pub use play::PlayState;

/// Registration names of the built-in states.
pub const MENU: &str = "menu";
pub const PLAY: &str = "play";
pub const PAUSE: &str = "pause";

/// Sample-count keys, checked in this order; at most one applies per frame.
const SAMPLE_KEYS: [(KeyCode, u8); 4] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit8, 8),
];

//=== Key Helpers =========================================================

/// Returns `true` exactly once per press of `key`.
///
/// The press is marked processed on the window, so holding the key over
/// many frames (or across a state switch) fires only on the first one.
pub fn key_pressed_once(window: &mut dyn Window, key: KeyCode) -> bool {
    if window.key_is_pressed(key) && !window.key_has_been_processed(key) {
        window.set_key_as_processed(key);
        return true;
    }
    false
}

/// Applies the display keys shared by every state.
///
/// - F: toggles fullscreen; the cursor is hidden in fullscreen
/// - 1 / 2 / 4 / 8: selects the multisample count
pub fn handle_display_keys(window: &mut dyn Window) {
    if key_pressed_once(window, KeyCode::KeyF) {
        let full_screen = !window.is_full_screen();
        window.set_full_screen(full_screen);
        window.enable_cursor(!full_screen);
        info!(target: "state", "Fullscreen {}", if full_screen { "enabled" } else { "disabled" });
    }

    for (key, samples) in SAMPLE_KEYS {
        if key_pressed_once(window, key) {
            window.set_number_of_samples(samples);
            info!(target: "state", "Anti-aliasing set to {}x", samples);
            break;
        }
    }
}

/// Cursor policy for menu-like states: visible only when windowed.
fn show_cursor_when_windowed(window: &mut dyn Window) {
    let full_screen = window.is_full_screen();
    window.enable_cursor(!full_screen);
}

//=== Frame Presentation ==================================================

/// Runs one render pass with `draw` recording the state's objects.
fn draw_frame(ctx: &GlobalContext, draw: impl FnOnce(&mut Renderer)) {
    ctx.window.borrow_mut().clear_and_bind_multisample_framebuffer();
    {
        let mut renderer = ctx.renderer.borrow_mut();
        renderer.begin_frame();
        draw(&mut *renderer);
        renderer.finish_frame();
    }

    let mut window = ctx.window.borrow_mut();
    window.generate_anti_aliased_image();
    window.swap_buffers();
    window.poll_events();
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedWindow;

    //=====================================================================
    // One-shot Key Tests
    //=====================================================================

    #[test]
    fn key_pressed_once_fires_once_per_press() {
        let mut window = ScriptedWindow::new();
        window.press(KeyCode::Enter);

        assert!(key_pressed_once(&mut window, KeyCode::Enter));
        assert!(!key_pressed_once(&mut window, KeyCode::Enter));

        window.release(KeyCode::Enter);
        assert!(!key_pressed_once(&mut window, KeyCode::Enter));

        window.press(KeyCode::Enter);
        assert!(key_pressed_once(&mut window, KeyCode::Enter));
    }

    #[test]
    fn held_f_toggles_fullscreen_once() {
        let mut window = ScriptedWindow::new();
        window.press(KeyCode::KeyF);

        for _ in 0..3 {
            handle_display_keys(&mut window);
        }

        assert!(window.full_screen);
        assert!(!window.cursor_enabled);
        assert_eq!(window.count("set_full_screen"), 1);
    }

    #[test]
    fn second_f_press_returns_to_windowed() {
        let mut window = ScriptedWindow::new();

        window.press(KeyCode::KeyF);
        handle_display_keys(&mut window);
        window.release(KeyCode::KeyF);
        window.press(KeyCode::KeyF);
        handle_display_keys(&mut window);

        assert!(!window.full_screen);
        assert!(window.cursor_enabled);
    }

    #[test]
    fn sample_keys_apply_one_per_frame() {
        let mut window = ScriptedWindow::new();
        window.press(KeyCode::Digit2);
        window.press(KeyCode::Digit8);

        handle_display_keys(&mut window);
        assert_eq!(window.samples, 2);

        handle_display_keys(&mut window);
        assert_eq!(window.samples, 8);

        handle_display_keys(&mut window);
        assert_eq!(window.count("set_number_of_samples"), 2);
    }
}

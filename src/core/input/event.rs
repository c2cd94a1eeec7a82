//=========================================================================
// Input Event Types
//
// Portable key identifiers and key transitions, independent of the
// window backend that produces them.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    KeyEvent (this module)
//         ↓
//    KeyTracker (pressed / processed bookkeeping)
//         ↓
//    State::process_input queries
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyA` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the window backend.
    Unidentified,
}

//=== KeyEvent ============================================================

/// A single key transition reported by the window backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Down(KeyCode),
    Up(KeyCode),
}

impl KeyEvent {
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::Down(key) | Self::Up(key) => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_exposes_key() {
        assert_eq!(KeyEvent::Down(KeyCode::KeyF).key(), KeyCode::KeyF);
        assert_eq!(KeyEvent::Up(KeyCode::Escape).key(), KeyCode::Escape);
    }

    #[test]
    fn key_codes_hash_consistently() {
        use std::collections::HashSet;
        let set: HashSet<_> = [KeyCode::Digit1, KeyCode::Digit1, KeyCode::Digit2]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}

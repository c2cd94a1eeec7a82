//=========================================================================
// Key Tracker
//=========================================================================
//
// Persistent key state plus the "processed" marks used for one-shot
// actions.
//
// Architecture:
//   KeyEvent → process_events() → keys_down / keys_processed → query
//
// A key stays "pressed" for as long as it is held. One-shot handlers
// pair `is_key_pressed` with `has_been_processed` / `set_processed`, so a
// held key fires its action once. Releasing the key clears the mark.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, KeyEvent};

//=== KeyTracker ==========================================================

/// Tracks held keys and which held keys have already triggered an action.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,

    //--- One-shot marks (cleared on release) -----------------------------
    keys_processed: HashSet<KeyCode>,
}

impl KeyTracker {
    /// Creates a tracker with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Applies a batch of key transitions in order.
    pub fn process_events(&mut self, events: &[KeyEvent]) {
        for event in events {
            self.process_event(*event);
        }
    }

    /// Applies one key transition.
    pub fn process_event(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(KeyCode::Unidentified) | KeyEvent::Up(KeyCode::Unidentified) => {}

            KeyEvent::Down(key) => {
                self.keys_down.insert(key);
            }

            KeyEvent::Up(key) => {
                // Only a real release re-arms the one-shot action
                if self.keys_down.remove(&key) {
                    self.keys_processed.remove(&key);
                }
            }
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while `key` is held.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if the current press of `key` already triggered an action.
    pub fn has_been_processed(&self, key: KeyCode) -> bool {
        self.keys_processed.contains(&key)
    }

    /// Marks the current press of `key` as handled.
    pub fn set_processed(&mut self, key: KeyCode) {
        self.keys_processed.insert(key);
    }

    /// Iterates over all held keys.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    /// Forgets every held key and mark (focus loss).
    pub fn reset(&mut self) {
        self.keys_down.clear();
        self.keys_processed.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

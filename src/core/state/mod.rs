//=========================================================================
// State System
//=========================================================================
//
// Manages mutually exclusive application modes (menu, play, pause, ...).
//
// Architecture:
//   StateMachine
//     ├─ states: HashMap<String, Box<dyn State>>
//     ├─ current: Option<String>
//     └─ requests: Receiver<String>  ←─ StateSwitcher (held by states)
//
// Flow (per frame):
//   process_input → apply requests → update → apply requests → render
//
//=========================================================================

//=== Module Declarations =================================================

mod state_machine;

//=== Public API ==========================================================

pub use state_machine::{StateMachine, StateSwitcher};

//=== State Trait =========================================================

/// One exclusive application mode.
///
/// States are registered with the [`StateMachine`] under a name and stay
/// alive for the whole process; only one is current at a time. States are
/// constructed with the shared handles they need (window, camera,
/// renderer, caches) and a [`StateSwitcher`] for requesting transitions.
///
/// # Minimal Implementation
///
/// `enter` and `exit` have empty defaults:
///
/// ```rust
/// # use arcadia_engine::prelude::*;
/// struct Idle;
///
/// impl State for Idle {
///     fn process_input(&mut self, _delta_time: f32) {}
///     fn update(&mut self, _delta_time: f32) {}
///     fn render(&self) {}
/// }
/// ```
pub trait State {
    /// Called once per transition into this state.
    fn enter(&mut self) {}

    /// Polls input for this frame. Must not block.
    fn process_input(&mut self, delta_time: f32);

    /// Advances the simulation owned by this state by `delta_time` seconds.
    fn update(&mut self, delta_time: f32);

    /// Draws the state and presents the frame.
    fn render(&self);

    /// Called once per transition out of this state.
    fn exit(&mut self) {}
}

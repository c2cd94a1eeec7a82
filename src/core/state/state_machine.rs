//=========================================================================
// State Machine
//=========================================================================
//
// Owns every registered State and dispatches per-frame calls to the
// current one.
//
// States are stored in a HashMap by name. Transitions are named switches
// (any state to any registered state). A state asks for a transition by
// sending a name through its StateSwitcher; the machine applies pending
// requests right after the dispatched call returns, so the rest of the
// frame already runs against the new state.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, warn};

//=== Internal Dependencies ===============================================

use super::State;
use crate::error::UnknownStateError;

//=== StateSwitcher =======================================================

/// Handle through which a state requests a transition.
///
/// Cloneable and cheap; obtained from [`StateMachine::switcher`] before
/// the states are constructed.
#[derive(Debug, Clone)]
pub struct StateSwitcher {
    sender: Sender<String>,
}

impl StateSwitcher {
    /// Requests a switch to `name`.
    ///
    /// The transition is applied as soon as the currently dispatched
    /// state call returns. Unknown names are reported by the machine as
    /// an [`UnknownStateError`] at that point.
    pub fn request(&self, name: impl Into<String>) {
        let name = name.into();
        debug!(target: "state", "Transition to {:?} requested", name);

        if self.sender.send(name).is_err() {
            warn!(target: "state", "State machine dropped, transition request ignored");
        }
    }
}

//=== StateMachine ========================================================

/// Finite state machine over named [`State`]s.
///
/// After [`initialize`](Self::initialize) succeeds exactly one registered
/// state is current. Dispatch before initialization is a logged no-op.
pub struct StateMachine {
    states: HashMap<String, Box<dyn State>>,
    current: Option<String>,
    requests: Receiver<String>,
    switcher: StateSwitcher,
}

impl StateMachine {
    //--- Construction -----------------------------------------------------

    /// Creates an empty, uninitialized machine.
    pub fn new() -> Self {
        let (sender, requests) = unbounded();
        Self {
            states: HashMap::new(),
            current: None,
            requests,
            switcher: StateSwitcher { sender },
        }
    }

    /// Returns a handle states can use to request transitions.
    pub fn switcher(&self) -> StateSwitcher {
        self.switcher.clone()
    }

    //--- Initialization ---------------------------------------------------

    /// Installs the full state set and enters `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] if `initial` is not a key of
    /// `states`. The machine is left untouched in that case.
    pub fn initialize(
        &mut self,
        states: HashMap<String, Box<dyn State>>,
        initial: &str,
    ) -> Result<(), UnknownStateError> {
        if !states.contains_key(initial) {
            error!(target: "state", "Initial state {:?} is not registered", initial);
            return Err(UnknownStateError::new(initial));
        }

        // Leave whatever was running before the set is replaced
        if let Some(previous) = self.current.take() {
            if let Some(state) = self.states.get_mut(&previous) {
                state.exit();
            }
        }

        debug!(
            target: "state",
            "Installing {} states, initial state {:?}",
            states.len(),
            initial
        );
        self.states = states;
        self.enter(initial);
        Ok(())
    }

    //--- Transitions ------------------------------------------------------

    /// Switches to the state registered as `name`.
    ///
    /// The current state's `exit` completes before the new state's
    /// `enter` starts. Switching to the current state re-enters it.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] if `name` is not registered; the
    /// current state is then unchanged and no hook is called.
    pub fn switch_to(&mut self, name: &str) -> Result<(), UnknownStateError> {
        if !self.states.contains_key(name) {
            error!(target: "state", "Attempted to switch to unregistered state {:?}", name);
            return Err(UnknownStateError::new(name));
        }

        if let Some(previous) = self.current.take() {
            debug!(target: "state", "Exiting state {:?}", previous);
            if let Some(state) = self.states.get_mut(&previous) {
                state.exit();
            }
        }

        self.enter(name);
        Ok(())
    }

    //--- Per-frame Dispatch -----------------------------------------------

    /// Forwards input processing to the current state.
    pub fn process_input_in_current_state(&mut self, delta_time: f32) -> Result<(), UnknownStateError> {
        let Some(name) = self.current.as_deref() else {
            warn!(target: "state", "process_input dispatched before initialization");
            return Ok(());
        };

        if let Some(state) = self.states.get_mut(name) {
            state.process_input(delta_time);
        }

        self.apply_requested_transitions()
    }

    /// Forwards the simulation step to the current state.
    pub fn update_current_state(&mut self, delta_time: f32) -> Result<(), UnknownStateError> {
        let Some(name) = self.current.as_deref() else {
            warn!(target: "state", "update dispatched before initialization");
            return Ok(());
        };

        if let Some(state) = self.states.get_mut(name) {
            state.update(delta_time);
        }

        self.apply_requested_transitions()
    }

    /// Forwards rendering to the current state.
    pub fn render_current_state(&mut self) -> Result<(), UnknownStateError> {
        let Some(name) = self.current.as_deref() else {
            warn!(target: "state", "render dispatched before initialization");
            return Ok(());
        };

        if let Some(state) = self.states.get(name) {
            state.render();
        }

        self.apply_requested_transitions()
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the current state, `None` before initialization.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns `true` if a state is registered under `name`.
    pub fn is_registered(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    //--- Internal Helpers -------------------------------------------------

    fn enter(&mut self, name: &str) {
        debug!(target: "state", "Entering state {:?}", name);
        self.current = Some(name.to_owned());

        if let Some(state) = self.states.get_mut(name) {
            state.enter();
        }
    }

    /// Applies queued transition requests in FIFO order.
    ///
    /// Stops at the first unknown name; later requests stay queued.
    fn apply_requested_transitions(&mut self) -> Result<(), UnknownStateError> {
        while let Ok(name) = self.requests.try_recv() {
            self.switch_to(&name)?;
        }
        Ok(())
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use arcadia_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::{EngineError, InitializationError, ResourceLoadError, UnknownStateError};

// Shared context
pub use crate::core::globals::GlobalContext;

// State system
pub use crate::core::state::{State, StateMachine, StateSwitcher};

// Resources
pub use crate::core::resources::{Loader, ResourceCache};

// Input and window
pub use crate::core::input::KeyCode;
pub use crate::platform::{SharedWindow, Window};

// Drawing
pub use crate::core::camera::{Camera, CameraSettings};
pub use crate::core::render::{GameObject2D, Line, ModelInstance, Renderer, Wall};

//=========================================================================
// Core Systems
//
// Engine-level systems that do not depend on a windowing backend.
//
// Responsibilities:
// - Load-once asset storage (`resources`)
// - Mutually exclusive application modes (`state`)
// - Portable key state (`input`)
// - Shared handles given to states (`globals`)
// - Delta time, camera and draw recording (`clock`, `camera`, `render`)
//
// Notes:
// Everything here runs on the engine thread. Shared objects are held
// through `Rc<RefCell<_>>`; the state machine guarantees that only the
// active state borrows them during a frame.
//
//=========================================================================

pub mod camera;
pub mod clock;
pub mod globals;
pub mod input;
pub mod render;
pub mod resources;
pub mod state;

//=========================================================================
// Global Engine State
//=========================================================================
//
// Shared handles created once at startup and given to every state.
//
// Architecture:
//   Engine builds: window → camera → shaders → renderer → caches
//   GlobalContext: Rc clones of all of them (cheap to clone per state)
//
//=========================================================================

//=== Module Declarations =================================================

mod global_context;

//=== Public API ==========================================================

pub use global_context::GlobalContext;

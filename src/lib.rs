//=========================================================================
// Arcadia Engine: Library Root
//
// This crate defines the public API surface of the Arcadia Engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the reusable systems (resource cache, state machine, input,
//   camera, renderer) for custom states
// - Keep the window collaborator behind the `platform::Window` trait so
//   alternate backends and test doubles can drive the same loop
//
// Typical usage:
// ```no_run
// use arcadia_engine::EngineBuilder;
//
// fn main() -> Result<(), arcadia_engine::error::EngineError> {
//     EngineBuilder::new().build()?.run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the backend-independent systems (resources, states,
// input, camera, rendering). `platform` holds the window trait and its
// Winit implementation. `states` holds the built-in game modes.
//
pub mod core;
pub mod error;
pub mod platform;
pub mod prelude;
pub mod states;

//--- Internal Modules ----------------------------------------------------
//
// `engine` defines the composition root and the main loop.
//
mod engine;

#[cfg(test)]
mod testing;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};

//=========================================================================
// Rendering
//
// Draw recording for the active state plus the drawable objects states
// own.
//
// Architecture:
//   State::render
//     └─ Renderer (shared)
//          ├─ 2D: textured / colored quads, lines, walls  (ortho, pixels)
//          └─ 3D: model instances                         (camera)
//
//=========================================================================

//=== Module Declarations =================================================

mod objects;
mod renderer;

//=== Public API ==========================================================

pub use objects::{GameObject2D, Line, ModelInstance, Wall};
pub use renderer::{DrawCommand, Renderer};

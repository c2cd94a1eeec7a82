//=========================================================================
// Renderer
//=========================================================================
//
// Records the draw calls issued by the active state into a frame.
//
// Lifecycle (per frame):
//   begin_frame() → render_*() ... → finish_frame() → last_frame()
//
// The renderer owns no GPU state. It resolves what is drawn, with which
// shader and transform, and hands the finished list over for
// presentation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use glam::{Mat4, Vec2, Vec3, Vec4};
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::objects::{GameObject2D, Line, ModelInstance, Wall};
use crate::core::camera::Camera;
use crate::core::resources::{Model, ShaderProgram};

//=== DrawCommand =========================================================

/// One recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    TexturedQuad {
        shader: Rc<ShaderProgram>,
        model: Mat4,
        tint: Vec4,
        texture_size: (u32, u32),
    },
    ColoredQuad {
        shader: Rc<ShaderProgram>,
        model: Mat4,
        color: Vec4,
    },
    Line {
        shader: Rc<ShaderProgram>,
        start: Vec2,
        end: Vec2,
        color: Vec3,
    },
    Model {
        model: Rc<Model>,
        transform: Mat4,
        view: Mat4,
        projection: Mat4,
    },
}

//=== Renderer ============================================================

pub struct Renderer {
    texture_shader: Rc<ShaderProgram>,
    color_shader: Rc<ShaderProgram>,
    projection: Mat4,
    viewport: (u32, u32),

    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_rendered: u64,
}

impl Renderer {
    //--- Construction -----------------------------------------------------

    /// Creates the renderer and uploads the shared 2D uniforms.
    ///
    /// Both shaders get an orthographic `projection` spanning the
    /// viewport with the origin at its centre; the textured shader also
    /// gets its `image` sampler bound to unit 0.
    ///
    /// # Panics
    ///
    /// Panics if either viewport dimension is zero.
    pub fn new(texture_shader: Rc<ShaderProgram>, color_shader: Rc<ShaderProgram>, viewport: (u32, u32)) -> Self {
        let (width, height) = viewport;
        assert!(width > 0 && height > 0, "Viewport must be non-empty, got {}x{}", width, height);

        let (half_w, half_h) = (width as f32 / 2.0, height as f32 / 2.0);
        let projection = Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, -1.0, 1.0);

        texture_shader.set_int("image", 0);
        texture_shader.set_mat4("projection", projection);
        color_shader.set_mat4("projection", projection);

        Self {
            texture_shader,
            color_shader,
            projection,
            viewport,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_rendered: 0,
        }
    }

    //--- Frame Lifecycle --------------------------------------------------

    /// Starts a new frame, discarding anything left unfinished.
    pub fn begin_frame(&mut self) {
        if !self.pending.is_empty() {
            warn!(target: "render", "Dropping {} draw calls from an unfinished frame", self.pending.len());
        }
        self.pending.clear();
    }

    /// Completes the frame; its commands become [`last_frame`](Self::last_frame).
    pub fn finish_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_rendered += 1;
        trace!(target: "render", "Frame {} finished with {} draw calls", self.frames_rendered, self.last_frame.len());
    }

    //--- 2D Drawing -------------------------------------------------------

    /// Draws `object` with its texture. Objects without one are skipped.
    pub fn render_textured_quad(&mut self, object: &GameObject2D) {
        let Some(texture) = &object.texture else {
            warn!(target: "render", "Textured quad without a texture skipped");
            return;
        };

        self.pending.push(DrawCommand::TexturedQuad {
            shader: Rc::clone(&self.texture_shader),
            model: object.model_matrix(),
            tint: object.color,
            texture_size: (texture.width(), texture.height()),
        });
    }

    pub fn render_colored_quad(&mut self, object: &GameObject2D) {
        self.pending.push(DrawCommand::ColoredQuad {
            shader: Rc::clone(&self.color_shader),
            model: object.model_matrix(),
            color: object.color,
        });
    }

    pub fn render_line(&mut self, line: &Line) {
        self.pending.push(DrawCommand::Line {
            shader: Rc::clone(&self.color_shader),
            start: line.start,
            end: line.end,
            color: line.color,
        });
    }

    /// Draws the four edges of `wall`.
    pub fn render_wall(&mut self, wall: &Wall) {
        for edge in wall.edges() {
            self.render_line(&edge);
        }
    }

    //--- 3D Drawing -------------------------------------------------------

    pub fn render_model(&mut self, instance: &ModelInstance, camera: &Camera) {
        self.pending.push(DrawCommand::Model {
            model: Rc::clone(&instance.model),
            transform: instance.model_matrix(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
        });
    }

    //--- Queries ----------------------------------------------------------

    /// Commands of the most recently finished frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Drawable Objects
//=========================================================================
//
// Plain data the states own and hand to the renderer each frame.
//
// 2D objects live in pixel space centred on the viewport (origin in the
// middle, +Y up). Model instances live in world space.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

//=== Internal Dependencies ===============================================

use crate::core::resources::{Model, Texture};

//=== GameObject2D ========================================================

/// Axis-aligned sprite or flat quad, positioned by its centre.
#[derive(Debug, Clone)]
pub struct GameObject2D {
    pub texture: Option<Rc<Texture>>,
    pub position: Vec2,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
    /// Tint for textured quads, fill for colored quads.
    pub color: Vec4,
    pub velocity: Vec2,
}

impl GameObject2D {
    /// Creates a textured object.
    pub fn textured(texture: Rc<Texture>, position: Vec2, rotation: f32, width: f32, height: f32) -> Self {
        Self {
            texture: Some(texture),
            position,
            rotation,
            width,
            height,
            color: Vec4::ONE,
            velocity: Vec2::ZERO,
        }
    }

    /// Creates an untextured object filled with `color`.
    pub fn colored(color: Vec4, position: Vec2, width: f32, height: f32) -> Self {
        Self {
            texture: None,
            position,
            rotation: 0.0,
            width,
            height,
            color,
            velocity: Vec2::ZERO,
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    /// Transform from the unit quad (-0.5..0.5) to viewport pixels.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.width, self.height, 1.0),
            Quat::from_rotation_z(self.rotation.to_radians()),
            self.position.extend(0.0),
        )
    }

    /// Returns `true` if the axis-aligned bounds of both objects overlap.
    pub fn overlaps(&self, other: &GameObject2D) -> bool {
        let distance = (self.position - other.position).abs();
        let reach = self.half_extents() + other.half_extents();
        distance.x < reach.x && distance.y < reach.y
    }
}

//=== Line ================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Vec3,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2, color: Vec3) -> Self {
        Self { start, end, color }
    }
}

//=== Wall ================================================================

/// Rectangular arena outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub color: Vec3,
    pub bottom_left: Vec2,
    pub top_right: Vec2,
}

impl Wall {
    pub fn new(color: Vec3, bottom_left: Vec2, top_right: Vec2) -> Self {
        Self {
            color,
            bottom_left: bottom_left.min(top_right),
            top_right: bottom_left.max(top_right),
        }
    }

    /// Wall hugging the edges of a `width` x `height` viewport.
    pub fn around_viewport(width: u32, height: u32, color: Vec3) -> Self {
        let half = Vec2::new(width as f32, height as f32) * 0.5;
        Self::new(color, -half, half)
    }

    /// Edges in order bottom, right, top, left.
    pub fn edges(&self) -> [Line; 4] {
        let (bl, tr) = (self.bottom_left, self.top_right);
        let br = Vec2::new(tr.x, bl.y);
        let tl = Vec2::new(bl.x, tr.y);
        [
            Line::new(bl, br, self.color),
            Line::new(br, tr, self.color),
            Line::new(tr, tl, self.color),
            Line::new(tl, bl, self.color),
        ]
    }

    pub fn width(&self) -> f32 {
        self.top_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> f32 {
        self.top_right.y - self.bottom_left.y
    }
}

//=== ModelInstance =======================================================

/// A placed copy of a shared [`Model`].
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub model: Rc<Model>,
    pub position: Vec3,
    pub scale: f32,
    pub velocity: Vec3,
}

impl ModelInstance {
    pub fn new(model: Rc<Model>, position: Vec3, scale: f32) -> Self {
        Self {
            model,
            position,
            scale,
            velocity: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

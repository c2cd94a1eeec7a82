//=========================================================================
// Play State
//=========================================================================
//
// The game itself: a paddle at the bottom of the arena and a ball that
// bounces off the walls and the paddle.
//
// Simulation runs in 2D viewport pixels. The ball is drawn as a 3D model
// placed so that it lines up with its 2D position on the z = 0 plane
// seen by the camera.
//
// Keys: Left/Right (or A/D) move the paddle, P pauses, plus the shared
// display keys.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3, Vec4};
use log::debug;

//=== Internal Dependencies ===============================================

use super::{draw_frame, handle_display_keys, key_pressed_once, PAUSE};
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::{GameObject2D, ModelInstance, Wall};
use crate::core::resources::ModelLoader;
use crate::core::state::{State, StateSwitcher};
use crate::error::ResourceLoadError;

//--- Tuning --------------------------------------------------------------

const BALL_MODEL_KEY: &str = "ball";
const BALL_MODEL_PATH: &str = "models/ball.obj";

/// Pixels per second.
const PADDLE_SPEED: f32 = 600.0;
const PADDLE_SIZE: Vec2 = Vec2::new(150.0, 20.0);
/// Gap between the paddle and the bottom wall.
const PADDLE_MARGIN: f32 = 30.0;

const BALL_DIAMETER: f32 = 20.0;
/// Pixels per second.
const BALL_START_VELOCITY: Vec2 = Vec2::new(250.0, 350.0);

//=== PlayState ===========================================================

pub struct PlayState {
    ctx: GlobalContext,
    switcher: StateSwitcher,
    wall: Wall,
    paddle: GameObject2D,
    ball: GameObject2D,
    ball_model: ModelInstance,
    /// World units covered by one viewport pixel at z = 0.
    world_per_pixel: f32,
}

impl PlayState {
    /// Builds the arena and fetches the ball model through the model cache.
    pub fn new(ctx: GlobalContext, switcher: StateSwitcher) -> Result<Self, ResourceLoadError> {
        let model = ctx
            .models
            .borrow_mut()
            .get(BALL_MODEL_KEY, &ModelLoader, ctx.resource_path(BALL_MODEL_PATH))?;

        let (width, height) = ctx.renderer.borrow().viewport();
        let wall = Wall::around_viewport(width, height, Vec3::ONE);

        let world_per_pixel = {
            let camera = ctx.camera.borrow();
            let visible_half_height = camera.position().z * (camera.fovy().to_radians() / 2.0).tan();
            visible_half_height / (height as f32 / 2.0)
        };

        let paddle = GameObject2D::colored(
            Vec4::new(0.2, 0.6, 1.0, 1.0),
            Self::paddle_start(&wall),
            PADDLE_SIZE.x,
            PADDLE_SIZE.y,
        );
        let mut ball = GameObject2D::colored(Vec4::ONE, Vec2::ZERO, BALL_DIAMETER, BALL_DIAMETER);
        ball.velocity = BALL_START_VELOCITY;

        let ball_model = ModelInstance::new(model, Vec3::ZERO, BALL_DIAMETER / 2.0 * world_per_pixel);

        Ok(Self {
            ctx,
            switcher,
            wall,
            paddle,
            ball,
            ball_model,
            world_per_pixel,
        })
    }

    fn paddle_start(wall: &Wall) -> Vec2 {
        Vec2::new(0.0, wall.bottom_left.y + PADDLE_MARGIN + PADDLE_SIZE.y / 2.0)
    }

    fn reset_ball(&mut self) {
        debug!(target: "state", "Ball lost, serving again");
        self.ball.position = Vec2::ZERO;
        self.ball.velocity = BALL_START_VELOCITY;
    }

    //--- Simulation -------------------------------------------------------

    fn move_paddle(&mut self, delta_time: f32) {
        let half_width = self.paddle.half_extents().x;
        let min_x = self.wall.bottom_left.x + half_width;
        let max_x = self.wall.top_right.x - half_width;

        let x = self.paddle.position.x + self.paddle.velocity.x * delta_time;
        self.paddle.position.x = x.clamp(min_x, max_x);
    }

    fn move_ball(&mut self, delta_time: f32) {
        self.ball.position += self.ball.velocity * delta_time;

        let radius = self.ball.half_extents();
        let min = self.wall.bottom_left + radius;
        let max = self.wall.top_right - radius;

        if self.ball.position.x < min.x || self.ball.position.x > max.x {
            self.ball.position.x = self.ball.position.x.clamp(min.x, max.x);
            self.ball.velocity.x = -self.ball.velocity.x;
        }
        if self.ball.position.y > max.y {
            self.ball.position.y = max.y;
            self.ball.velocity.y = -self.ball.velocity.y.abs();
        }

        // Only a ball falling onto the paddle bounces
        if self.ball.velocity.y < 0.0 && self.ball.overlaps(&self.paddle) {
            self.ball.position.y = self.paddle.position.y + self.paddle.half_extents().y + radius.y;
            self.ball.velocity.y = self.ball.velocity.y.abs();
        }

        if self.ball.position.y < min.y {
            self.reset_ball();
        }
    }

    fn sync_ball_model(&mut self) {
        self.ball_model.position = self.ball.position.extend(0.0) * self.world_per_pixel;
    }
}

impl State for PlayState {
    fn enter(&mut self) {
        self.ctx.window.borrow_mut().enable_cursor(false);
    }

    fn process_input(&mut self, _delta_time: f32) {
        let mut window = self.ctx.window.borrow_mut();

        if key_pressed_once(&mut *window, KeyCode::KeyP) {
            self.switcher.request(PAUSE);
        }

        handle_display_keys(&mut *window);

        let left = window.key_is_pressed(KeyCode::ArrowLeft) || window.key_is_pressed(KeyCode::KeyA);
        let right = window.key_is_pressed(KeyCode::ArrowRight) || window.key_is_pressed(KeyCode::KeyD);
        self.paddle.velocity.x = match (left, right) {
            (true, false) => -PADDLE_SPEED,
            (false, true) => PADDLE_SPEED,
            _ => 0.0,
        };
    }

    fn update(&mut self, delta_time: f32) {
        self.move_paddle(delta_time);
        self.move_ball(delta_time);
        self.sync_ball_model();
    }

    fn render(&self) {
        let camera = self.ctx.camera.borrow();
        draw_frame(&self.ctx, |renderer| {
            renderer.render_wall(&self.wall);
            renderer.render_colored_quad(&self.paddle);
            renderer.render_model(&self.ball_model, &camera);
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Pause State
//=========================================================================
//
// Dims the screen while the game is suspended. The play state keeps its
// simulation untouched while paused.
//
// Keys: P resumes, Backspace returns to the menu, plus the shared
// display keys.
//
//=========================================================================

use glam::{Vec2, Vec3, Vec4};

use super::{draw_frame, handle_display_keys, key_pressed_once, show_cursor_when_windowed, MENU, PLAY};
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::{GameObject2D, Wall};
use crate::core::state::{State, StateSwitcher};

const OVERLAY_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.5);

//=== PauseState ==========================================================

pub struct PauseState {
    ctx: GlobalContext,
    switcher: StateSwitcher,
    overlay: GameObject2D,
    wall: Wall,
}

impl PauseState {
    pub fn new(ctx: GlobalContext, switcher: StateSwitcher) -> Self {
        let (width, height) = ctx.renderer.borrow().viewport();
        let overlay = GameObject2D::colored(OVERLAY_COLOR, Vec2::ZERO, width as f32, height as f32);
        let wall = Wall::around_viewport(width, height, Vec3::ONE);

        Self {
            ctx,
            switcher,
            overlay,
            wall,
        }
    }
}

impl State for PauseState {
    fn enter(&mut self) {
        show_cursor_when_windowed(&mut *self.ctx.window.borrow_mut());
    }

    fn process_input(&mut self, _delta_time: f32) {
        let mut window = self.ctx.window.borrow_mut();

        if key_pressed_once(&mut *window, KeyCode::KeyP) {
            self.switcher.request(PLAY);
        } else if key_pressed_once(&mut *window, KeyCode::Backspace) {
            self.switcher.request(MENU);
        }

        handle_display_keys(&mut *window);
    }

    fn update(&mut self, _delta_time: f32) {}

    fn render(&self) {
        draw_frame(&self.ctx, |renderer| {
            renderer.render_wall(&self.wall);
            renderer.render_colored_quad(&self.overlay);
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

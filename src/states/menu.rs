//=========================================================================
// Menu State
//=========================================================================
//
// Title screen: the logo inside the arena outline.
//
// Keys: Escape closes the window, Enter starts a game, plus the shared
// display keys.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

use glam::{Vec2, Vec3};
use log::info;

//=== Internal Dependencies ===============================================

use super::{draw_frame, handle_display_keys, key_pressed_once, show_cursor_when_windowed, PLAY};
use crate::core::globals::GlobalContext;
use crate::core::input::KeyCode;
use crate::core::render::{GameObject2D, Wall};
use crate::core::resources::TextureLoader;
use crate::core::state::{State, StateSwitcher};
use crate::error::ResourceLoadError;

const LOGO_PATH: &str = "textures/awesomeface.png";
const LOGO_SIZE: f32 = 100.0;

//=== MenuState ===========================================================

pub struct MenuState {
    ctx: GlobalContext,
    switcher: StateSwitcher,
    logo: GameObject2D,
    wall: Wall,
}

impl MenuState {
    /// Builds the menu and loads its logo.
    ///
    /// The logo texture is loaded unmanaged: the menu is its only owner.
    pub fn new(ctx: GlobalContext, switcher: StateSwitcher) -> Result<Self, ResourceLoadError> {
        let texture = ctx
            .textures
            .borrow()
            .get_unmanaged(&TextureLoader, ctx.resource_path(LOGO_PATH))?;
        let logo = GameObject2D::textured(Rc::new(texture), Vec2::ZERO, 0.0, LOGO_SIZE, LOGO_SIZE);

        let (width, height) = ctx.renderer.borrow().viewport();
        let wall = Wall::around_viewport(width, height, Vec3::ONE);

        Ok(Self {
            ctx,
            switcher,
            logo,
            wall,
        })
    }
}

impl State for MenuState {
    fn enter(&mut self) {
        show_cursor_when_windowed(&mut *self.ctx.window.borrow_mut());
    }

    fn process_input(&mut self, _delta_time: f32) {
        let mut window = self.ctx.window.borrow_mut();

        if window.key_is_pressed(KeyCode::Escape) {
            info!(target: "state", "Escape pressed in menu, closing");
            window.set_should_close(true);
        }

        if key_pressed_once(&mut *window, KeyCode::Enter) {
            self.switcher.request(PLAY);
        }

        handle_display_keys(&mut *window);
    }

    fn update(&mut self, _delta_time: f32) {}

    fn render(&self) {
        draw_frame(&self.ctx, |renderer| {
            renderer.render_textured_quad(&self.logo);
            renderer.render_wall(&self.wall);
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::core::render::DrawCommand;
    use crate::core::state::StateMachine;
    use crate::testing::{fixture_dir, test_context, test_context_in, CallLog, RecordingState, ScriptedWindow};

    fn menu_machine(window: &Rc<RefCell<ScriptedWindow>>) -> (StateMachine, GlobalContext) {
        let ctx = test_context(window);
        let mut machine = StateMachine::new();
        let switcher = machine.switcher();
        let log = CallLog::default();

        let mut states: HashMap<String, Box<dyn State>> = HashMap::new();
        states.insert("menu".into(), Box::new(MenuState::new(ctx.clone(), switcher.clone()).unwrap()));
        states.insert("play".into(), Box::new(RecordingState::new("play", &log, switcher)));
        machine.initialize(states, "menu").unwrap();
        (machine, ctx)
    }

    #[test]
    fn logo_texture_is_not_cached() {
        let window = ScriptedWindow::new().shared();
        let ctx = test_context(&window);

        let menu = MenuState::new(ctx.clone(), StateMachine::new().switcher()).unwrap();

        assert!(ctx.textures.borrow().is_empty());
        assert!(menu.logo.texture.is_some());
    }

    #[test]
    fn missing_logo_is_a_load_error() {
        let window = ScriptedWindow::new().shared();
        let ctx = test_context_in(&window, fixture_dir("menu_no_assets"));

        let err = MenuState::new(ctx, StateMachine::new().switcher()).err().unwrap();
        assert_eq!(err.key, crate::error::UNMANAGED_KEY);
    }

    #[test]
    fn enter_shows_cursor_only_when_windowed() {
        let window = ScriptedWindow::new().shared();
        let ctx = test_context(&window);
        let mut menu = MenuState::new(ctx, StateMachine::new().switcher()).unwrap();

        menu.enter();
        assert!(window.borrow().cursor_enabled);

        window.borrow_mut().full_screen = true;
        menu.enter();
        assert!(!window.borrow().cursor_enabled);
    }

    #[test]
    fn escape_requests_close() {
        let window = ScriptedWindow::new().shared();
        let (mut machine, _ctx) = menu_machine(&window);

        window.borrow_mut().press(KeyCode::Escape);
        machine.process_input_in_current_state(0.016).unwrap();

        assert!(window.borrow().should_close);
    }

    #[test]
    fn enter_key_switches_to_play() {
        let window = ScriptedWindow::new().shared();
        let (mut machine, _ctx) = menu_machine(&window);

        window.borrow_mut().press(KeyCode::Enter);
        machine.process_input_in_current_state(0.016).unwrap();

        assert_eq!(machine.current_state_name(), Some("play"));
    }

    #[test]
    fn held_f_over_three_frames_toggles_fullscreen_once() {
        let window = ScriptedWindow::new().shared();
        let (mut machine, _ctx) = menu_machine(&window);

        window.borrow_mut().press(KeyCode::KeyF);
        for _ in 0..3 {
            machine.process_input_in_current_state(0.016).unwrap();
        }

        let window = window.borrow();
        assert!(window.full_screen);
        assert!(!window.cursor_enabled);
        assert_eq!(window.count("set_full_screen"), 1);
    }

    #[test]
    fn render_follows_frame_sequence() {
        let window = ScriptedWindow::new().shared();
        let (mut machine, ctx) = menu_machine(&window);
        window.borrow_mut().calls.clear();

        machine.render_current_state().unwrap();

        assert_eq!(
            window.borrow().calls,
            vec![
                "clear_and_bind_multisample_framebuffer",
                "generate_anti_aliased_image",
                "swap_buffers",
                "poll_events"
            ]
        );
        let renderer = ctx.renderer.borrow();
        let frame = renderer.last_frame();
        assert_eq!(frame.len(), 5);
        assert!(matches!(frame[0], DrawCommand::TexturedQuad { .. }));
    }
}

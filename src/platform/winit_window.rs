//=========================================================================
// Winit Window
//=========================================================================
//
// `Window` implementation on top of Winit, driven by pumping the event
// loop once per frame instead of handing control to `run_app`.
//
// Lifecycle:
//   new(title, size) → initialize() → [poll_events() per frame] → drop
//
// `initialize` creates the event loop and pumps until `resumed` has
// created the OS window (or creation failed).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{CursorGrabMode, Fullscreen, Window as OsWindow, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use super::key_mapping::key_event_from_winit;
use super::{is_supported_sample_count, Window};
use crate::core::input::{KeyCode, KeyTracker};

/// Pumps attempted by `initialize` before giving up on window creation.
const MAX_STARTUP_PUMPS: usize = 64;

//=== WinitWindow =========================================================

/// Desktop window backed by Winit.
///
/// # Thread Safety
///
/// Not Send/Sync: must stay on the thread that created it (the main
/// thread on macOS/iOS).
pub struct WinitWindow {
    /// Created by `initialize`.
    event_loop: Option<EventLoop<()>>,

    /// Receives Winit callbacks and owns all window-side state.
    handler: WindowHandler,
}

impl WinitWindow {
    //--- Construction -----------------------------------------------------

    /// Describes the window; nothing is opened until `initialize`.
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        let attributes = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height));

        Self {
            event_loop: None,
            handler: WindowHandler::new(attributes),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Delivers all pending OS events without blocking.
    fn pump(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler) {
            info!(target: "platform", "Event loop exited with code {}", code);
            self.handler.should_close = true;
        }
    }

    fn os_window(&self) -> Option<&OsWindow> {
        self.handler.window.as_ref()
    }
}

impl Window for WinitWindow {
    fn initialize(&mut self) -> bool {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                error!(target: "platform", "Event loop creation failed: {}", e);
                return false;
            }
        };
        event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop = Some(event_loop);

        for _ in 0..MAX_STARTUP_PUMPS {
            self.pump();

            if self.handler.window.is_some() {
                return true;
            }
            if self.handler.creation_failed || self.handler.should_close {
                break;
            }
        }

        error!(target: "platform", "Window was not created");
        false
    }

    fn should_close(&self) -> bool {
        self.handler.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        if should_close {
            info!(target: "platform", "Window close requested");
        }
        self.handler.should_close = should_close;
    }

    fn key_is_pressed(&self, key: KeyCode) -> bool {
        self.handler.keys.is_key_pressed(key)
    }

    fn key_has_been_processed(&self, key: KeyCode) -> bool {
        self.handler.keys.has_been_processed(key)
    }

    fn set_key_as_processed(&mut self, key: KeyCode) {
        self.handler.keys.set_processed(key);
    }

    fn enable_cursor(&mut self, enabled: bool) {
        self.handler.cursor_enabled = enabled;

        let Some(window) = self.os_window() else {
            return;
        };

        window.set_cursor_visible(enabled);

        let mode = if enabled {
            CursorGrabMode::None
        } else {
            CursorGrabMode::Confined
        };

        // Confined is unsupported on some platforms (macOS); fall back to Locked
        if let Err(e) = window.set_cursor_grab(mode) {
            debug!(target: "platform", "Cursor grab {:?} failed: {}", mode, e);
            if !enabled {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::Locked) {
                    warn!(target: "platform", "Cursor cannot be grabbed: {}", e);
                }
            }
        }
    }

    fn is_full_screen(&self) -> bool {
        self.handler.full_screen
    }

    fn set_full_screen(&mut self, full_screen: bool) {
        self.handler.full_screen = full_screen;

        if let Some(window) = self.os_window() {
            window.set_fullscreen(full_screen.then_some(Fullscreen::Borderless(None)));
        }
    }

    fn set_number_of_samples(&mut self, samples: u8) {
        if !is_supported_sample_count(samples) {
            warn!(target: "platform", "Unsupported sample count {}, keeping {}", samples, self.handler.samples);
            return;
        }
        self.handler.samples = samples;
    }

    fn number_of_samples(&self) -> u8 {
        self.handler.samples
    }

    fn clear_and_bind_multisample_framebuffer(&mut self) {
        trace!(target: "platform::render", "Bind {}x multisample target", self.handler.samples);
        self.handler.frame_open = true;
    }

    fn generate_anti_aliased_image(&mut self) {
        if !self.handler.frame_open {
            warn!(target: "platform::render", "Resolve requested without a bound multisample target");
            return;
        }
        trace!(target: "platform::render", "Resolve {}x multisample target", self.handler.samples);
        self.handler.frame_open = false;
    }

    fn swap_buffers(&mut self) {
        if let Some(window) = self.os_window() {
            window.pre_present_notify();
            window.request_redraw();
        }
    }

    fn poll_events(&mut self) {
        self.pump();
    }
}

//=== WindowHandler =======================================================

/// Receives Winit callbacks during `pump_app_events`.
struct WindowHandler {
    attributes: WindowAttributes,

    /// OS window handle (None until `resumed()` called).
    window: Option<OsWindow>,

    keys: KeyTracker,
    should_close: bool,
    creation_failed: bool,
    full_screen: bool,
    cursor_enabled: bool,
    samples: u8,
    frame_open: bool,
}

impl WindowHandler {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            keys: KeyTracker::new(),
            should_close: false,
            creation_failed: false,
            full_screen: false,
            cursor_enabled: true,
            samples: 4,
            frame_open: false,
        }
    }
}

impl ApplicationHandler for WindowHandler {
    /// Creates the window on first resume (mobile may resume repeatedly).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.set_cursor_visible(self.cursor_enabled);
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.creation_failed = true;
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested by the OS");
                self.should_close = true;
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if key_event.repeat {
                    return;
                }
                match key_event_from_winit(key_event.physical_key, key_event.state) {
                    Some(event) => self.keys.process_event(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::Focused(false) => {
                // Releases are not delivered while unfocused
                self.keys.reset();
            }

            _ => {}
        }
    }
}

//=========================================================================
// Test Support
//=========================================================================
//
// Doubles shared by the unit tests: a scripted window, a state that
// records its hooks, and per-test fixture directories.
//
//=========================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use crate::core::camera::{Camera, CameraSettings};
use crate::core::globals::GlobalContext;
use crate::core::input::{KeyCode, KeyEvent, KeyTracker};
use crate::core::render::Renderer;
use crate::core::resources::ShaderProgram;
use crate::core::state::{State, StateSwitcher};
use crate::platform::{is_supported_sample_count, SharedWindow, Window};

//=== Fixtures ============================================================

/// Returns a fresh, empty directory unique to this process and `name`.
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("arcadia_engine_{}", std::process::id()))
        .join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Directory holding the assets shipped with the crate.
pub fn shipped_resources() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Context over `window` with inline shaders and the shipped assets.
pub fn test_context(window: &Rc<RefCell<ScriptedWindow>>) -> GlobalContext {
    test_context_in(window, shipped_resources())
}

/// Context over `window` resolving assets against `resource_root`.
pub fn test_context_in(window: &Rc<RefCell<ScriptedWindow>>, resource_root: PathBuf) -> GlobalContext {
    let shader = || Rc::new(ShaderProgram::from_sources("void main() {}", "void main() {}").unwrap());
    let renderer = Renderer::new(shader(), shader(), (1280, 720));
    let camera = Camera::new(CameraSettings::default(), 1280.0 / 720.0);
    let shared: SharedWindow = window.clone();
    GlobalContext::new(shared, camera, renderer, resource_root)
}

//=== CallLog =============================================================

/// Ordered record of hook calls, shared between states of one test.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Rc<RefCell<Vec<String>>>,
    deltas: Rc<RefCell<Vec<f32>>>,
}

impl CallLog {
    pub fn push(&self, entry: String) {
        self.entries.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn deltas(&self) -> Vec<f32> {
        self.deltas.borrow().clone()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.deltas.borrow_mut().clear();
    }
}

//=== RecordingState ======================================================

/// State that logs `"<name>.<hook>"` for every call it receives.
pub struct RecordingState {
    name: String,
    log: CallLog,
    switcher: StateSwitcher,
    switch_on_input: Option<String>,
}

impl RecordingState {
    pub fn new(name: &str, log: &CallLog, switcher: StateSwitcher) -> Self {
        Self {
            name: name.to_owned(),
            log: log.clone(),
            switcher,
            switch_on_input: None,
        }
    }

    /// Requests a switch to `target` from every `process_input` call.
    pub fn switch_on_input(mut self, target: &str) -> Self {
        self.switch_on_input = Some(target.to_owned());
        self
    }

    fn record(&self, hook: &str) {
        self.log.push(format!("{}.{}", self.name, hook));
    }
}

impl State for RecordingState {
    fn enter(&mut self) {
        self.record("enter");
    }

    fn process_input(&mut self, _delta_time: f32) {
        self.record("process_input");
        if let Some(target) = &self.switch_on_input {
            self.switcher.request(target.clone());
        }
    }

    fn update(&mut self, delta_time: f32) {
        self.record("update");
        self.log.deltas.borrow_mut().push(delta_time);
    }

    fn render(&self) {
        self.record("render");
    }

    fn exit(&mut self) {
        self.record("exit");
    }
}

//=== ScriptedWindow ======================================================

/// In-memory [`Window`] driven by a script of key events.
///
/// Each `poll_events` call applies the next scripted batch. Once
/// `frame_budget` frames were presented the window asks to close.
pub struct ScriptedWindow {
    pub keys: KeyTracker,
    pub calls: Vec<&'static str>,
    pub full_screen: bool,
    pub cursor_enabled: bool,
    pub samples: u8,
    pub should_close: bool,
    pub frames_presented: usize,
    pub frame_budget: Option<usize>,
    pub initialize_succeeds: bool,
    script: VecDeque<Vec<KeyEvent>>,
}

impl ScriptedWindow {
    pub fn new() -> Self {
        Self {
            keys: KeyTracker::new(),
            calls: Vec::new(),
            full_screen: false,
            cursor_enabled: true,
            samples: 4,
            should_close: false,
            frames_presented: 0,
            frame_budget: None,
            initialize_succeeds: true,
            script: VecDeque::new(),
        }
    }

    pub fn with_frame_budget(mut self, frames: usize) -> Self {
        self.frame_budget = Some(frames);
        self
    }

    pub fn failing() -> Self {
        Self {
            initialize_succeeds: false,
            ..Self::new()
        }
    }

    /// Queues a batch of key events; each `poll_events` delivers one batch.
    pub fn script(&mut self, events: Vec<KeyEvent>) -> &mut Self {
        self.script.push_back(events);
        self
    }

    pub fn press(&mut self, key: KeyCode) {
        self.keys.process_event(KeyEvent::Down(key));
    }

    pub fn release(&mut self, key: KeyCode) {
        self.keys.process_event(KeyEvent::Up(key));
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|&&c| c == call).count()
    }

    /// Wraps the window for sharing, keeping a concrete handle for asserts.
    pub fn shared(self) -> Rc<RefCell<ScriptedWindow>> {
        Rc::new(RefCell::new(self))
    }
}

impl Window for ScriptedWindow {
    fn initialize(&mut self) -> bool {
        self.calls.push("initialize");
        self.initialize_succeeds
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.calls.push("set_should_close");
        self.should_close = should_close;
    }

    fn key_is_pressed(&self, key: KeyCode) -> bool {
        self.keys.is_key_pressed(key)
    }

    fn key_has_been_processed(&self, key: KeyCode) -> bool {
        self.keys.has_been_processed(key)
    }

    fn set_key_as_processed(&mut self, key: KeyCode) {
        self.keys.set_processed(key);
    }

    fn enable_cursor(&mut self, enabled: bool) {
        self.calls.push("enable_cursor");
        self.cursor_enabled = enabled;
    }

    fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    fn set_full_screen(&mut self, full_screen: bool) {
        self.calls.push("set_full_screen");
        self.full_screen = full_screen;
    }

    fn set_number_of_samples(&mut self, samples: u8) {
        self.calls.push("set_number_of_samples");
        if is_supported_sample_count(samples) {
            self.samples = samples;
        }
    }

    fn number_of_samples(&self) -> u8 {
        self.samples
    }

    fn clear_and_bind_multisample_framebuffer(&mut self) {
        self.calls.push("clear_and_bind_multisample_framebuffer");
    }

    fn generate_anti_aliased_image(&mut self) {
        self.calls.push("generate_anti_aliased_image");
    }

    fn swap_buffers(&mut self) {
        self.calls.push("swap_buffers");
        self.frames_presented += 1;
        if self.frame_budget.is_some_and(|budget| self.frames_presented >= budget) {
            self.should_close = true;
        }
    }

    fn poll_events(&mut self) {
        self.calls.push("poll_events");
        if let Some(batch) = self.script.pop_front() {
            self.keys.process_events(&batch);
        }
    }
}

//=========================================================================
// Arcadia Engine
//
// Main entry point and composition root.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Main Loop]
//         │                          │
//         ├─ with_title()            ├─ window (shared)
//         ├─ with_viewport()         ├─ StateMachine
//         ├─ with_resource_root()    │    └─ menu / play / pause
//         ├─ with_initial_state()    └─ GlobalContext
//         └─ with_camera()                (camera, renderer, caches)
// ```
//
// Startup order:
//   window → camera → shaders (cache) → renderer → state machine
//   → states → machine.initialize(states, initial)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::camera::{Camera, CameraSettings};
use crate::core::clock::FrameClock;
use crate::core::globals::GlobalContext;
use crate::core::render::Renderer;
use crate::core::resources::{ResourceCache, ShaderLoader, ShaderProgram, ShaderSourcePaths};
use crate::core::state::{State, StateMachine};
use crate::error::{EngineError, InitializationError};
use crate::platform::{SharedWindow, Window, WinitWindow};
use crate::states::{self, MenuState, PauseState, PlayState};

/// Cache keys and file stems of the two shaders the renderer needs.
const TEXTURE_SHADER: &str = "texture_2D";
const COLOR_SHADER: &str = "color_2D";

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Arcadia"
/// - **Viewport**: 1280 x 720 pixels
/// - **Resource root**: `resources`
/// - **Initial state**: "menu"
/// - **Camera**: [`CameraSettings::default`]
///
/// # Examples
///
/// ```no_run
/// use arcadia_engine::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .with_title("Breakout")
///     .with_viewport(1920, 1080)
///     .build()?;
/// engine.run()?;
/// # Ok::<(), arcadia_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    title: String,
    viewport: (u32, u32),
    resource_root: PathBuf,
    initial_state: String,
    camera: CameraSettings,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Arcadia".to_owned(),
            viewport: (1280, 720),
            resource_root: PathBuf::from("resources"),
            initial_state: states::MENU.to_owned(),
            camera: CameraSettings::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the viewport size in pixels.
    ///
    /// The 2D projection and the camera aspect ratio derive from it.
    ///
    /// Default: 1280 x 720
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Viewport dimensions must be positive, got {}x{}", width, height);
        self.viewport = (width, height);
        self
    }

    /// Sets the directory shader, texture and model paths resolve against.
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    /// Sets the name of the state entered at startup.
    ///
    /// An unregistered name fails the build with an `UnknownStateError`.
    pub fn with_initial_state(mut self, name: impl Into<String>) -> Self {
        self.initial_state = name.into();
        self
    }

    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    //--- Build ------------------------------------------------------------

    /// Opens a Winit window and builds the engine around it.
    pub fn build(self) -> Result<Engine, EngineError> {
        let (width, height) = self.viewport;
        let window = WinitWindow::new(&self.title, width, height);
        self.build_with_window(window)
    }

    /// Builds the engine around any [`Window`] implementation.
    pub fn build_with_window<W: Window + 'static>(self, window: W) -> Result<Engine, EngineError> {
        let window: SharedWindow = Rc::new(RefCell::new(window));
        self.build_with_shared_window(window)
    }

    /// Builds the engine around an already shared window handle.
    ///
    /// # Errors
    ///
    /// - [`InitializationError::Window`] if the window fails to open;
    ///   nothing else is constructed in that case
    /// - [`InitializationError::InvalidConfig`] for unusable camera settings
    /// - `ResourceLoadError` if a shader, texture or model fails to load
    /// - `UnknownStateError` if the initial state is not registered
    pub fn build_with_shared_window(self, window: SharedWindow) -> Result<Engine, EngineError> {
        info!(target: "engine", "Building engine \"{}\" ({}x{})", self.title, self.viewport.0, self.viewport.1);

        //--- 1. Window ----------------------------------------------------
        if !window.borrow_mut().initialize() {
            error!(target: "engine", "Failed to initialize the window");
            return Err(InitializationError::Window.into());
        }
        info!(target: "engine", "Window initialized");

        //--- 2. Camera ----------------------------------------------------
        self.validate_camera()?;
        let (width, height) = self.viewport;
        let camera = Camera::new(self.camera, width as f32 / height as f32);
        info!(target: "engine", "Camera initialized");

        //--- 3. Shared shaders --------------------------------------------
        let mut shaders = ResourceCache::new();
        let texture_shader = self.load_shader(&mut shaders, TEXTURE_SHADER)?;
        let color_shader = self.load_shader(&mut shaders, COLOR_SHADER)?;
        info!(target: "engine", "Shaders loaded");

        //--- 4. Renderer --------------------------------------------------
        let renderer = Renderer::new(texture_shader, color_shader, self.viewport);
        info!(target: "engine", "Renderer initialized");

        //--- 5. State machine ---------------------------------------------
        let mut machine = StateMachine::new();
        let switcher = machine.switcher();

        //--- 6. States ----------------------------------------------------
        let context = GlobalContext::new(Rc::clone(&window), camera, renderer, self.resource_root.clone());

        let mut state_set: HashMap<String, Box<dyn State>> = HashMap::new();
        state_set.insert(
            states::MENU.to_owned(),
            Box::new(MenuState::new(context.clone(), switcher.clone())?),
        );
        state_set.insert(
            states::PLAY.to_owned(),
            Box::new(PlayState::new(context.clone(), switcher.clone())?),
        );
        state_set.insert(
            states::PAUSE.to_owned(),
            Box::new(PauseState::new(context.clone(), switcher)),
        );
        info!(target: "engine", "{} states constructed", state_set.len());

        //--- 7. Install states --------------------------------------------
        machine.initialize(state_set, &self.initial_state)?;
        info!(target: "engine", "Engine ready, initial state \"{}\"", self.initial_state);

        Ok(Engine {
            window,
            machine,
            context,
            shaders,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    fn validate_camera(&self) -> Result<(), InitializationError> {
        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(InitializationError::InvalidConfig(format!(
                "camera clip planes must satisfy 0 < near < far (near {}, far {})",
                camera.near, camera.far
            )));
        }
        if !(camera.fovy > 0.0 && camera.fovy < 180.0) {
            return Err(InitializationError::InvalidConfig(format!(
                "camera field of view must be within (0, 180) degrees, got {}",
                camera.fovy
            )));
        }
        Ok(())
    }

    fn load_shader(
        &self,
        cache: &mut ResourceCache<ShaderProgram>,
        name: &str,
    ) -> Result<Rc<ShaderProgram>, EngineError> {
        let dir = self.resource_root.join("shaders");
        let paths = ShaderSourcePaths::new(dir.join(format!("{name}.vs")), dir.join(format!("{name}.fs")));
        Ok(cache.get(name, &ShaderLoader, paths)?)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Arcadia engine runtime.
///
/// Create via [`EngineBuilder`]. Everything runs on the calling thread:
/// each loop iteration measures the delta time, then dispatches input,
/// update and render to the current state, in that order.
pub struct Engine {
    window: SharedWindow,
    machine: StateMachine,
    context: GlobalContext,
    shaders: ResourceCache<ShaderProgram>,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Runs the main loop until the window reports a close request.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStateError` if a state requests a transition to an
    /// unregistered name.
    pub fn run(mut self) -> Result<(), EngineError> {
        info!(target: "engine", "Entering main loop");
        let mut clock = FrameClock::new();

        while !self.window.borrow().should_close() {
            let delta_time = clock.tick();
            self.frame(delta_time)?;
        }

        info!(target: "engine", "Main loop exited after {} frames", clock.frames());
        Ok(())
    }

    /// Runs one iteration of the main loop with the given delta time.
    pub fn frame(&mut self, delta_time: f32) -> Result<(), EngineError> {
        self.machine.process_input_in_current_state(delta_time)?;
        self.machine.update_current_state(delta_time)?;
        self.machine.render_current_state()?;
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_state_name(&self) -> Option<&str> {
        self.machine.current_state_name()
    }

    /// Shared handles given to every state.
    pub fn context(&self) -> &GlobalContext {
        &self.context
    }

    /// Cache holding the shaders loaded at startup.
    pub fn shaders(&self) -> &ResourceCache<ShaderProgram> {
        &self.shaders
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, KeyEvent};
    use crate::error::UNMANAGED_KEY;
    use crate::testing::{fixture_dir, shipped_resources, ScriptedWindow};

    fn builder() -> EngineBuilder {
        EngineBuilder::new().with_resource_root(shipped_resources())
    }

    fn build(window: &Rc<RefCell<ScriptedWindow>>) -> Result<Engine, EngineError> {
        let shared: SharedWindow = window.clone();
        builder().build_with_shared_window(shared)
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Arcadia");
        assert_eq!(builder.viewport, (1280, 720));
        assert_eq!(builder.resource_root, PathBuf::from("resources"));
        assert_eq!(builder.initial_state, "menu");
        assert_eq!(builder.camera, CameraSettings::default());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = EngineBuilder::new()
            .with_title("Breakout")
            .with_viewport(800, 600)
            .with_initial_state("play");

        assert_eq!(builder.title, "Breakout");
        assert_eq!(builder.viewport, (800, 600));
        assert_eq!(builder.initial_state, "play");
    }

    #[test]
    #[should_panic(expected = "Viewport dimensions must be positive")]
    fn builder_with_viewport_panics_on_zero() {
        EngineBuilder::new().with_viewport(0, 720);
    }

    //=====================================================================
    // Startup Tests
    //=====================================================================

    #[test]
    fn startup_enters_initial_state() {
        let window = ScriptedWindow::new().shared();

        let engine = build(&window).unwrap();

        assert_eq!(engine.current_state_name(), Some("menu"));
        assert!(engine.shaders().contains(TEXTURE_SHADER));
        assert!(engine.shaders().contains(COLOR_SHADER));
        assert_eq!(engine.context().models.borrow().len(), 1);
        assert_eq!(window.borrow().calls, vec!["initialize", "enable_cursor"]);
    }

    #[test]
    fn window_failure_aborts_before_anything_else() {
        let window = ScriptedWindow::failing().shared();

        let err = build(&window).err().unwrap();

        assert!(matches!(err, EngineError::Initialization(InitializationError::Window)));
        assert_eq!(window.borrow().calls, vec!["initialize"]);
    }

    #[test]
    fn missing_shader_is_reported_with_its_key() {
        let window = ScriptedWindow::new().shared();
        let shared: SharedWindow = window.clone();

        let err = EngineBuilder::new()
            .with_resource_root(fixture_dir("engine_empty_root"))
            .build_with_shared_window(shared)
            .err()
            .unwrap();

        match err {
            EngineError::ResourceLoad(e) => assert_eq!(e.key, TEXTURE_SHADER),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn missing_logo_is_reported_as_unmanaged() {
        let root = fixture_dir("engine_shaders_only");
        std::fs::create_dir_all(root.join("shaders")).unwrap();
        for entry in std::fs::read_dir(shipped_resources().join("shaders")).unwrap() {
            let path = entry.unwrap().path();
            std::fs::copy(&path, root.join("shaders").join(path.file_name().unwrap())).unwrap();
        }
        let window = ScriptedWindow::new().shared();
        let shared: SharedWindow = window.clone();

        let err = EngineBuilder::new()
            .with_resource_root(root)
            .build_with_shared_window(shared)
            .err()
            .unwrap();

        match err {
            EngineError::ResourceLoad(e) => assert_eq!(e.key, UNMANAGED_KEY),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn unknown_initial_state_is_rejected() {
        let window = ScriptedWindow::new().shared();
        let shared: SharedWindow = window.clone();

        let err = builder()
            .with_initial_state("doesnotexist")
            .build_with_shared_window(shared)
            .err()
            .unwrap();

        match err {
            EngineError::UnknownState(e) => assert_eq!(e.name, "doesnotexist"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn invalid_camera_is_a_config_error() {
        let window = ScriptedWindow::new().shared();
        let shared: SharedWindow = window.clone();
        let camera = CameraSettings {
            near: 0.0,
            ..CameraSettings::default()
        };

        let err = builder().with_camera(camera).build_with_shared_window(shared).err().unwrap();

        assert!(matches!(err, EngineError::Initialization(InitializationError::InvalidConfig(_))));
    }

    //=====================================================================
    // Main Loop Tests
    //=====================================================================

    #[test]
    fn run_stops_when_window_closes() {
        let window = ScriptedWindow::new().with_frame_budget(3).shared();

        build(&window).unwrap().run().unwrap();

        let window = window.borrow();
        assert_eq!(window.frames_presented, 3);
        assert_eq!(window.count("poll_events"), 3);
    }

    #[test]
    fn run_does_not_enter_loop_when_already_closing() {
        let window = ScriptedWindow::new().shared();
        let engine = build(&window).unwrap();
        window.borrow_mut().should_close = true;

        engine.run().unwrap();

        assert_eq!(window.borrow().frames_presented, 0);
    }

    #[test]
    fn enter_key_starts_game_during_run() {
        let window = ScriptedWindow::new().with_frame_budget(3).shared();
        window.borrow_mut().script(vec![KeyEvent::Down(KeyCode::Enter)]);

        build(&window).unwrap().run().unwrap();

        // Play hides the cursor on entry
        assert!(!window.borrow().cursor_enabled);
    }

    #[test]
    fn frame_dispatches_to_state_switched_within_it() {
        let window = ScriptedWindow::new().shared();
        let mut engine = build(&window).unwrap();
        window.borrow_mut().press(KeyCode::Enter);

        engine.frame(0.016).unwrap();

        assert_eq!(engine.current_state_name(), Some("play"));
        let renderer = engine.context().renderer.borrow();
        assert!(renderer
            .last_frame()
            .iter()
            .any(|command| matches!(command, crate::core::render::DrawCommand::Model { .. })));
    }

    #[test]
    fn escape_in_menu_ends_the_loop() {
        let window = ScriptedWindow::new().with_frame_budget(100).shared();
        window.borrow_mut().script(vec![KeyEvent::Down(KeyCode::Escape)]);

        build(&window).unwrap().run().unwrap();

        assert_eq!(window.borrow().frames_presented, 2);
    }
}

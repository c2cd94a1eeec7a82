//=========================================================================
// Global Context
//=========================================================================
//
// Shared data container for states.
//
// Contains the collaborators states read and drive:
// - window: input queries, display settings, presentation
// - camera / renderer: drawing
// - textures / models: asset caches for on-demand loads
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::render::Renderer;
use crate::core::resources::{Model, ResourceCache, Texture};
use crate::platform::SharedWindow;

//=== GlobalContext =======================================================

/// Shared handles accessible to states.
///
/// Every field is reference counted; states keep their own clone of the
/// context for the whole process. Only the active state touches the
/// handles during its dispatch, so `RefCell` borrows never overlap.
#[derive(Clone)]
pub struct GlobalContext {
    pub window: SharedWindow,
    pub camera: Rc<RefCell<Camera>>,
    pub renderer: Rc<RefCell<Renderer>>,
    pub textures: Rc<RefCell<ResourceCache<Texture>>>,
    pub models: Rc<RefCell<ResourceCache<Model>>>,

    /// Directory asset paths are resolved against.
    resource_root: PathBuf,
}

impl GlobalContext {
    /// Bundles the shared handles with empty texture and model caches.
    pub fn new(window: SharedWindow, camera: Camera, renderer: Renderer, resource_root: impl Into<PathBuf>) -> Self {
        Self {
            window,
            camera: Rc::new(RefCell::new(camera)),
            renderer: Rc::new(RefCell::new(renderer)),
            textures: Rc::new(RefCell::new(ResourceCache::new())),
            models: Rc::new(RefCell::new(ResourceCache::new())),
            resource_root: resource_root.into(),
        }
    }

    pub fn resource_root(&self) -> &Path {
        &self.resource_root
    }

    /// Resolves `relative` against the resource root.
    pub fn resource_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.resource_root.join(relative)
    }
}

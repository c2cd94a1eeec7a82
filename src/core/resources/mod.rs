//=========================================================================
// Resource Cache
//=========================================================================
//
// Keyed, load-once storage for decoded assets of a single kind.
//
// Architecture:
//   get(key, loader, params)
//     ├─ hit  → Rc::clone(existing)          (loader not invoked)
//     └─ miss → loader.load(params) → insert → Rc::clone(new)
//
//   get_unmanaged(loader, params) → T       (no lookup, no storage)
//
// One cache exists per resource kind (shaders, textures, models). The
// lookup/storage logic is identical for all of them; only the injected
// Loader differs.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error, trace};

//=== Internal Dependencies ===============================================

use crate::error::{ResourceLoadError, UNMANAGED_KEY};

//=== Module Declarations =================================================

mod model;
mod shader;
mod texture;

//=== Public API ==========================================================

pub use model::{Mesh, Model, ModelLoader};
pub use shader::{ShaderLoader, ShaderProgram, ShaderSourcePaths, Uniform};
pub use texture::{Texture, TextureLoader};

//=== Loader Trait ========================================================

/// Strategy that turns kind-specific parameters into a resource.
///
/// Each resource kind supplies its own loader (shader sources, image
/// paths, mesh files). Loaders report failures through `anyhow` so they
/// can attach whatever context they have; the cache wraps the failure
/// in a [`ResourceLoadError`] carrying the requested key.
pub trait Loader<T> {
    /// Parameters needed to construct one resource.
    type Params;

    /// Constructs a fully initialized resource.
    fn load(&self, params: Self::Params) -> anyhow::Result<T>;
}

//=== ResourceCache =======================================================

/// Load-once cache mapping string keys to shared resources.
///
/// At most one instance exists per key. Entries are never evicted; they
/// are dropped together with the cache (or once the last outstanding
/// `Rc` handle goes away).
///
/// # Example
///
/// ```no_run
/// use arcadia_engine::core::resources::{ResourceCache, Texture, TextureLoader};
///
/// let mut textures: ResourceCache<Texture> = ResourceCache::new();
/// let face = textures.get("face", &TextureLoader, "resources/textures/face.png".into())?;
/// let again = textures.get("face", &TextureLoader, "resources/textures/face.png".into())?;
/// assert!(std::rc::Rc::ptr_eq(&face, &again));
/// # Ok::<(), arcadia_engine::error::ResourceLoadError>(())
/// ```
pub struct ResourceCache<T> {
    resources: HashMap<String, Rc<T>>,
}

impl<T> ResourceCache<T> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    //--- Loading ----------------------------------------------------------

    /// Returns the resource stored under `key`, loading it on first request.
    ///
    /// On a hit the loader is not invoked and `params` are discarded. On a
    /// miss the loader runs synchronously; if it fails nothing is stored.
    pub fn get<L>(
        &mut self,
        key: &str,
        loader: &L,
        params: L::Params,
    ) -> Result<Rc<T>, ResourceLoadError>
    where
        L: Loader<T>,
    {
        if let Some(resource) = self.resources.get(key) {
            trace!(target: "resources", "Cache hit for {:?}", key);
            return Ok(Rc::clone(resource));
        }

        let resource = loader.load(params).map_err(|source| {
            error!(target: "resources", "Failed to load {:?}: {:#}", key, source);
            ResourceLoadError::new(key, source)
        })?;

        debug!(target: "resources", "Loaded and cached {:?}", key);
        let resource = Rc::new(resource);
        self.resources.insert(key.to_owned(), Rc::clone(&resource));
        Ok(resource)
    }

    /// Loads a private instance that is never shared or stored.
    ///
    /// Every call runs the loader and returns a distinct value owned by
    /// the caller.
    pub fn get_unmanaged<L>(&self, loader: &L, params: L::Params) -> Result<T, ResourceLoadError>
    where
        L: Loader<T>,
    {
        loader.load(params).map_err(|source| {
            error!(target: "resources", "Failed to load unmanaged resource: {:#}", source);
            ResourceLoadError::new(UNMANAGED_KEY, source)
        })
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if a resource is cached under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    /// Number of cached resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl<T> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

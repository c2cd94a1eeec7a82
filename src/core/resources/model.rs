//=========================================================================
// Models
//=========================================================================
//
// Wavefront OBJ loading through `tobj`. Each OBJ object becomes one Mesh
// with triangulated, single-indexed vertex streams.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use anyhow::{bail, Context};
use glam::{Vec2, Vec3};

//=== Internal Dependencies ===============================================

use super::Loader;

//=== Mesh / Model ========================================================

/// Triangle mesh with optional normals and texture coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub positions: Vec<Vec3>,
    pub normals: Option<Vec<Vec3>>,
    pub tex_coords: Option<Vec<Vec2>>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A set of meshes loaded from one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    meshes: Vec<Mesh>,
}

impl Model {
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self { meshes }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }
}

//=== ModelLoader =========================================================

/// Loads an OBJ file into a [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelLoader;

impl Loader<Model> for ModelLoader {
    type Params = PathBuf;

    fn load(&self, path: Self::Params) -> anyhow::Result<Model> {
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };

        // Materials are not used; a missing .mtl is not an error.
        let (objects, _materials) = tobj::load_obj(&path, &options)
            .with_context(|| format!("cannot parse model {}", path.display()))?;

        if objects.is_empty() {
            bail!("no objects found in {}", path.display());
        }

        let meshes = objects.into_iter().map(convert_mesh).collect();
        Ok(Model::new(meshes))
    }
}

fn convert_mesh(object: tobj::Model) -> Mesh {
    let mesh = object.mesh;

    let positions = mesh
        .positions
        .chunks_exact(3)
        .map(|v| Vec3::new(v[0], v[1], v[2]))
        .collect();

    let normals = (!mesh.normals.is_empty()).then(|| {
        mesh.normals
            .chunks_exact(3)
            .map(|n| Vec3::new(n[0], n[1], n[2]))
            .collect()
    });

    let tex_coords = (!mesh.texcoords.is_empty()).then(|| {
        mesh.texcoords
            .chunks_exact(2)
            .map(|t| Vec2::new(t[0], t[1]))
            .collect()
    });

    Mesh {
        name: object.name,
        positions,
        normals,
        tex_coords,
        indices: mesh.indices,
    }
}

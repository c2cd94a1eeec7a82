//=========================================================================
// Shader Programs
//=========================================================================
//
// Loads a vertex/fragment source pair and keeps the program's uniform
// table. Uniforms are interior-mutable so a program shared through the
// cache can still be configured (projection, sampler slots).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use glam::{Mat4, Vec3};

//=== Internal Dependencies ===============================================

use super::Loader;

//=== Uniform =============================================================

/// Value bound to a named uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uniform {
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    Mat4(Mat4),
}

//=== ShaderProgram =======================================================

/// A linked vertex + fragment program and its current uniform values.
#[derive(Debug)]
pub struct ShaderProgram {
    vertex_source: String,
    fragment_source: String,
    uniforms: RefCell<HashMap<String, Uniform>>,
}

impl ShaderProgram {
    /// Builds a program from in-memory stage sources.
    ///
    /// Fails if either stage is blank.
    pub fn from_sources(vertex: impl Into<String>, fragment: impl Into<String>) -> anyhow::Result<Self> {
        let vertex_source = vertex.into();
        let fragment_source = fragment.into();

        if vertex_source.trim().is_empty() {
            bail!("vertex shader source is empty");
        }
        if fragment_source.trim().is_empty() {
            bail!("fragment shader source is empty");
        }

        Ok(Self {
            vertex_source,
            fragment_source,
            uniforms: RefCell::new(HashMap::new()),
        })
    }

    pub fn vertex_source(&self) -> &str {
        &self.vertex_source
    }

    pub fn fragment_source(&self) -> &str {
        &self.fragment_source
    }

    //--- Uniforms ---------------------------------------------------------

    pub fn set_int(&self, name: &str, value: i32) {
        self.set_uniform(name, Uniform::Int(value));
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.set_uniform(name, Uniform::Float(value));
    }

    pub fn set_vec3(&self, name: &str, value: Vec3) {
        self.set_uniform(name, Uniform::Vec3(value));
    }

    pub fn set_mat4(&self, name: &str, value: Mat4) {
        self.set_uniform(name, Uniform::Mat4(value));
    }

    /// Returns the value last bound to `name`.
    pub fn uniform(&self, name: &str) -> Option<Uniform> {
        self.uniforms.borrow().get(name).copied()
    }

    fn set_uniform(&self, name: &str, value: Uniform) {
        self.uniforms.borrow_mut().insert(name.to_owned(), value);
    }
}

//=== ShaderLoader ========================================================

/// Paths of the two stage sources making up one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSourcePaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl ShaderSourcePaths {
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Reads shader stage sources from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShaderLoader;

impl Loader<ShaderProgram> for ShaderLoader {
    type Params = ShaderSourcePaths;

    fn load(&self, params: Self::Params) -> anyhow::Result<ShaderProgram> {
        let vertex = read_stage(&params.vertex)?;
        let fragment = read_stage(&params.fragment)?;

        ShaderProgram::from_sources(vertex, fragment).with_context(|| {
            format!(
                "invalid shader program ({}, {})",
                params.vertex.display(),
                params.fragment.display()
            )
        })
    }
}

fn read_stage(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read shader source {}", path.display()))
}

//=========================================================================
// Unit Tests
//=========================================================================

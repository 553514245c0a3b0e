use glam::Vec4;

use crate::errors::Result;
use crate::render::graphics::{Graphics, ShaderKey, uniform};

/// Surface description for a mesh: which shader program draws it and the
/// uniform values that program receives.
///
/// The shader reference is non-owning — programs live in the graphics
/// backend and may be shared by many materials.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub shader: ShaderKey,
    pub diffuse: Vec4,
}

impl Material {
    pub fn new(name: impl Into<String>, shader: ShaderKey) -> Self {
        Self {
            name: name.into(),
            shader,
            diffuse: Vec4::ONE,
        }
    }

    #[must_use]
    pub fn with_diffuse(mut self, diffuse: Vec4) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Activates the shader and uploads the material's uniforms.
    ///
    /// Camera matrices are not touched here; those are uploaded once per
    /// pass by the render entry point.
    pub fn apply(&self, gfx: &mut dyn Graphics) -> Result<()> {
        gfx.use_shader(self.shader)?;
        gfx.set_uniform_vec4(uniform::DIFFUSE, self.diffuse)
    }
}

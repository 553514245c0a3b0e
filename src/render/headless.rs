//! A device-free [`Graphics`] backend that records the command stream.
//!
//! Used by the integration tests and usable for CI smoke runs: draws and
//! clears are counted, uniform uploads are kept with their values, and
//! keys are allocated from real slotmaps so stale-handle paths behave
//! like a real backend.

use glam::{Mat4, Vec3, Vec4};
use slotmap::SlotMap;

use crate::errors::{OrreryError, Result};
use crate::render::graphics::{ClearMode, GpuMeshKey, Graphics, ShaderKey};
use crate::resources::geometry::Geometry;

/// One recorded backend command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    UseShader(ShaderKey),
    SetMat4 { name: String, value: Mat4 },
    SetVec4 { name: String, value: Vec4 },
    SetVec3 { name: String, value: Vec3 },
    SetF32 { name: String, value: f32 },
    Clear { mode: ClearMode, color: Vec4, depth: f32 },
    Upload { mesh: GpuMeshKey, index_count: usize },
    Draw(GpuMeshKey),
}

/// Recording backend. See the module docs.
#[derive(Debug, Default)]
pub struct HeadlessGraphics {
    shaders: SlotMap<ShaderKey, String>,
    meshes: SlotMap<GpuMeshKey, usize>,
    active_shader: Option<ShaderKey>,
    commands: Vec<Command>,
    /// When set, `load_shader` only accepts these names. Unset accepts
    /// everything (the common case for tests that don't care).
    available_shaders: Option<Vec<String>>,
}

impl HeadlessGraphics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts `load_shader` to the given names, so missing-shader
    /// error paths can be exercised.
    #[must_use]
    pub fn with_shaders(names: &[&str]) -> Self {
        Self {
            available_shaders: Some(names.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn draw_calls(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Draw(_)))
            .count()
    }

    #[must_use]
    pub fn clear_calls(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Clear { .. }))
            .count()
    }

    #[must_use]
    pub fn upload_calls(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Upload { .. }))
            .count()
    }

    /// The model matrices uploaded before each draw, in draw order.
    #[must_use]
    pub fn drawn_model_matrices(&self) -> Vec<Mat4> {
        let mut result = Vec::new();
        let mut last_model = None;
        for command in &self.commands {
            match command {
                Command::SetMat4 { name, value } if name == crate::render::uniform::MODEL => {
                    last_model = Some(*value);
                }
                Command::Draw(_) => {
                    if let Some(model) = last_model {
                        result.push(model);
                    }
                }
                _ => {}
            }
        }
        result
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Graphics for HeadlessGraphics {
    fn load_shader(&mut self, name: &str) -> Result<ShaderKey> {
        if let Some(available) = &self.available_shaders {
            if !available.iter().any(|n| n == name) {
                return Err(OrreryError::ShaderNotFound(name.to_string()));
            }
        }

        // Compile-or-get: one program per name
        if let Some((key, _)) = self.shaders.iter().find(|(_, n)| *n == name) {
            return Ok(key);
        }
        Ok(self.shaders.insert(name.to_string()))
    }

    fn use_shader(&mut self, shader: ShaderKey) -> Result<()> {
        if !self.shaders.contains_key(shader) {
            return Err(OrreryError::ShaderNotFound(format!("{shader:?}")));
        }
        self.active_shader = Some(shader);
        self.commands.push(Command::UseShader(shader));
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4) -> Result<()> {
        self.require_active(name)?;
        self.commands.push(Command::SetMat4 {
            name: name.to_string(),
            value: *value,
        });
        Ok(())
    }

    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) -> Result<()> {
        self.require_active(name)?;
        self.commands.push(Command::SetVec4 {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) -> Result<()> {
        self.require_active(name)?;
        self.commands.push(Command::SetVec3 {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn set_uniform_f32(&mut self, name: &str, value: f32) -> Result<()> {
        self.require_active(name)?;
        self.commands.push(Command::SetF32 {
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn clear(&mut self, mode: ClearMode, color: Vec4, depth: f32) {
        self.commands.push(Command::Clear { mode, color, depth });
    }

    fn upload_geometry(&mut self, geometry: &Geometry) -> Result<GpuMeshKey> {
        let key = self.meshes.insert(geometry.index_count());
        self.commands.push(Command::Upload {
            mesh: key,
            index_count: geometry.index_count(),
        });
        Ok(key)
    }

    fn draw(&mut self, mesh: GpuMeshKey) -> Result<()> {
        if !self.meshes.contains_key(mesh) {
            return Err(OrreryError::NotCompiled(format!("{mesh:?}")));
        }
        self.commands.push(Command::Draw(mesh));
        Ok(())
    }
}

impl HeadlessGraphics {
    fn require_active(&self, uniform: &str) -> Result<()> {
        if self.active_shader.is_none() {
            return Err(OrreryError::NoShaderBound(uniform.to_string()));
        }
        Ok(())
    }
}

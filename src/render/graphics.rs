use bitflags::bitflags;
use glam::{Mat4, Vec3, Vec4};
use slotmap::new_key_type;

use crate::errors::Result;
use crate::resources::geometry::Geometry;

new_key_type! {
    /// Handle to a shader program owned by the graphics backend.
    pub struct ShaderKey;
    /// Handle to uploaded geometry owned by the graphics backend.
    pub struct GpuMeshKey;
}

bitflags! {
    /// Which framebuffer targets a camera clears before drawing.
    ///
    /// An empty set disables clearing entirely.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMode: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
    }
}

/// Well-known uniform names the engine uploads.
pub mod uniform {
    pub const MODEL: &str = "u_Model";
    pub const VIEW: &str = "u_View";
    pub const PROJECTION: &str = "u_Projection";
    pub const DIFFUSE: &str = "u_Diffuse";
}

/// The command surface the scene graph drives.
///
/// Implementations own all GPU-side resources (shader programs, vertex
/// buffers) and hand out generational keys for them. The surface is
/// deliberately GL-shaped and stateful: uniform setters target the shader
/// most recently activated with [`use_shader`](Graphics::use_shader).
///
/// Shader compilation and asset decoding happen behind
/// [`load_shader`](Graphics::load_shader); the scene graph only ever sees
/// keys.
pub trait Graphics {
    /// Compiles (or returns the already-compiled) program named `name`.
    fn load_shader(&mut self, name: &str) -> Result<ShaderKey>;

    /// Makes `shader` the active program for subsequent uniform uploads
    /// and draws.
    fn use_shader(&mut self, shader: ShaderKey) -> Result<()>;

    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4) -> Result<()>;
    fn set_uniform_vec4(&mut self, name: &str, value: Vec4) -> Result<()>;
    fn set_uniform_vec3(&mut self, name: &str, value: Vec3) -> Result<()>;
    fn set_uniform_f32(&mut self, name: &str, value: f32) -> Result<()>;

    /// Clears the requested targets. A backend receiving an empty `mode`
    /// does nothing.
    fn clear(&mut self, mode: ClearMode, color: Vec4, depth: f32);

    /// Uploads vertex/index data and returns a handle for drawing.
    fn upload_geometry(&mut self, geometry: &Geometry) -> Result<GpuMeshKey>;

    /// Issues a draw of previously uploaded geometry with the currently
    /// active shader and uniforms.
    fn draw(&mut self, mesh: GpuMeshKey) -> Result<()>;
}

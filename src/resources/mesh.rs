use crate::render::graphics::GpuMeshKey;
use crate::resources::material::Material;
use crate::scene::GeometryKey;

/// Renderable capability: pairs a shared geometry with a material.
///
/// A mesh starts CPU-only. [`Scene::compile`](crate::scene::Scene::compile)
/// uploads the geometry through the graphics boundary and stores the
/// returned GPU key here; a mesh that already holds a key is skipped, so
/// repeated compiles never duplicate GPU resources.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub geometry: GeometryKey,
    pub material: Material,
    pub(crate) gpu: Option<GpuMeshKey>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, geometry: GeometryKey, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            gpu: None,
        }
    }

    /// Whether the geometry has been uploaded to the backend.
    #[inline]
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.gpu.is_some()
    }
}

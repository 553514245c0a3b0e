use glam::Mat4;

use crate::scene::NodeHandle;

/// Per-pass state threaded through the render walk.
///
/// A context is a plain `Copy` value: every recursion level works on its
/// own copy, augmented with that node's contribution via [`with_model`].
/// Nothing a node does to its context can leak into a sibling's draw.
///
/// [`with_model`]: RenderContext::with_model
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Node of the camera that opened this pass.
    pub camera: NodeHandle,
    /// View matrix of the active camera.
    pub view: Mat4,
    /// Projection matrix of the active camera.
    pub projection: Mat4,
    /// World matrix of the geometry currently being drawn. Starts as
    /// identity at the root of the pass.
    pub model: Mat4,
}

impl RenderContext {
    pub fn new(camera: NodeHandle, view: Mat4, projection: Mat4) -> Self {
        Self {
            camera,
            view,
            projection,
            model: Mat4::IDENTITY,
        }
    }

    /// Returns a copy of the context with the model matrix replaced.
    #[inline]
    #[must_use]
    pub fn with_model(self, model: Mat4) -> Self {
        Self { model, ..self }
    }
}

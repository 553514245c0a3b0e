use glam::{Affine3A, Mat4, Vec4};

use crate::errors::{OrreryError, Result};
use crate::math::frustum::Frustum;
use crate::render::graphics::{ClearMode, ShaderKey};

/// Viewpoint capability: projection parameters, clear configuration and
/// the derived view/projection matrices.
///
/// # Far-plane sentinel
///
/// A negative `far` means "infinite far plane": the projection uses the
/// infinite-perspective formula instead of a finite one.
///
/// # Matrix lifecycle
///
/// The derived matrices are **identity until the first update** — a
/// camera rendered before any update sees the world through identity
/// view/projection rather than garbage. [`Scene::update`] refreshes every
/// camera from its node's world matrix each frame;
/// [`update_matrices`](Camera::update_matrices) does the same for direct
/// use.
///
/// [`Scene::update`]: crate::scene::Scene::update
#[derive(Debug, Clone)]
pub struct Camera {
    // Projection parameters (validated; see set_clip_planes)
    fov: f32, // radians
    aspect: f32,
    near: f32,
    far: f32,

    // Clear configuration
    pub clear_color: Vec4,
    pub clear_depth: f32,
    pub clear_mode: ClearMode,

    // Derived each update
    pub(crate) view_matrix: Mat4,
    pub(crate) projection_matrix: Mat4,
    pub(crate) frustum: Frustum,

    // Non-owning; every registered shader receives the view/projection
    // uniforms at the start of each render pass.
    pub(crate) shaders: Vec<ShaderKey>,
}

impl Camera {
    /// Creates a perspective camera. `fov_degrees` is the vertical field
    /// of view; `far < 0` selects the infinite far plane.
    ///
    /// Rejects `near <= 0` and any finite `far <= near` (including
    /// `far == near`) with [`OrreryError::InvalidProjection`].
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        validate_planes(near, far)?;
        Ok(Self {
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,

            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            clear_depth: 1.0,
            clear_mode: ClearMode::COLOR | ClearMode::DEPTH,

            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            frustum: Frustum::default(),

            shaders: Vec::new(),
        })
    }

    // ========================================================================
    // Projection parameters
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn fov_radians(&self) -> f32 {
        self.fov
    }

    #[inline]
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    #[inline]
    #[must_use]
    pub fn near_plane(&self) -> f32 {
        self.near
    }

    #[inline]
    #[must_use]
    pub fn far_plane(&self) -> f32 {
        self.far
    }

    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.to_radians();
    }

    /// Updates the aspect ratio (called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Replaces the clip planes, with the same validation as [`new`].
    ///
    /// [`new`]: Camera::new
    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        validate_planes(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    // ========================================================================
    // Shader registrations
    // ========================================================================

    /// Registers a shader to receive view/projection uploads each pass.
    ///
    /// No deduplication: registering the same shader twice uploads its
    /// camera uniforms twice per pass (wasteful but harmless).
    pub fn add_shader(&mut self, shader: ShaderKey) {
        self.shaders.push(shader);
    }

    #[must_use]
    pub fn shaders(&self) -> &[ShaderKey] {
        &self.shaders
    }

    // ========================================================================
    // Derived matrices
    // ========================================================================

    /// Recomputes view (inverse of the node's world matrix), projection
    /// and the cull frustum. Must run before the camera renders a frame.
    pub fn update_matrices(&mut self, world: &Affine3A) {
        self.view_matrix = Mat4::from(*world).inverse();

        self.projection_matrix = if self.far < 0.0 {
            Mat4::perspective_infinite_rh(self.fov, self.aspect, self.near)
        } else {
            Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
        };

        self.frustum = Frustum::from_matrix(self.projection_matrix * self.view_matrix);
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }
}

fn validate_planes(near: f32, far: f32) -> Result<()> {
    let infinite = far < 0.0;
    if near > 0.0 && (infinite || far > near) {
        Ok(())
    } else {
        Err(OrreryError::InvalidProjection { near, far })
    }
}

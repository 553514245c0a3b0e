use glam::{Affine3A, EulerRot, Mat3, Quat, Vec3};

/// Local TRS state with cached local and world matrices.
///
/// Composition order is fixed crate-wide to conventional TRS:
///
/// ```text
/// world = parent_world * translate(position) * rotate(rotation) * scale(scale)
/// ```
///
/// applied uniformly at every hierarchy level. A parent's scale therefore
/// participates in a child's *world* matrix but never changes the child's
/// local scale value.
///
/// Mutators record a dirty flag; the owning [`Scene`](crate::scene::Scene)
/// refreshes world matrices either eagerly (its transform operations) or
/// in the per-frame hierarchy pass. Direct field writes are also legal and
/// are picked up by the shadow-state comparison in
/// [`update_local_matrix`](Transform::update_local_matrix).
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    // Matrix caches, written by the hierarchy walks
    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    // Shadow state for dirty checking
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    // ========================================================================
    // Dirty check
    // ========================================================================

    /// Recomputes the local matrix if position/rotation/scale changed since
    /// the last call (or the transform was explicitly marked dirty).
    ///
    /// Returns whether a recomputation happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation,
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    /// Forces the next [`update_local_matrix`](Self::update_local_matrix)
    /// to recompute.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.force_update = true;
    }

    pub fn offset_position(&mut self, offset: Vec3) {
        self.position += offset;
        self.force_update = true;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.force_update = true;
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.force_update = true;
    }

    /// Sets the rotation to `radians` about `axis` (axis need not be
    /// normalized).
    pub fn set_rotation_axis_angle(&mut self, axis: Vec3, radians: f32) {
        self.rotation = Quat::from_axis_angle(axis.normalize(), radians);
        self.force_update = true;
    }

    /// Post-rotates by `radians` about `axis`, expressed in the
    /// transform's own frame.
    pub fn offset_rotation(&mut self, axis: Vec3, radians: f32) {
        self.rotation *= Quat::from_axis_angle(axis.normalize(), radians);
        self.force_update = true;
    }

    /// Sets the rotation from Euler angles (XYZ intrinsic order, radians).
    pub fn set_rotation_euler(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self.force_update = true;
    }

    /// Returns the rotation as XYZ Euler angles.
    #[must_use]
    pub fn rotation_euler(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// Orients the transform so its forward axis (-Z) points at `target`.
    ///
    /// `target` and `up` are expressed in the transform's parent frame.
    /// If `up` is parallel to the look direction a fallback up axis is
    /// substituted (+Y, or +Z when looking along Y), so the result is
    /// always a well-formed rotation. Looking at the transform's own
    /// position is a no-op.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let direction = target - self.position;
        if direction.length_squared() < 1e-12 {
            return;
        }
        let forward = direction.normalize();

        let mut up = up;
        if forward.cross(up).length_squared() < 1e-8 {
            up = if forward.y.abs() < 0.99 { Vec3::Y } else { Vec3::Z };
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward);

        let basis = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&basis);
        self.force_update = true;
    }

    /// Sets the local matrix directly, decomposing it back into
    /// position/rotation/scale. Shear is lost in the decomposition.
    pub fn apply_local_matrix(&mut self, matrix: Affine3A) {
        self.local_matrix = matrix;

        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        self.scale = scale;
        self.rotation = rotation;
        self.position = translation;

        self.last_scale = scale;
        self.last_rotation = rotation;
        self.last_position = translation;

        self.mark_dirty();
    }

    /// Overwrites the cached world matrix, bypassing TRS composition.
    ///
    /// Escape hatch for matrices computed elsewhere (e.g. an externally
    /// built view matrix). After this call `position`/`rotation`/`scale`
    /// no longer describe the world matrix, and the next hierarchy
    /// refresh that touches this node recomposes the matrix from them.
    pub fn set_world_matrix(&mut self, matrix: Affine3A) {
        self.world_matrix = matrix;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// The cached world matrix. Fresh after any scene-level transform
    /// operation; direct field writes are reconciled by the next
    /// hierarchy pass.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix widened to a `Mat4` for shader upload.
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> glam::Mat4 {
        glam::Mat4::from(self.world_matrix)
    }

    // Axis convention: right-handed, -Z forward, +Y up, +X right.

    /// World-space right axis (+X column of the world matrix).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        Vec3::from(self.world_matrix.matrix3.x_axis).normalize()
    }

    /// World-space up axis (+Y column of the world matrix).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        Vec3::from(self.world_matrix.matrix3.y_axis).normalize()
    }

    /// World-space forward axis (-Z column of the world matrix).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::from(-self.world_matrix.matrix3.z_axis).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

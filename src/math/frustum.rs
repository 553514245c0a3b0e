use glam::{Mat4, Vec3};

use crate::math::plane::Plane;

/// A view frustum as six inward-facing planes, extracted from a combined
/// view-projection matrix with the Gribb-Hartmann method.
///
/// The depth planes assume glam's `[0, 1]` clip range (`near = row2`,
/// `far = row3 - row2`).
///
/// The default frustum has all-zero planes and therefore culls nothing —
/// this is the state of a camera before its first update.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frustum {
    planes: [Plane; 6], // left, right, bottom, top, near, far
}

impl Frustum {
    /// Extracts the six planes from `view_projection`.
    pub fn from_matrix(view_projection: Mat4) -> Self {
        let rows = [
            view_projection.row(0),
            view_projection.row(1),
            view_projection.row(2),
            view_projection.row(3),
        ];

        let mut planes = [
            Plane::from_coefficients(rows[3] + rows[0]), // left
            Plane::from_coefficients(rows[3] - rows[0]), // right
            Plane::from_coefficients(rows[3] + rows[1]), // bottom
            Plane::from_coefficients(rows[3] - rows[1]), // top
            Plane::from_coefficients(rows[2]),           // near
            Plane::from_coefficients(rows[3] - rows[2]), // far
        ];

        for plane in &mut planes {
            plane.normalize();
        }

        Self { planes }
    }

    /// Whether a sphere touches the frustum volume.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        for plane in &self.planes {
            if plane.signed_distance(center) < -radius {
                return false;
            }
        }
        true
    }

    /// Whether a point lies inside the frustum volume.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.intersects_sphere(point, 0.0)
    }
}

use glam::{Vec3, Vec4};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Negative half-space (behind the normal).
    Back,
    /// Positive half-space (in front of the normal).
    Front,
    /// On the plane itself.
    On,
}

/// A plane in normal/distance form: `dot(normal, p) + distance = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Builds a plane from the `(a, b, c, d)` coefficients of
    /// `ax + by + cz + d = 0`.
    pub fn from_coefficients(v: Vec4) -> Self {
        Self {
            normal: Vec3::new(v.x, v.y, v.z),
            distance: v.w,
        }
    }

    /// Scales the plane so the normal has unit length.
    pub fn normalize(&mut self) {
        let length = self.normal.length();
        if length > 0.0 {
            let inv = 1.0 / length;
            self.normal *= inv;
            self.distance *= inv;
        }
    }

    /// Signed distance from `point` to the plane. Positive values are in
    /// front of the normal.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Classifies a point against the plane.
    pub fn side(&self, point: Vec3) -> PlaneSide {
        let distance = self.signed_distance(point);
        if distance > 0.0 {
            PlaneSide::Front
        } else if distance < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::On
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_distance_matches_axis_plane() {
        // y = 2 plane
        let plane = Plane::new(Vec3::Y, -2.0);
        assert!((plane.signed_distance(Vec3::new(0.0, 5.0, 0.0)) - 3.0).abs() < 1e-6);
        assert_eq!(plane.side(Vec3::ZERO), PlaneSide::Back);
        assert_eq!(plane.side(Vec3::new(0.0, 2.0, 0.0)), PlaneSide::On);
    }

    #[test]
    fn normalize_keeps_plane_equation() {
        let mut plane = Plane::from_coefficients(Vec4::new(0.0, 3.0, 0.0, -6.0));
        plane.normalize();
        assert!((plane.normal.length() - 1.0).abs() < 1e-6);
        // The point (0, 2, 0) stays on the plane after normalization
        assert_eq!(plane.side(Vec3::new(0.0, 2.0, 0.0)), PlaneSide::On);
    }
}

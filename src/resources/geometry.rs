use glam::{Vec2, Vec3};

/// A sphere enclosing a geometry's vertices, used for frustum culling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// CPU-side triangle-list geometry with planar attributes.
///
/// Attribute vectors are parallel: `positions`, `normals` and `uvs` have
/// one entry per vertex; `indices` address them in groups of three.
/// The bounding sphere is computed once at construction, so the vertex
/// data is immutable after creation.
#[derive(Debug, Clone)]
pub struct Geometry {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
    bounding_sphere: BoundingSphere,
}

impl Geometry {
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, uvs: Vec<Vec2>, indices: Vec<u32>) -> Self {
        let bounding_sphere = compute_bounding_sphere(&positions);
        Self {
            positions,
            normals,
            uvs,
            indices,
            bounding_sphere,
        }
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    #[must_use]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        self.bounding_sphere
    }
}

/// Center = midpoint of the axis-aligned bounds, radius = farthest vertex.
fn compute_bounding_sphere(positions: &[Vec3]) -> BoundingSphere {
    if positions.is_empty() {
        return BoundingSphere::default();
    }

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for &p in positions {
        min = min.min(p);
        max = max.max(p);
    }

    let center = (min + max) * 0.5;
    let radius_sq = positions
        .iter()
        .map(|p| p.distance_squared(center))
        .fold(0.0_f32, f32::max);

    BoundingSphere {
        center,
        radius: radius_sq.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_sphere_of_unit_cube_corners() {
        let positions = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        let geometry = Geometry::new(positions, Vec::new(), Vec::new(), Vec::new());
        let sphere = geometry.bounding_sphere();
        assert!(sphere.center.length() < 1e-6);
        assert!((sphere.radius - 3.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn empty_geometry_has_zero_sphere() {
        let geometry = Geometry::new(Vec::new(), Vec::new(), Vec::new(), Vec::new());
        assert_eq!(geometry.bounding_sphere(), BoundingSphere::default());
    }
}

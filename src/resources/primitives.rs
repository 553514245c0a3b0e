//! Procedural shape generators.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::resources::geometry::Geometry;

/// Builds a UV sphere of the given `radius`.
///
/// `height_segments` rings run pole to pole, `width_segments` slices run
/// around the equator. The pole rows are degenerate quads collapsed into
/// triangles, which keeps the index layout uniform.
#[must_use]
pub fn uv_sphere(width_segments: u32, height_segments: u32, radius: f32) -> Geometry {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for ring in 0..=height_segments {
        let v = ring as f32 / height_segments as f32;
        // Latitude from south pole (0) to north pole (PI)
        let theta = v * PI;

        let y = -radius * theta.cos();
        let ring_radius = radius * theta.sin();

        for slice in 0..=width_segments {
            let u = slice as f32 / width_segments as f32;
            let phi = u * 2.0 * PI;

            let x = -ring_radius * phi.cos();
            let z = ring_radius * phi.sin();

            let position = Vec3::new(x, y, z);
            positions.push(position);
            normals.push(position / radius);
            uvs.push(Vec2::new(u, 1.0 - v));
        }
    }

    let stride = width_segments + 1;
    for ring in 0..height_segments {
        for slice in 0..width_segments {
            let v0 = ring * stride + slice;
            let v1 = v0 + 1;
            let v2 = (ring + 1) * stride + slice;
            let v3 = v2 + 1;

            indices.extend_from_slice(&[v0, v1, v2]);
            indices.extend_from_slice(&[v1, v3, v2]);
        }
    }

    Geometry::new(positions, normals, uvs, indices)
}

//! Background skybox: one large sphere enclosing the scene.

use glam::{Vec3, Vec4};

use crate::errors::Result;
use crate::render::graphics::ShaderKey;
use crate::resources::material::Material;
use crate::resources::mesh::Mesh;
use crate::scene::{GeometryKey, NodeHandle, Scene};

/// Spawns the skybox node: centered on the origin, rotated a quarter turn
/// about +Y (texture seam away from the default view) and scaled up to
/// enclose everything.
pub fn spawn_skybox(
    scene: &mut Scene,
    parent: NodeHandle,
    geometry: GeometryKey,
    shader: ShaderKey,
    scale: f32,
) -> Result<NodeHandle> {
    let node = scene.create_child(parent, "Skybox")?;

    let material = Material::new("SkyboxMaterial", shader)
        .with_diffuse(Vec4::new(0.02, 0.02, 0.05, 1.0));
    scene.set_mesh(node, Mesh::new("Skybox", geometry, material))?;

    scene.set_position(node, Vec3::ZERO);
    scene.set_rotation_axis_angle(node, Vec3::Y, 90.0_f32.to_radians());
    scene.set_scale(node, Vec3::splat(scale));

    Ok(node)
}

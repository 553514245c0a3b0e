//! Randomized background star field.

use glam::{Vec3, Vec4};
use rand::Rng;

use crate::errors::Result;
use crate::render::graphics::ShaderKey;
use crate::resources::material::Material;
use crate::resources::mesh::Mesh;
use crate::scene::behavior::Behavior;
use crate::scene::{GeometryKey, NodeHandle, Scene};

/// Pulses the node's uniform scale between `min_size` and `max_size`.
#[derive(Debug, Clone, Copy)]
pub struct Twinkle {
    pub min_size: f32,
    pub max_size: f32,
    /// Pulse rate, radians per second.
    pub rate: f32,
}

impl Behavior for Twinkle {
    fn update(&mut self, scene: &mut Scene, node: NodeHandle, time: f32, _dt: f32) {
        let size = self.min_size + (time * self.rate).sin().abs() * (self.max_size - self.min_size);
        scene.set_scale(node, Vec3::splat(size));
    }
}

/// Scatters `count` twinkling stars around `parent`, sharing one sphere
/// geometry. Positions are drawn per axis from `[inner_radius,
/// outer_radius]` with random sign.
pub fn spawn_star_field(
    scene: &mut Scene,
    parent: NodeHandle,
    geometry: GeometryKey,
    shader: ShaderKey,
    count: usize,
    inner_radius: f32,
    outer_radius: f32,
    min_size: f32,
    max_size: f32,
) -> Result<()> {
    let mut rng = rand::rng();

    for index in 0..count {
        let mut position = Vec3::new(
            rng.random_range(inner_radius..=outer_radius),
            rng.random_range(inner_radius..=outer_radius),
            rng.random_range(inner_radius..=outer_radius),
        );
        if rng.random_bool(0.5) {
            position.x = -position.x;
        }
        if rng.random_bool(0.5) {
            position.y = -position.y;
        }
        if rng.random_bool(0.5) {
            position.z = -position.z;
        }

        let star = scene.create_child(parent, format!("Star_{index:03}"))?;
        let material = Material::new("StarMaterial", shader).with_diffuse(Vec4::ONE);
        scene.set_mesh(star, Mesh::new("Star", geometry, material))?;
        scene.set_position(star, position);
        scene.set_scale(star, Vec3::splat(min_size));
        scene.set_behavior(
            star,
            Twinkle {
                min_size,
                max_size,
                rate: rng.random_range(0.25..0.75),
            },
        )?;
    }

    Ok(())
}

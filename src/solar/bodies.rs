//! Celestial bodies: orbit/spin behaviors and spawn helpers.
//!
//! Each body is a pair of nodes: an unscaled *anchor* that carries the
//! orbit behavior (so the orbit radius is never distorted by the body's
//! own scale), and a scaled *surface* child that carries the mesh and the
//! spin behavior. Moons attach their anchor under a planet's anchor and
//! get the planet's motion for free.

use glam::{Vec3, Vec4};

use crate::errors::Result;
use crate::render::graphics::ShaderKey;
use crate::resources::material::Material;
use crate::resources::mesh::Mesh;
use crate::scene::behavior::Behavior;
use crate::scene::{GeometryKey, NodeHandle, Scene};

/// Continuous rotation about a fixed local axis.
#[derive(Debug, Clone, Copy)]
pub struct Spin {
    pub axis: Vec3,
    /// Radians per second.
    pub rate: f32,
}

impl Behavior for Spin {
    fn update(&mut self, scene: &mut Scene, node: NodeHandle, _time: f32, dt: f32) {
        scene.offset_rotation(node, self.axis, self.rate * dt);
    }
}

/// Circular orbit in the parent's XZ plane.
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub radius: f32,
    /// Radians per second.
    pub speed: f32,
    /// Starting angle, radians.
    pub phase: f32,
}

impl Behavior for Orbit {
    fn update(&mut self, scene: &mut Scene, node: NodeHandle, time: f32, _dt: f32) {
        let angle = self.phase + time * self.speed;
        scene.set_position(
            node,
            Vec3::new(angle.cos() * self.radius, 0.0, angle.sin() * self.radius),
        );
    }
}

/// Static description of one body.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub name: &'static str,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub phase: f32,
    pub size: f32,
    pub spin_rate: f32,
    pub color: Vec3,
}

pub const PLANETS: [BodySpec; 4] = [
    BodySpec {
        name: "Mercury",
        orbit_radius: 4.0,
        orbit_speed: 0.8,
        phase: 0.0,
        size: 0.4,
        spin_rate: 0.4,
        color: Vec3::new(0.6, 0.58, 0.55),
    },
    BodySpec {
        name: "Venus",
        orbit_radius: 6.5,
        orbit_speed: 0.5,
        phase: 1.8,
        size: 0.9,
        spin_rate: 0.2,
        color: Vec3::new(0.9, 0.75, 0.45),
    },
    BodySpec {
        name: "Earth",
        orbit_radius: 9.0,
        orbit_speed: 0.3,
        phase: 3.5,
        size: 1.0,
        spin_rate: 1.0,
        color: Vec3::new(0.25, 0.45, 0.85),
    },
    BodySpec {
        name: "Mars",
        orbit_radius: 12.0,
        orbit_speed: 0.2,
        phase: 5.1,
        size: 0.6,
        spin_rate: 0.9,
        color: Vec3::new(0.8, 0.35, 0.2),
    },
];

pub const MOON: BodySpec = BodySpec {
    name: "Moon",
    orbit_radius: 1.8,
    orbit_speed: 1.5,
    phase: 0.0,
    size: 0.25,
    spin_rate: 0.1,
    color: Vec3::new(0.7, 0.7, 0.7),
};

/// Spawns the sun: a flat-shaded sphere at the origin with a slow spin.
/// Returns the anchor node the planets attach under.
pub fn spawn_sun(
    scene: &mut Scene,
    parent: NodeHandle,
    geometry: GeometryKey,
    shader: ShaderKey,
) -> Result<NodeHandle> {
    let anchor = scene.create_child(parent, "Sun")?;

    let surface = scene.create_child(anchor, "SunSurface")?;
    let material = Material::new("SunMaterial", shader)
        .with_diffuse(Vec4::new(1.0, 0.85, 0.3, 1.0));
    scene.set_mesh(surface, Mesh::new("Sun", geometry, material))?;
    scene.set_scale(surface, Vec3::splat(2.0));
    scene.set_behavior(surface, Spin { axis: Vec3::Y, rate: 0.05 })?;

    Ok(anchor)
}

/// Spawns one orbiting body under `parent` and returns its anchor node
/// (named after the body, so moons can look it up).
pub fn spawn_planet(
    scene: &mut Scene,
    parent: NodeHandle,
    spec: &BodySpec,
    geometry: GeometryKey,
    shader: ShaderKey,
) -> Result<NodeHandle> {
    let anchor = scene.create_child(parent, spec.name)?;
    scene.set_behavior(
        anchor,
        Orbit {
            radius: spec.orbit_radius,
            speed: spec.orbit_speed,
            phase: spec.phase,
        },
    )?;

    let surface = scene.create_child(anchor, format!("{}Surface", spec.name))?;
    let material = Material::new(format!("{}Material", spec.name), shader)
        .with_diffuse(spec.color.extend(1.0));
    scene.set_mesh(surface, Mesh::new(spec.name, geometry, material))?;
    scene.set_scale(surface, Vec3::splat(spec.size));
    scene.set_behavior(
        surface,
        Spin {
            axis: Vec3::Y,
            rate: spec.spin_rate,
        },
    )?;

    Ok(anchor)
}

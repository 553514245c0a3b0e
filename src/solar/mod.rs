//! The solar-system demo scene.
//!
//! A host loop owns the window and the graphics backend and drives the
//! four lifecycle hooks, once per frame for update/render:
//!
//! ```rust,ignore
//! let mut demo = SolarSystem::new(&mut gfx, width, height)?;
//! loop {
//!     demo.update(time, dt);
//!     demo.render(&mut gfx)?;
//! }
//! demo.shutdown();
//! ```
//!
//! Resize events feed [`SolarSystem::handle_resize`]; everything else is
//! internal.

pub mod bodies;
pub mod skybox;
pub mod starfield;

pub use bodies::{Orbit, Spin};
pub use starfield::Twinkle;

use glam::{Vec3, Vec4};

use crate::errors::Result;
use crate::render::graphics::Graphics;
use crate::resources::primitives;
use crate::scene::camera::Camera;
use crate::scene::{NodeHandle, Scene};

const CAMERA_FOV: f32 = 60.0;
const CAMERA_NEAR_CLIP: f32 = 0.1;
const CAMERA_FAR_CLIP: f32 = 1_000_000.0;
const CAMERA_CLEAR_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

const WORLD_UP: Vec3 = Vec3::Y;
const LOOK_TARGET: Vec3 = Vec3::ZERO;
const EYE_POSITION: Vec3 = Vec3::new(24.0, 14.0, 24.0);

const PLANET_RESOLUTION: u32 = 24;
const STAR_RESOLUTION: u32 = 12;

const STAR_COUNT: usize = 100;
const STAR_INNER_RADIUS: f32 = 60.0;
const STAR_OUTER_RADIUS: f32 = 180.0;
const STAR_MIN_SIZE: f32 = 0.1;
const STAR_MAX_SIZE: f32 = 0.4;

const SKYBOX_SCALE: f32 = 500.0;

/// The demo scene and its handles.
pub struct SolarSystem {
    scene: Scene,
    root: NodeHandle,
    camera: NodeHandle,
    compiled: bool,
}

impl std::fmt::Debug for SolarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolarSystem")
            .field("root", &self.root)
            .field("camera", &self.camera)
            .field("compiled", &self.compiled)
            .finish_non_exhaustive()
    }
}

impl SolarSystem {
    /// Builds the whole scene: camera, sun, planets (one with a moon), a
    /// randomized star field and a skybox. Fails if a required shader is
    /// missing from the backend — construction errors abort the demo,
    /// nothing is retried.
    pub fn new(gfx: &mut dyn Graphics, width: u32, height: u32) -> Result<Self> {
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };

        let flat = gfx.load_shader("flat")?;
        let lit = gfx.load_shader("lit")?;

        let mut scene = Scene::new();
        let root = scene.create_node("Root");

        // Camera
        let mut camera = Camera::new(CAMERA_FOV, aspect, CAMERA_NEAR_CLIP, CAMERA_FAR_CLIP)?;
        camera.clear_color = CAMERA_CLEAR_COLOR;
        camera.add_shader(flat);
        camera.add_shader(lit);

        let camera_node = scene.create_child(root, "Camera")?;
        scene.set_camera(camera_node, camera)?;
        scene.set_position(camera_node, EYE_POSITION);
        scene.look_at(camera_node, LOOK_TARGET, WORLD_UP);

        // Shared geometry
        let planet_sphere =
            scene.add_geometry(primitives::uv_sphere(PLANET_RESOLUTION, PLANET_RESOLUTION, 1.0));
        let star_sphere =
            scene.add_geometry(primitives::uv_sphere(STAR_RESOLUTION, STAR_RESOLUTION, 1.0));

        // Bodies
        let sun = bodies::spawn_sun(&mut scene, root, planet_sphere, flat)?;
        for spec in bodies::PLANETS {
            bodies::spawn_planet(&mut scene, sun, &spec, planet_sphere, lit)?;
        }
        let earth = scene.child_by_name(sun, "Earth")?;
        bodies::spawn_planet(&mut scene, earth, &bodies::MOON, planet_sphere, lit)?;

        starfield::spawn_star_field(
            &mut scene,
            root,
            star_sphere,
            flat,
            STAR_COUNT,
            STAR_INNER_RADIUS,
            STAR_OUTER_RADIUS,
            STAR_MIN_SIZE,
            STAR_MAX_SIZE,
        )?;

        skybox::spawn_skybox(&mut scene, root, planet_sphere, flat, SKYBOX_SCALE)?;

        log::info!(
            "solar system built: {} nodes, aspect {aspect:.3}",
            scene.node_count()
        );

        Ok(Self {
            scene,
            root,
            camera: camera_node,
            compiled: false,
        })
    }

    /// Per-frame logic step. `time` is seconds since startup, `dt`
    /// seconds since the previous frame.
    pub fn update(&mut self, time: f32, dt: f32) {
        self.scene.update(time, dt);
    }

    /// Renders one frame. Geometry is uploaded on first use.
    pub fn render(&mut self, gfx: &mut dyn Graphics) -> Result<()> {
        if !self.compiled {
            self.scene.compile(gfx)?;
            self.compiled = true;
        }
        self.scene.render(self.camera, self.root, gfx, true)
    }

    /// Window resize hook. Zero-sized dimensions are ignored (minimized
    /// windows report 0x0).
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(camera) = self.scene.camera_mut(self.camera) {
            camera.set_aspect_ratio(width as f32 / height as f32);
        }
    }

    /// Explicit teardown point for the host loop. All resources are
    /// released by ownership; nothing to track manually.
    pub fn shutdown(self) {
        log::info!("solar system shut down");
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[must_use]
    pub fn camera_node(&self) -> NodeHandle {
        self.camera
    }
}

//! A small real-time scene-graph rendering engine.
//!
//! One tree of nodes carries transforms and optional capabilities (mesh,
//! camera, behavior); [`Scene`] runs the per-frame update, compile and
//! render walks; the GPU sits behind the [`Graphics`] boundary trait.
//! The [`solar`] module is the bundled solar-system demo a host loop can
//! drive.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::too_many_arguments)]

pub mod errors;
pub mod math;
pub mod render;
pub mod resources;
pub mod scene;
pub mod solar;

pub use errors::{OrreryError, Result};
pub use math::{Frustum, Plane};
pub use render::{ClearMode, GpuMeshKey, Graphics, HeadlessGraphics, RenderContext, ShaderKey};
pub use resources::{BoundingSphere, Geometry, Material, Mesh, primitives};
pub use scene::{
    Animation, Behavior, Camera, KeyFrame, Node, NodeHandle, Scene, Transform,
};
pub use solar::SolarSystem;

//! The render boundary.
//!
//! The scene graph does not talk to the GPU directly. It drives the
//! [`Graphics`] trait — a thin, GL-shaped command surface (shader
//! activation, uniform uploads, clears, geometry upload, draws) — and
//! threads a [`RenderContext`] value through the tree walk.
//!
//! [`HeadlessGraphics`] is the bundled backend for tests and CI: it
//! records every command instead of touching a device.

pub mod context;
pub mod graphics;
pub mod headless;

pub use context::RenderContext;
pub use graphics::{ClearMode, GpuMeshKey, Graphics, ShaderKey, uniform};
pub use headless::{Command, HeadlessGraphics};

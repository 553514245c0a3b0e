//! The scene graph.
//!
//! One tree serves both per-frame logic and rendering:
//! - [`Node`]: hierarchy link + [`Transform`] + active flag + optional
//!   capability slots (mesh, camera, behavior)
//! - [`Transform`]: local TRS with cached local/world matrices
//! - [`Scene`]: the arena that owns nodes and components and runs the
//!   update/compile/render walks
//! - [`Camera`]: projection parameters, clear configuration, derived
//!   view/projection matrices
//! - [`Behavior`]: the updatable capability (per-frame logic)
//! - [`Animation`]: keyframe animator implemented as a behavior

pub mod animation;
pub mod behavior;
pub mod camera;
pub mod node;
pub mod scene;
pub mod transform;

pub use animation::{Animation, Axis, KeyFrame};
pub use behavior::Behavior;
pub use camera::Camera;
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Handle to a node in a [`Scene`].
    pub struct NodeHandle;
    /// Handle to a mesh component.
    pub struct MeshKey;
    /// Handle to a camera component.
    pub struct CameraKey;
    /// Handle to a behavior component.
    pub struct BehaviorKey;
    /// Handle to shared geometry stored in the scene.
    pub struct GeometryKey;
}

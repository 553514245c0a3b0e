use crate::scene::{NodeHandle, Scene};

/// Updatable capability: per-frame logic attached to a node.
///
/// The scene's update walk visits behaviors in preorder, pruned by the
/// active flag — an inactive ancestor silences the whole subtree, exactly
/// like the render walk.
///
/// During `update` the behavior's own box is temporarily taken out of the
/// scene, so the implementation receives full mutable access to the scene
/// — it may move its node (the common case), other nodes, or restructure
/// the tree.
pub trait Behavior {
    /// Called once per frame while the node (and its ancestors) are
    /// active. `time` is seconds since startup, `dt` seconds since the
    /// previous frame.
    fn update(&mut self, scene: &mut Scene, node: NodeHandle, time: f32, dt: f32);
}

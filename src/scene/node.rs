use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{BehaviorKey, CameraKey, MeshKey, NodeHandle};

/// A scene node: hierarchy link, transform, active flag and capability
/// slots.
///
/// # Design
///
/// One tree serves both per-frame logic and rendering. What a node *does*
/// is expressed through optional capability slots instead of subclassing
/// or runtime type inspection:
///
/// - `mesh`: the node draws geometry during the render walk
/// - `camera`: the node is a viewpoint
/// - `behavior`: the node runs logic during the update walk
///
/// An entity that animates what it draws (a twinkling star, an orbiting
/// planet) is a single node carrying both a mesh and a behavior, so the
/// two concerns cannot drift apart.
///
/// # Hierarchy
///
/// `parent` and `children` are generational handles into the owning
/// [`Scene`](crate::scene::Scene)'s arena and are kept consistent by the
/// scene's attach/detach/remove operations: a node is in its parent's
/// child list exactly when its parent field points back at it.
///
/// # Active flag
///
/// An inactive node prunes its *entire subtree* from both the update and
/// the render walks — descendants are not visited regardless of their own
/// flags.
#[derive(Debug)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data, touched every frame).
    pub transform: Transform,

    pub active: bool,

    // Capability slots
    pub mesh: Option<MeshKey>,
    pub camera: Option<CameraKey>,
    pub behavior: Option<BehaviorKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            active: true,
            mesh: None,
            camera: None,
            behavior: None,
        }
    }

    /// Returns the parent handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child handles, in insertion order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the cached world matrix.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("Node")
    }
}

use glam::{Affine3A, Quat, Vec3};
use slotmap::{SecondaryMap, SlotMap};

use crate::errors::{OrreryError, Result};
use crate::math::frustum::Frustum;
use crate::render::context::RenderContext;
use crate::render::graphics::{GpuMeshKey, Graphics, uniform};
use crate::resources::geometry::Geometry;
use crate::resources::mesh::Mesh;
use crate::scene::behavior::Behavior;
use crate::scene::camera::Camera;
use crate::scene::node::Node;
use crate::scene::{BehaviorKey, CameraKey, GeometryKey, MeshKey, NodeHandle};

/// The scene graph: an arena of [`Node`]s plus the component stores they
/// reference, and the frame walks that drive them.
///
/// # Hierarchy invariants
///
/// Maintained by `attach`/`detach`/`remove_node` (and violated only by
/// bypassing them):
/// - a node appears in its parent's child list exactly when its parent
///   field points back at it;
/// - a parentless node appears in the root list;
/// - the graph is a forest — `attach` rejects any edge that would make a
///   node its own ancestor.
///
/// # Freshness
///
/// The transform operations on this type (`set_position`, `attach`,
/// `look_at`, ...) recompute the affected subtree's world matrices before
/// returning, so `world_matrix()` reads are exact after any of them.
/// Writing `node.transform` fields directly is also supported; those edits
/// are reconciled by the dirty-checked pass inside [`update`].
///
/// [`update`]: Scene::update
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub(crate) root_nodes: Vec<NodeHandle>,

    meshes: SlotMap<MeshKey, Mesh>,
    cameras: SlotMap<CameraKey, Camera>,
    // Boxes are taken out of their slot while running, which is what lets
    // a behavior mutate the scene that owns it.
    behaviors: SlotMap<BehaviorKey, Option<Box<dyn Behavior>>>,
    geometries: SlotMap<GeometryKey, Geometry>,
    // One GPU upload per geometry, shared by every mesh that uses it
    gpu_geometries: SecondaryMap<GeometryKey, GpuMeshKey>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            meshes: SlotMap::with_key(),
            cameras: SlotMap::with_key(),
            behaviors: SlotMap::with_key(),
            geometries: SlotMap::with_key(),
            gpu_geometries: SecondaryMap::new(),
        }
    }

    // ========================================================================
    // Node creation and removal
    // ========================================================================

    /// Creates a root node.
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeHandle {
        self.add_node(Node::new(name))
    }

    /// Inserts an already-built node as a root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Creates a node linked under `parent`: parent pointer set, appended
    /// to the parent's children, transform parented in one step.
    pub fn create_child(&mut self, parent: NodeHandle, name: impl Into<String>) -> Result<NodeHandle> {
        let parent_world = match self.nodes.get(parent) {
            Some(p) => p.transform.world_matrix,
            None => return Err(OrreryError::StaleHandle("create_child parent")),
        };

        let mut node = Node::new(name);
        node.parent = Some(parent);
        // Identity local transform: the child starts where its parent is
        node.transform.world_matrix = parent_world;

        let handle = self.nodes.insert(node);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        Ok(handle)
    }

    /// Removes a node and its entire subtree (postorder), dropping any
    /// components they carried.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };

        let children = node.children.clone();
        for child in children {
            self.remove_node(child);
        }

        let parent = self.nodes.get(handle).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(p) {
                parent_node.children.retain(|&c| c != handle);
            }
        } else {
            self.root_nodes.retain(|&c| c != handle);
        }

        if let Some(node) = self.nodes.get(handle) {
            if let Some(key) = node.mesh {
                self.meshes.remove(key);
            }
            if let Some(key) = node.camera {
                self.cameras.remove(key);
            }
            if let Some(key) = node.behavior {
                self.behaviors.remove(key);
            }
        }

        self.nodes.remove(handle);
    }

    // ========================================================================
    // Hierarchy: attach / detach
    // ========================================================================

    /// Re-parents `child` under `parent`.
    ///
    /// Detaches from any previous parent first, so a node has at most one
    /// parent. Rejects edges that would close a cycle (including
    /// self-attachment) with [`OrreryError::CyclicAttachment`] and leaves
    /// the hierarchy untouched in that case. On success the child's
    /// subtree world matrices are refreshed against the new parent.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) -> Result<()> {
        if !self.nodes.contains_key(child) {
            return Err(OrreryError::StaleHandle("attach child"));
        }
        if !self.nodes.contains_key(parent) {
            return Err(OrreryError::StaleHandle("attach parent"));
        }
        if child == parent || self.is_ancestor(child, parent) {
            let name = self
                .nodes
                .get(child)
                .map(|n| n.name.clone())
                .unwrap_or_default();
            return Err(OrreryError::CyclicAttachment(name));
        }

        // Detach from the old parent (or the root list)
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(op) = old_parent {
            if let Some(n) = self.nodes.get_mut(op) {
                n.children.retain(|&c| c != child);
            }
        } else {
            self.root_nodes.retain(|&c| c != child);
        }

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }

        self.refresh_subtree(child);
        Ok(())
    }

    /// Unlinks `child` from its parent and promotes it to a root node.
    ///
    /// Detaching a node that has no parent is a structural error
    /// ([`OrreryError::DetachedRoot`]).
    pub fn detach(&mut self, child: NodeHandle) -> Result<()> {
        let Some(node) = self.nodes.get(child) else {
            return Err(OrreryError::StaleHandle("detach"));
        };
        let Some(parent) = node.parent else {
            return Err(OrreryError::DetachedRoot(node.name.clone()));
        };

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.retain(|&c| c != child);
        }
        if let Some(n) = self.nodes.get_mut(child) {
            n.parent = None;
            n.transform.mark_dirty();
        }
        self.root_nodes.push(child);

        self.refresh_subtree(child);
        Ok(())
    }

    /// Whether `ancestor` appears on `node`'s parent chain.
    fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Handles of all parentless nodes, in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.name = name.into();
        }
    }

    /// Whether the node exists and is flagged active. A stale handle
    /// reads as inactive.
    #[must_use]
    pub fn is_active(&self, handle: NodeHandle) -> bool {
        self.nodes.get(handle).is_some_and(|n| n.active)
    }

    pub fn set_active(&mut self, handle: NodeHandle, active: bool) {
        match self.nodes.get_mut(handle) {
            Some(node) => node.active = active,
            None => log::warn!("set_active on a stale node handle"),
        }
    }

    // ========================================================================
    // Child lookup
    // ========================================================================

    /// First child of `parent` named `name`, in insertion order.
    ///
    /// A miss is an error, not an empty option — lookups are written
    /// against scenes the caller built.
    pub fn child_by_name(&self, parent: NodeHandle, name: &str) -> Result<NodeHandle> {
        let node = self
            .nodes
            .get(parent)
            .ok_or(OrreryError::StaleHandle("child_by_name parent"))?;
        node.children
            .iter()
            .copied()
            .find(|&c| self.nodes.get(c).is_some_and(|n| n.name == name))
            .ok_or_else(|| OrreryError::NodeNotFound(name.to_string()))
    }

    /// All children of `parent` named `name`, in insertion order.
    #[must_use]
    pub fn children_by_name(&self, parent: NodeHandle, name: &str) -> Vec<NodeHandle> {
        self.nodes.get(parent).map_or_else(Vec::new, |node| {
            node.children
                .iter()
                .copied()
                .filter(|&c| self.nodes.get(c).is_some_and(|n| n.name == name))
                .collect()
        })
    }

    /// First child carrying a mesh.
    pub fn child_with_mesh(&self, parent: NodeHandle) -> Result<NodeHandle> {
        self.child_where(parent, |n| n.mesh.is_some(), "a mesh")
    }

    /// First child carrying a camera.
    pub fn child_with_camera(&self, parent: NodeHandle) -> Result<NodeHandle> {
        self.child_where(parent, |n| n.camera.is_some(), "a camera")
    }

    /// First child carrying a behavior.
    pub fn child_with_behavior(&self, parent: NodeHandle) -> Result<NodeHandle> {
        self.child_where(parent, |n| n.behavior.is_some(), "a behavior")
    }

    fn child_where(
        &self,
        parent: NodeHandle,
        predicate: impl Fn(&Node) -> bool,
        what: &str,
    ) -> Result<NodeHandle> {
        let node = self
            .nodes
            .get(parent)
            .ok_or(OrreryError::StaleHandle("child lookup parent"))?;
        node.children
            .iter()
            .copied()
            .find(|&c| self.nodes.get(c).is_some_and(&predicate))
            .ok_or_else(|| OrreryError::NodeNotFound(format!("no child with {what} under '{}'", node.name)))
    }

    // ========================================================================
    // Components
    // ========================================================================

    pub fn add_geometry(&mut self, geometry: Geometry) -> GeometryKey {
        self.geometries.insert(geometry)
    }

    #[must_use]
    pub fn geometry(&self, key: GeometryKey) -> Option<&Geometry> {
        self.geometries.get(key)
    }

    /// Attaches a mesh component, replacing (and dropping) any previous
    /// one on the node.
    pub fn set_mesh(&mut self, node: NodeHandle, mesh: Mesh) -> Result<MeshKey> {
        if !self.nodes.contains_key(node) {
            return Err(OrreryError::StaleHandle("set_mesh"));
        }
        let key = self.meshes.insert(mesh);
        if let Some(n) = self.nodes.get_mut(node) {
            if let Some(old) = n.mesh.replace(key) {
                self.meshes.remove(old);
            }
        }
        Ok(key)
    }

    #[must_use]
    pub fn mesh(&self, node: NodeHandle) -> Option<&Mesh> {
        self.meshes.get(self.nodes.get(node)?.mesh?)
    }

    pub fn mesh_mut(&mut self, node: NodeHandle) -> Option<&mut Mesh> {
        let key = self.nodes.get(node)?.mesh?;
        self.meshes.get_mut(key)
    }

    /// Attaches a camera component, replacing any previous one.
    pub fn set_camera(&mut self, node: NodeHandle, camera: Camera) -> Result<CameraKey> {
        if !self.nodes.contains_key(node) {
            return Err(OrreryError::StaleHandle("set_camera"));
        }
        let key = self.cameras.insert(camera);
        if let Some(n) = self.nodes.get_mut(node) {
            if let Some(old) = n.camera.replace(key) {
                self.cameras.remove(old);
            }
        }
        Ok(key)
    }

    #[must_use]
    pub fn camera(&self, node: NodeHandle) -> Option<&Camera> {
        self.cameras.get(self.nodes.get(node)?.camera?)
    }

    pub fn camera_mut(&mut self, node: NodeHandle) -> Option<&mut Camera> {
        let key = self.nodes.get(node)?.camera?;
        self.cameras.get_mut(key)
    }

    /// Attaches a behavior, replacing any previous one.
    pub fn set_behavior(&mut self, node: NodeHandle, behavior: impl Behavior + 'static) -> Result<BehaviorKey> {
        if !self.nodes.contains_key(node) {
            return Err(OrreryError::StaleHandle("set_behavior"));
        }
        let key = self.behaviors.insert(Some(Box::new(behavior)));
        if let Some(n) = self.nodes.get_mut(node) {
            if let Some(old) = n.behavior.replace(key) {
                self.behaviors.remove(old);
            }
        }
        Ok(key)
    }

    // ========================================================================
    // Transform operations (eager)
    // ========================================================================
    //
    // Each mutator refreshes the node's subtree world matrices before
    // returning. All silently no-op on stale handles, matching the
    // component accessors above.

    pub fn set_position(&mut self, node: NodeHandle, position: Vec3) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.set_position(position);
            self.refresh_subtree(node);
        }
    }

    pub fn offset_position(&mut self, node: NodeHandle, offset: Vec3) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.offset_position(offset);
            self.refresh_subtree(node);
        }
    }

    pub fn set_rotation(&mut self, node: NodeHandle, rotation: Quat) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.set_rotation(rotation);
            self.refresh_subtree(node);
        }
    }

    pub fn set_rotation_axis_angle(&mut self, node: NodeHandle, axis: Vec3, radians: f32) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.set_rotation_axis_angle(axis, radians);
            self.refresh_subtree(node);
        }
    }

    pub fn offset_rotation(&mut self, node: NodeHandle, axis: Vec3, radians: f32) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.offset_rotation(axis, radians);
            self.refresh_subtree(node);
        }
    }

    pub fn set_scale(&mut self, node: NodeHandle, scale: Vec3) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.set_scale(scale);
            self.refresh_subtree(node);
        }
    }

    /// Orients the node's forward axis at `target` (parent-space).
    pub fn look_at(&mut self, node: NodeHandle, target: Vec3, up: Vec3) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.look_at(target, up);
            self.refresh_subtree(node);
        }
    }

    /// Escape hatch: overwrites the node's world matrix directly and
    /// re-derives only its descendants from it. See
    /// [`Transform::set_world_matrix`] for the invariant this suspends.
    ///
    /// [`Transform::set_world_matrix`]: crate::scene::Transform::set_world_matrix
    pub fn set_world_matrix(&mut self, node: NodeHandle, matrix: Affine3A) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.transform.set_world_matrix(matrix);
            self.refresh_children(node);
        }
    }

    // ========================================================================
    // World-matrix passes
    // ========================================================================

    /// Top-down hierarchy pass with dirty-check short-circuiting: a
    /// subtree is recomposed only where a local transform changed or an
    /// ancestor's world matrix moved. Iterative (explicit stack), so deep
    /// scenes cannot overflow the call stack.
    pub fn update_world_matrices(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);
        for &root in self.root_nodes.iter().rev() {
            stack.push((root, Affine3A::IDENTITY, false));
        }

        while let Some((handle, parent_world, parent_changed)) = stack.pop() {
            let (world, changed) = {
                let Some(node) = self.nodes.get_mut(handle) else {
                    continue;
                };
                let local_changed = node.transform.update_local_matrix();
                let needs_update = local_changed || parent_changed;
                if needs_update {
                    node.transform.world_matrix = parent_world * node.transform.local_matrix;
                }
                (node.transform.world_matrix, needs_update)
            };

            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            for &child in node.children.iter().rev() {
                stack.push((child, world, changed));
            }
        }
    }

    /// Forces recomposition of `root`'s subtree against its parent's
    /// current world matrix.
    fn refresh_subtree(&mut self, root: NodeHandle) {
        let parent_world = match self.nodes.get(root).and_then(|n| n.parent) {
            Some(p) => self
                .nodes
                .get(p)
                .map_or(Affine3A::IDENTITY, |n| n.transform.world_matrix),
            None => Affine3A::IDENTITY,
        };
        self.propagate(vec![(root, parent_world)]);
    }

    /// Re-derives only the descendants of `root` from its (possibly
    /// overridden) world matrix.
    fn refresh_children(&mut self, root: NodeHandle) {
        let Some(node) = self.nodes.get(root) else {
            return;
        };
        let world = node.transform.world_matrix;
        let stack: Vec<(NodeHandle, Affine3A)> =
            node.children.iter().rev().map(|&c| (c, world)).collect();
        self.propagate(stack);
    }

    fn propagate(&mut self, mut stack: Vec<(NodeHandle, Affine3A)>) {
        while let Some((handle, parent_world)) = stack.pop() {
            let world = {
                let Some(node) = self.nodes.get_mut(handle) else {
                    continue;
                };
                node.transform.update_local_matrix();
                node.transform.world_matrix = parent_world * node.transform.local_matrix;
                node.transform.world_matrix
            };

            // Keep a moved camera's view in step with its node
            if let Some(key) = self.nodes.get(handle).and_then(|n| n.camera) {
                if let Some(camera) = self.cameras.get_mut(key) {
                    camera.update_matrices(&world);
                }
            }

            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            for &child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }
    }

    // ========================================================================
    // Frame walks
    // ========================================================================

    /// Runs one logic step: behaviors in preorder (pruned by the active
    /// flag), then the world-matrix pass, then camera view/projection
    /// refresh. Call once per frame before rendering.
    pub fn update(&mut self, time: f32, dt: f32) {
        let mut tasks = Vec::new();
        for &root in &self.root_nodes {
            self.collect_behaviors(root, &mut tasks);
        }

        for (handle, key) in tasks {
            let Some(slot) = self.behaviors.get_mut(key) else {
                continue;
            };
            let Some(mut behavior) = slot.take() else {
                continue;
            };
            behavior.update(self, handle, time, dt);
            // The behavior may have removed its own node; only restore
            // the box if the slot survived.
            if let Some(slot) = self.behaviors.get_mut(key) {
                *slot = Some(behavior);
            }
        }

        self.update_world_matrices();
        self.sync_cameras();
    }

    fn collect_behaviors(&self, handle: NodeHandle, out: &mut Vec<(NodeHandle, BehaviorKey)>) {
        let Some(node) = self.nodes.get(handle) else {
            return;
        };
        if !node.active {
            return;
        }
        if let Some(key) = node.behavior {
            out.push((handle, key));
        }
        for &child in &node.children {
            self.collect_behaviors(child, out);
        }
    }

    fn sync_cameras(&mut self) {
        let nodes = &self.nodes;
        let cameras = &mut self.cameras;
        for node in nodes.values() {
            if let Some(key) = node.camera {
                if let Some(camera) = cameras.get_mut(key) {
                    camera.update_matrices(&node.transform.world_matrix);
                }
            }
        }
    }

    // ========================================================================
    // Compile
    // ========================================================================

    /// Uploads mesh geometry through the render boundary.
    ///
    /// Idempotent: meshes that already hold a GPU key are skipped, and a
    /// geometry shared by several meshes is uploaded once. Calling this
    /// again after adding nodes uploads only what is new — repeats can
    /// never duplicate GPU resources.
    pub fn compile(&mut self, gfx: &mut dyn Graphics) -> Result<()> {
        let geometries = &self.geometries;
        let mut uploaded = 0usize;
        for mesh in self.meshes.values_mut() {
            if mesh.gpu.is_some() {
                continue;
            }
            if let Some(&key) = self.gpu_geometries.get(mesh.geometry) {
                mesh.gpu = Some(key);
                continue;
            }
            let geometry = geometries
                .get(mesh.geometry)
                .ok_or(OrreryError::StaleHandle("mesh geometry"))?;
            let key = gfx.upload_geometry(geometry)?;
            self.gpu_geometries.insert(mesh.geometry, key);
            mesh.gpu = Some(key);
            uploaded += 1;
        }
        if uploaded > 0 {
            log::debug!("compiled {uploaded} geometry upload(s)");
        }
        Ok(())
    }

    // ========================================================================
    // Render
    // ========================================================================

    /// Renders the subtree under `root` from the viewpoint of
    /// `camera_node`.
    ///
    /// Clears (per the camera's clear configuration) when `clear` is set,
    /// uploads view/projection to every shader the camera registered,
    /// then walks the tree depth-first. Each recursion level receives its
    /// own copy of the [`RenderContext`] carrying that node's world
    /// matrix as the model matrix. Inactive nodes prune their whole
    /// subtree; meshes are culled against the camera frustum before
    /// drawing.
    pub fn render(
        &self,
        camera_node: NodeHandle,
        root: NodeHandle,
        gfx: &mut dyn Graphics,
        clear: bool,
    ) -> Result<()> {
        let node = self
            .nodes
            .get(camera_node)
            .ok_or(OrreryError::StaleHandle("render camera node"))?;
        let camera_key = node.camera.ok_or_else(|| OrreryError::MissingCapability {
            node: node.name.clone(),
            capability: "camera",
        })?;
        let camera = self
            .cameras
            .get(camera_key)
            .ok_or(OrreryError::StaleHandle("camera component"))?;

        if clear && !camera.clear_mode.is_empty() {
            gfx.clear(camera.clear_mode, camera.clear_color, camera.clear_depth);
        }

        for &shader in &camera.shaders {
            gfx.use_shader(shader)?;
            gfx.set_uniform_mat4(uniform::VIEW, &camera.view_matrix)?;
            gfx.set_uniform_mat4(uniform::PROJECTION, &camera.projection_matrix)?;
        }

        let context = RenderContext::new(camera_node, camera.view_matrix, camera.projection_matrix);

        if self.is_active(root) {
            self.render_node(root, context, &camera.frustum, gfx)?;
        }
        Ok(())
    }

    fn render_node(
        &self,
        handle: NodeHandle,
        context: RenderContext,
        frustum: &Frustum,
        gfx: &mut dyn Graphics,
    ) -> Result<()> {
        let Some(node) = self.nodes.get(handle) else {
            return Ok(());
        };

        // This level's own copy: the node's world matrix becomes the
        // model matrix for its draw and the baseline for its children.
        let context = context.with_model(node.transform.world_matrix_as_mat4());

        if let Some(mesh_key) = node.mesh {
            if let Some(mesh) = self.meshes.get(mesh_key) {
                self.draw_mesh(mesh, &context, frustum, gfx)?;
            }
        }

        for &child in &node.children {
            if self.nodes.get(child).is_some_and(|n| n.active) {
                self.render_node(child, context, frustum, gfx)?;
            }
        }
        Ok(())
    }

    fn draw_mesh(
        &self,
        mesh: &Mesh,
        context: &RenderContext,
        frustum: &Frustum,
        gfx: &mut dyn Graphics,
    ) -> Result<()> {
        let gpu = mesh
            .gpu
            .ok_or_else(|| OrreryError::NotCompiled(mesh.name.clone()))?;

        if let Some(geometry) = self.geometries.get(mesh.geometry) {
            let sphere = geometry.bounding_sphere();
            let center = context.model.transform_point3(sphere.center);
            let max_scale = context
                .model
                .x_axis
                .truncate()
                .length()
                .max(context.model.y_axis.truncate().length())
                .max(context.model.z_axis.truncate().length());
            if !frustum.intersects_sphere(center, sphere.radius * max_scale) {
                return Ok(());
            }
        }

        mesh.material.apply(gfx)?;
        gfx.set_uniform_mat4(uniform::MODEL, &context.model)?;
        gfx.draw(gpu)
    }
}

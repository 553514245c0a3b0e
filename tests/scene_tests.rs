//! Scene integration tests
//!
//! Tests for:
//! - Node creation, child factories, cascading removal
//! - Hierarchy consistency: attach/detach, at-most-one-parent
//! - Cycle rejection and detach-of-root as structural errors
//! - Child lookup by name and by capability
//! - Active-flag pruning of the update walk
//! - Behavior dispatch order and scene mutation from behaviors
//! - Keyframe animation playback

mod common;

use common::{init_logger, vec3_approx};
use glam::Vec3;
use orrery::errors::OrreryError;
use orrery::scene::animation::{Animation, Axis, KeyFrame};
use orrery::scene::{Behavior, NodeHandle, Scene};
use orrery::solar::{Orbit, Spin};
use std::cell::RefCell;
use std::f32::consts::FRAC_PI_2;
use std::rc::Rc;

// ============================================================================
// Node Creation & Removal
// ============================================================================

#[test]
fn create_node_is_a_root() {
    let mut scene = Scene::new();
    let handle = scene.create_node("TestNode");
    assert!(scene.get_node(handle).is_some());
    assert!(scene.roots().contains(&handle));
    assert_eq!(scene.name(handle), Some("TestNode"));
}

#[test]
fn create_child_links_both_directions() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let child = scene.create_child(parent, "C").unwrap();

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert!(scene.get_node(parent).unwrap().children().contains(&child));
    assert!(!scene.roots().contains(&child));
}

#[test]
fn create_child_under_stale_parent_fails() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    scene.remove_node(parent);
    assert!(matches!(
        scene.create_child(parent, "C"),
        Err(OrreryError::StaleHandle(_))
    ));
}

#[test]
fn remove_node_destroys_subtree() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let child = scene.create_child(parent, "C").unwrap();
    let grandchild = scene.create_child(child, "G").unwrap();

    scene.remove_node(parent);

    assert!(scene.get_node(parent).is_none());
    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
    assert_eq!(scene.node_count(), 0);
    assert!(scene.roots().is_empty());
}

#[test]
fn remove_child_unlinks_from_parent() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let child = scene.create_child(parent, "C").unwrap();

    scene.remove_node(child);

    assert!(scene.get_node(parent).unwrap().children().is_empty());
    assert!(scene.get_node(parent).is_some());
}

// ============================================================================
// Hierarchy: Attach / Detach
// ============================================================================

#[test]
fn attach_moves_between_parents_exactly_once() {
    let mut scene = Scene::new();
    let p1 = scene.create_node("P1");
    let p2 = scene.create_node("P2");
    let x = scene.create_child(p1, "X").unwrap();

    scene.attach(x, p2).unwrap();

    let p1_children = scene.get_node(p1).unwrap().children();
    let p2_children = scene.get_node(p2).unwrap().children();
    assert!(!p1_children.contains(&x));
    assert_eq!(p2_children.iter().filter(|&&c| c == x).count(), 1);
    assert_eq!(scene.get_node(x).unwrap().parent(), Some(p2));
}

#[test]
fn attach_promotes_root_out_of_root_list() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let orphan = scene.create_node("O");

    scene.attach(orphan, parent).unwrap();

    assert!(!scene.roots().contains(&orphan));
    assert_eq!(scene.get_node(orphan).unwrap().parent(), Some(parent));
}

#[test]
fn detach_promotes_to_root() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let child = scene.create_child(parent, "C").unwrap();

    scene.detach(child).unwrap();

    assert_eq!(scene.get_node(child).unwrap().parent(), None);
    assert!(!scene.get_node(parent).unwrap().children().contains(&child));
    assert!(scene.roots().contains(&child));
}

#[test]
fn detach_of_root_is_an_error() {
    let mut scene = Scene::new();
    let root = scene.create_node("R");
    assert!(matches!(
        scene.detach(root),
        Err(OrreryError::DetachedRoot(_))
    ));
}

#[test]
fn attach_to_self_is_rejected() {
    let mut scene = Scene::new();
    let node = scene.create_node("N");
    assert!(matches!(
        scene.attach(node, node),
        Err(OrreryError::CyclicAttachment(_))
    ));
    assert_eq!(scene.get_node(node).unwrap().parent(), None);
}

#[test]
fn attach_under_descendant_is_rejected() {
    let mut scene = Scene::new();
    let a = scene.create_node("A");
    let b = scene.create_child(a, "B").unwrap();
    let c = scene.create_child(b, "C").unwrap();

    let err = scene.attach(a, c).unwrap_err();
    assert!(matches!(err, OrreryError::CyclicAttachment(_)));

    // Hierarchy is untouched
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
    assert!(scene.roots().contains(&a));
    assert!(scene.get_node(b).unwrap().children().contains(&c));
}

// ============================================================================
// Child Lookup
// ============================================================================

#[test]
fn child_by_name_first_match_in_insertion_order() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let first = scene.create_child(parent, "Twin").unwrap();
    let _second = scene.create_child(parent, "Twin").unwrap();

    assert_eq!(scene.child_by_name(parent, "Twin").unwrap(), first);
}

#[test]
fn child_by_name_miss_is_an_error() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    scene.create_child(parent, "A").unwrap();

    let err = scene.child_by_name(parent, "Missing").unwrap_err();
    assert!(matches!(err, OrreryError::NodeNotFound(_)));
}

#[test]
fn children_by_name_returns_all_matches() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let a = scene.create_child(parent, "Star").unwrap();
    scene.create_child(parent, "Planet").unwrap();
    let b = scene.create_child(parent, "Star").unwrap();

    assert_eq!(scene.children_by_name(parent, "Star"), vec![a, b]);
}

#[test]
fn capability_queries_find_first_carrier() {
    let mut scene = Scene::new();
    let parent = scene.create_node("P");
    let plain = scene.create_child(parent, "Plain").unwrap();
    let mover = scene.create_child(parent, "Mover").unwrap();
    scene
        .set_behavior(mover, Spin { axis: Vec3::Y, rate: 1.0 })
        .unwrap();

    assert_eq!(scene.child_with_behavior(parent).unwrap(), mover);
    assert!(matches!(
        scene.child_with_mesh(parent),
        Err(OrreryError::NodeNotFound(_))
    ));
    let _ = plain;
}

// ============================================================================
// Behaviors
// ============================================================================

/// Records the visit order through a shared log.
struct Recorder {
    label: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Behavior for Recorder {
    fn update(&mut self, _scene: &mut Scene, _node: NodeHandle, _time: f32, _dt: f32) {
        self.log.borrow_mut().push(self.label);
    }
}

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, label: &'static str) -> Recorder {
    Recorder {
        label,
        log: Rc::clone(log),
    }
}

#[test]
fn behaviors_run_in_preorder() {
    init_logger();
    let mut scene = Scene::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let root = scene.create_node("Root");
    let a = scene.create_child(root, "A").unwrap();
    let a1 = scene.create_child(a, "A1").unwrap();
    let b = scene.create_child(root, "B").unwrap();

    scene.set_behavior(a, recorder(&log, "A")).unwrap();
    scene.set_behavior(a1, recorder(&log, "A1")).unwrap();
    scene.set_behavior(b, recorder(&log, "B")).unwrap();

    scene.update(0.0, 0.016);

    assert_eq!(*log.borrow(), vec!["A", "A1", "B"]);
}

#[test]
fn inactive_subtree_skips_behaviors() {
    let mut scene = Scene::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let root = scene.create_node("Root");
    let a = scene.create_child(root, "A").unwrap();
    let a1 = scene.create_child(a, "A1").unwrap();
    let b = scene.create_child(root, "B").unwrap();

    scene.set_behavior(a, recorder(&log, "A")).unwrap();
    scene.set_behavior(a1, recorder(&log, "A1")).unwrap();
    scene.set_behavior(b, recorder(&log, "B")).unwrap();

    // Pruning the subtree silences descendants regardless of their flags
    scene.set_active(a, false);
    scene.update(0.0, 0.016);

    assert_eq!(*log.borrow(), vec!["B"]);
}

#[test]
fn orbit_behavior_positions_node_on_circle() {
    let mut scene = Scene::new();
    let root = scene.create_node("Root");
    let body = scene.create_child(root, "Body").unwrap();
    scene
        .set_behavior(
            body,
            Orbit {
                radius: 4.0,
                speed: 1.0,
                phase: 0.0,
            },
        )
        .unwrap();

    scene.update(0.0, 0.016);
    let p0 = scene.get_node(body).unwrap().transform.position;
    assert!(vec3_approx(p0, Vec3::new(4.0, 0.0, 0.0)));

    scene.update(FRAC_PI_2, 0.016);
    let p1 = scene.get_node(body).unwrap().transform.position;
    assert!(vec3_approx(p1, Vec3::new(0.0, 0.0, 4.0)));
}

#[test]
fn spin_behavior_accumulates_rotation() {
    let mut scene = Scene::new();
    let node = scene.create_node("Top");
    scene
        .set_behavior(node, Spin { axis: Vec3::Y, rate: FRAC_PI_2 })
        .unwrap();

    // Four quarter-second steps: a quarter turn total
    for frame in 0..4 {
        scene.update(frame as f32 * 0.25, 0.25);
    }

    let forward = scene.get_node(node).unwrap().transform.forward();
    assert!(vec3_approx(forward, Vec3::new(-1.0, 0.0, 0.0)));
}

// ============================================================================
// Keyframe Animation
// ============================================================================

#[test]
fn animation_translates_over_duration() {
    let mut scene = Scene::new();
    let node = scene.create_node("Mover");
    let animation =
        Animation::new().with_key_frame(KeyFrame::new(2.0, Axis::Up, 0.0, Axis::Up, 1.0));
    scene.set_behavior(node, animation).unwrap();

    scene.update(0.0, 0.0); // starts playback
    scene.update(0.5, 0.5);
    let halfway = scene.get_node(node).unwrap().transform.position;
    assert!(vec3_approx(halfway, Vec3::new(0.0, 1.0, 0.0)));

    scene.update(1.0, 0.5);
    let done = scene.get_node(node).unwrap().transform.position;
    assert!(vec3_approx(done, Vec3::new(0.0, 2.0, 0.0)));

    // Finished: further updates leave the transform alone
    scene.update(5.0, 4.0);
    let after = scene.get_node(node).unwrap().transform.position;
    assert!(vec3_approx(after, done));
}

#[test]
fn animation_advances_through_frames() {
    let mut scene = Scene::new();
    let node = scene.create_node("Mover");
    let animation = Animation::new()
        .with_key_frame(KeyFrame::new(1.0, Axis::Up, 0.0, Axis::Up, 1.0))
        .with_key_frame(KeyFrame::new(3.0, Axis::Right, 0.0, Axis::Up, 1.0));
    scene.set_behavior(node, animation).unwrap();

    scene.update(0.0, 0.0);
    scene.update(1.0, 1.0); // frame 0 complete
    scene.update(2.0, 1.0); // frame 1 complete

    let end = scene.get_node(node).unwrap().transform.position;
    assert!(vec3_approx(end, Vec3::new(3.0, 1.0, 0.0)));
}

#[test]
fn animation_rotation_spans_frame() {
    let mut scene = Scene::new();
    let node = scene.create_node("Turner");
    let animation =
        Animation::new().with_key_frame(KeyFrame::new(0.0, Axis::Up, FRAC_PI_2, Axis::Up, 1.0));
    scene.set_behavior(node, animation).unwrap();

    scene.update(0.0, 0.0);
    for step in 1..=4 {
        scene.update(step as f32 * 0.25, 0.25);
    }

    let forward = scene.get_node(node).unwrap().transform.forward();
    assert!(
        (forward - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-3,
        "expected -X facing, got {forward}"
    );
}

// ============================================================================
// Active Flag
// ============================================================================

#[test]
fn stale_handle_reads_as_inactive() {
    let mut scene = Scene::new();
    let node = scene.create_node("N");
    assert!(scene.is_active(node));

    scene.set_active(node, false);
    assert!(!scene.is_active(node));

    scene.remove_node(node);
    assert!(!scene.is_active(node));
}

#[test]
fn update_is_well_behaved_on_empty_scene() {
    let mut scene = Scene::new();
    scene.update(0.0, 0.016);
    assert_eq!(scene.node_count(), 0);
}

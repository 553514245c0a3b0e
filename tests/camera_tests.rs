//! Camera tests
//!
//! Tests for:
//! - Perspective projection (finite and infinite-far sentinel)
//! - Projection parameter validation (far == near, non-positive near)
//! - Identity matrices before the first update
//! - View matrix as the inverse of the node's world matrix
//! - Aspect-ratio updates
//! - Frustum derivation from the camera

mod common;

use common::{approx_eq, mat4_approx, vec3_approx};
use glam::{Mat4, Vec3};
use orrery::errors::OrreryError;
use orrery::scene::{Camera, Scene};

fn scene_with_camera(fov: f32, aspect: f32, near: f32, far: f32) -> (Scene, orrery::NodeHandle) {
    let mut scene = Scene::new();
    let node = scene.create_node("Camera");
    let camera = Camera::new(fov, aspect, near, far).unwrap();
    scene.set_camera(node, camera).unwrap();
    (scene, node)
}

// ============================================================================
// Projection Formulas
// ============================================================================

#[test]
fn finite_projection_matches_standard_formula() {
    let (mut scene, node) = scene_with_camera(60.0, 16.0 / 9.0, 0.1, 1000.0);
    scene.update(0.0, 0.0);

    let camera = scene.camera(node).unwrap();
    let expected = Mat4::perspective_rh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    assert!(mat4_approx(*camera.projection_matrix(), expected));
}

#[test]
fn projection_y_scale_is_inverse_tan_half_fov() {
    let (mut scene, node) = scene_with_camera(60.0, 16.0 / 9.0, 0.1, 1000.0);
    scene.update(0.0, 0.0);

    let camera = scene.camera(node).unwrap();
    let expected = 1.0 / 30.0_f32.to_radians().tan();
    assert!(
        approx_eq(camera.projection_matrix().y_axis.y, expected),
        "expected {expected}, got {}",
        camera.projection_matrix().y_axis.y
    );
}

#[test]
fn negative_far_selects_infinite_projection() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, -1.0);
    scene.update(0.0, 0.0);

    let camera = scene.camera(node).unwrap();
    let expected = Mat4::perspective_infinite_rh(60.0_f32.to_radians(), 1.0, 0.1);
    assert!(mat4_approx(*camera.projection_matrix(), expected));
}

#[test]
fn equal_near_far_is_rejected_not_a_crash() {
    let err = Camera::new(60.0, 1.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(
        err,
        OrreryError::InvalidProjection { near, far } if near == far
    ));
}

#[test]
fn set_clip_planes_validates() {
    let mut camera = Camera::new(60.0, 1.0, 0.1, 100.0).unwrap();
    assert!(camera.set_clip_planes(0.5, 0.5).is_err());
    assert!(camera.set_clip_planes(0.5, 0.1).is_err());
    assert!(camera.set_clip_planes(0.5, -1.0).is_ok());
    assert!(camera.far_plane() < 0.0);
}

// ============================================================================
// Matrix Lifecycle
// ============================================================================

#[test]
fn matrices_identity_until_first_update() {
    let (scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);
    let camera = scene.camera(node).unwrap();
    assert_eq!(*camera.view_matrix(), Mat4::IDENTITY);
    assert_eq!(*camera.projection_matrix(), Mat4::IDENTITY);
}

#[test]
fn view_matrix_is_world_inverse() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);
    scene.set_position(node, Vec3::new(1.0, 2.0, 3.0));
    scene.update(0.0, 0.0);

    let world = Mat4::from(*scene.get_node(node).unwrap().world_matrix());
    let camera = scene.camera(node).unwrap();
    assert!(mat4_approx(world * *camera.view_matrix(), Mat4::IDENTITY));
}

#[test]
fn eager_camera_move_refreshes_view() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);

    // No frame pass: the eager transform op keeps the view in step
    scene.set_position(node, Vec3::new(0.0, 5.0, 10.0));

    let camera = scene.camera(node).unwrap();
    let eye = camera.view_matrix().inverse().w_axis.truncate();
    assert!(vec3_approx(eye, Vec3::new(0.0, 5.0, 10.0)));
}

#[test]
fn look_at_view_faces_target() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);
    scene.set_position(node, Vec3::new(10.0, 10.0, 10.0));
    scene.look_at(node, Vec3::ZERO, Vec3::Y);
    scene.update(0.0, 0.0);

    // The origin should land on the view-space -Z axis
    let camera = scene.camera(node).unwrap();
    let origin_view = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(origin_view.z < 0.0);
    assert!(origin_view.x.abs() < 1e-4);
    assert!(origin_view.y.abs() < 1e-4);
}

// ============================================================================
// Aspect Ratio
// ============================================================================

#[test]
fn aspect_ratio_changes_x_scale() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);
    scene.update(0.0, 0.0);
    let square = scene.camera(node).unwrap().projection_matrix().x_axis.x;

    scene.camera_mut(node).unwrap().set_aspect_ratio(2.0);
    scene.update(0.016, 0.016);
    let wide = scene.camera(node).unwrap().projection_matrix().x_axis.x;

    assert!(!approx_eq(square, wide));
    assert!(approx_eq(wide, square / 2.0));
}

// ============================================================================
// Frustum
// ============================================================================

#[test]
fn frustum_tracks_camera_position() {
    let (mut scene, node) = scene_with_camera(60.0, 1.0, 0.1, 1000.0);
    scene.update(0.0, 0.0);

    // Camera at origin looking down -Z
    let frustum = *scene.camera(node).unwrap().frustum();
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0));

    // Turn the camera around: +Z is now visible
    scene.look_at(node, Vec3::new(0.0, 0.0, 10.0), Vec3::Y);
    scene.update(0.016, 0.016);
    let frustum = *scene.camera(node).unwrap().frustum();
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0));
}

//! Shared helpers for the integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use glam::{Affine3A, Mat4, Vec3};

pub const EPSILON: f32 = 1e-5;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

pub fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

pub fn affine_approx(a: Affine3A, b: Affine3A) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

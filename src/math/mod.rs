//! Math helpers for visibility culling.
//!
//! Only what the render walk needs: a plane type and a view frustum
//! extracted from a view-projection matrix.

pub mod frustum;
pub mod plane;

pub use frustum::Frustum;
pub use plane::{Plane, PlaneSide};

//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`OrreryError`] covers all failure modes including:
//! - Scene-graph lookups that miss (children, capabilities)
//! - Structural invariant violations (cyclic attachment, detaching a root)
//! - Invalid camera projection parameters
//! - Render-boundary misuse (missing shaders/uniforms, drawing an
//!   uncompiled mesh)
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, OrreryError>`. Lookup misses are errors rather
//! than `None` — they are treated as programmer errors that should stop a
//! scene build, not as recoverable runtime conditions.

use thiserror::Error;

/// The main error type for the engine.
#[derive(Error, Debug)]
pub enum OrreryError {
    // ========================================================================
    // Scene-Graph Lookup Errors
    // ========================================================================
    /// A child/node lookup by name or capability found no match.
    #[error("Node does not exist: {0}")]
    NodeNotFound(String),

    /// An operation was given a handle whose node has been removed.
    #[error("Stale node handle: {0}")]
    StaleHandle(&'static str),

    /// The node exists but does not carry the required capability
    /// (e.g. rendering through a node that has no camera).
    #[error("Node '{node}' has no {capability}")]
    MissingCapability {
        /// Name of the node that was queried
        node: String,
        /// The capability that was expected ("camera", "mesh", ...)
        capability: &'static str,
    },

    // ========================================================================
    // Structural Invariant Violations
    // ========================================================================
    /// Attaching the node would make it its own ancestor.
    #[error("Cyclic attachment rejected: {0}")]
    CyclicAttachment(String),

    /// The node has no parent to detach from.
    #[error("Cannot detach root node: {0}")]
    DetachedRoot(String),

    // ========================================================================
    // Camera Errors
    // ========================================================================
    /// Rejected projection parameters (`near <= 0`, or a finite far plane
    /// that does not lie strictly beyond the near plane).
    #[error("Invalid projection planes: near = {near}, far = {far}")]
    InvalidProjection {
        /// Requested near plane distance
        near: f32,
        /// Requested far plane distance
        far: f32,
    },

    // ========================================================================
    // Render-Boundary Errors
    // ========================================================================
    /// The backend has no shader program under this name or key.
    #[error("Shader not found: {0}")]
    ShaderNotFound(String),

    /// A uniform upload was attempted with no shader program active.
    #[error("No shader bound while setting '{0}'")]
    NoShaderBound(String),

    /// The active shader program has no uniform with this name.
    #[error("Shader variable not found: {0}")]
    UniformNotFound(String),

    /// A draw was issued for a mesh whose geometry was never uploaded.
    #[error("Mesh not compiled: {0}")]
    NotCompiled(String),
}

/// Alias for `Result<T, OrreryError>`.
pub type Result<T> = std::result::Result<T, OrreryError>;
